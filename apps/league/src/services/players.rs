//! Player service.

use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use super::DbLookup;
use crate::db::txn::with_txn;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::forms::{PlayerCreate, PlayerDelete, RawForm};
use crate::logging::RedactedName;
use crate::repos::games::Game;
use crate::repos::players::{self, Player};

/// A player with the derived games collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerDetail {
    pub player: Player,
    pub games: Vec<Game>,
}

pub async fn create_player(db: &DatabaseConnection, raw: RawForm) -> Result<Player, DomainError> {
    with_txn(db, move |txn| {
        Box::pin(async move {
            let form = PlayerCreate::validate(&raw)?;
            let player = players::create(
                txn,
                &form.first_name,
                &form.last_name,
                form.aga_id,
                form.aga_rank.get(),
            )
            .await?;
            info!(
                player_id = player.id,
                aga_id = player.aga_id,
                last_name = %RedactedName(&player.last_name),
                "player.created"
            );
            Ok(player)
        })
    })
    .await
}

/// Delete a player that has no games. Returns the removed id.
pub async fn delete_player(db: &DatabaseConnection, raw: RawForm) -> Result<i64, DomainError> {
    with_txn(db, move |txn| {
        Box::pin(async move {
            let form = PlayerDelete::validate(&raw, &DbLookup::new(txn)).await?;
            if !players::delete(txn, form.player_id).await? {
                return Err(DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {} does not exist", form.player_id),
                ));
            }
            info!(player_id = form.player_id, "player.deleted");
            Ok(form.player_id)
        })
    })
    .await
}

pub async fn list_players(db: &DatabaseConnection) -> Result<Vec<Player>, DomainError> {
    with_txn(db, |txn| Box::pin(async move { players::list_all(txn).await })).await
}

pub async fn player_detail(
    db: &DatabaseConnection,
    player_id: i64,
) -> Result<PlayerDetail, DomainError> {
    with_txn(db, move |txn| {
        Box::pin(async move {
            let player = players::find_by_id(txn, player_id).await?.ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {player_id} does not exist"),
                )
            })?;
            let games = players::games_for_player(txn, player_id).await?;
            Ok(PlayerDetail { player, games })
        })
    })
    .await
}
