//! Game service.

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;

use super::DbLookup;
use crate::db::txn::with_txn;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::forms::{GameCreate, GameUpdate, RawForm};
use crate::repos::games::{self, Game, GameRecord};
use crate::repos::players;

/// Resolve the form's AGA ids to player primary keys.
async fn resolve<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    form: &GameCreate,
) -> Result<GameRecord, DomainError> {
    let white = player_id_for(conn, form.white_aga_id).await?;
    let black = player_id_for(conn, form.black_aga_id).await?;
    Ok(GameRecord {
        white_id: white,
        black_id: black,
        winner: form.winner,
        handicap: form.handicap.get(),
        komi: form.komi.get(),
        season: form.season,
        episode: form.episode,
        played_at: form.played_at,
    })
}

async fn player_id_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    aga_id: i32,
) -> Result<i64, DomainError> {
    players::find_by_aga_id(conn, aga_id)
        .await?
        .map(|p| p.id)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("No player with AGA id {aga_id}"))
        })
}

/// Record a game; `played_at` defaults to now.
pub async fn create_game(db: &DatabaseConnection, raw: RawForm) -> Result<Game, DomainError> {
    with_txn(db, move |txn| {
        Box::pin(async move {
            let form = GameCreate::validate(&raw, &DbLookup::new(txn)).await?;
            let record = resolve(txn, &form).await?;
            let game = games::create(txn, record).await?;
            info!(
                game_id = game.id,
                season = game.season,
                episode = game.episode,
                "game.created"
            );
            Ok(game)
        })
    })
    .await
}

pub async fn update_game(db: &DatabaseConnection, raw: RawForm) -> Result<Game, DomainError> {
    with_txn(db, move |txn| {
        Box::pin(async move {
            let form = GameUpdate::validate(&raw, &DbLookup::new(txn)).await?;
            let record = resolve(txn, &form.game).await?;
            let game = games::update(txn, form.game_id, record).await?;
            info!(game_id = game.id, "game.updated");
            Ok(game)
        })
    })
    .await
}

pub async fn list_games(db: &DatabaseConnection) -> Result<Vec<Game>, DomainError> {
    with_txn(db, |txn| Box::pin(async move { games::list_all(txn).await })).await
}
