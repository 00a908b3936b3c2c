//! Player repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::games::{sort_chronologically, Game};
use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub aga_id: i32,
    pub aga_rank: i32,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            aga_id: model.aga_id,
            aga_rank: model.aga_rank,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id).await?;
    Ok(player.map(Player::from))
}

pub async fn find_by_aga_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    aga_id: i32,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_aga_id(conn, aga_id).await?;
    Ok(player.map(Player::from))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::list_all(conn).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    first_name: &str,
    last_name: &str,
    aga_id: i32,
    aga_rank: i32,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerInsert::new(first_name, last_name, aga_id, aga_rank);
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

/// Remove a player; `false` when no such row existed.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<bool, DomainError> {
    let removed = players_adapter::delete_player(conn, player_id).await?;
    Ok(removed > 0)
}

/// The player's derived game collection, oldest first.
pub async fn games_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<Game>, DomainError> {
    let models = players_adapter::games_for_player(conn, player_id).await?;
    let mut games: Vec<Game> = models.into_iter().map(Game::from).collect();
    sort_chronologically(&mut games);
    Ok(games)
}

pub async fn count_games_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, DomainError> {
    Ok(players_adapter::count_games_for_player(conn, player_id).await?)
}
