use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::errors::domain::DomainError;
use crate::forms::LeagueLookup;
use crate::repos::{games, players};

/// `LeagueLookup` over any SeaORM connection or transaction.
pub struct DbLookup<'a, C> {
    conn: &'a C,
}

impl<'a, C> DbLookup<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> LeagueLookup for DbLookup<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn player_exists(&self, player_id: i64) -> Result<bool, DomainError> {
        Ok(players::find_by_id(self.conn, player_id).await?.is_some())
    }

    async fn player_game_count(&self, player_id: i64) -> Result<u64, DomainError> {
        players::count_games_for_player(self.conn, player_id).await
    }

    async fn aga_id_registered(&self, aga_id: i32) -> Result<bool, DomainError> {
        Ok(players::find_by_aga_id(self.conn, aga_id).await?.is_some())
    }

    async fn game_exists(&self, game_id: i64) -> Result<bool, DomainError> {
        games::exists(self.conn, game_id).await
    }
}
