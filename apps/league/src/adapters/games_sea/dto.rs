//! DTOs for games_sea adapter.

use time::OffsetDateTime;

use crate::entities::games::Winner;

/// DTO for inserting a game. Player ids are primary keys.
#[derive(Debug, Clone)]
pub struct GameInsert {
    pub white_id: i64,
    pub black_id: i64,
    pub winner: Winner,
    pub handicap: i32,
    pub komi: i32,
    pub season: i32,
    pub episode: i32,
    pub played_at: OffsetDateTime,
}

/// DTO for rewriting an existing game.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub white_id: i64,
    pub black_id: i64,
    pub winner: Winner,
    pub handicap: i32,
    pub komi: i32,
    pub season: i32,
    pub episode: i32,
    /// `None` keeps the stored timestamp.
    pub played_at: Option<OffsetDateTime>,
}
