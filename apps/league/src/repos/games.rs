//! Game repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::{format_played_at, Color};
use crate::entities::games::{self, Winner};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::forms::fields;

/// Game domain model. `white_id` and `black_id` are player primary keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: i64,
    pub white_id: i64,
    pub black_id: i64,
    pub winner: Color,
    pub handicap: i32,
    pub komi: i32,
    pub season: i32,
    pub episode: i32,
    #[serde(serialize_with = "serialize_played_at")]
    pub played_at: OffsetDateTime,
}

impl Game {
    /// Primary key of the winning player.
    pub fn winner_id(&self) -> i64 {
        match self.winner {
            Color::White => self.white_id,
            Color::Black => self.black_id,
        }
    }
}

fn serialize_played_at<S: Serializer>(at: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error> {
    let wire = format_played_at(*at).map_err(serde::ser::Error::custom)?;
    s.serialize_str(&wire)
}

impl From<Winner> for Color {
    fn from(w: Winner) -> Self {
        match w {
            Winner::White => Color::White,
            Winner::Black => Color::Black,
        }
    }
}

impl From<Color> for Winner {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            white_id: model.white_id,
            black_id: model.black_id,
            winner: model.winner.into(),
            handicap: model.handicap,
            komi: model.komi,
            season: model.season,
            episode: model.episode,
            played_at: model.played_at,
        }
    }
}

/// Fields for a new or rewritten game, players given as primary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub white_id: i64,
    pub black_id: i64,
    pub winner: Color,
    pub handicap: i32,
    pub komi: i32,
    pub season: i32,
    pub episode: i32,
    pub played_at: Option<OffsetDateTime>,
}

/// Order by instant played, then id. Stored timestamps may carry different
/// offsets, so this runs on decoded values rather than in SQL.
pub(crate) fn sort_chronologically(games: &mut [Game]) {
    games.sort_by_key(|g| (g.played_at, g.id));
}

/// The wire format carries whole seconds only.
fn now_whole_seconds() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(0).unwrap_or(now)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, DomainError> {
    Ok(games_adapter::exists(conn, game_id).await?)
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Game>, DomainError> {
    let models = games_adapter::list_all(conn).await?;
    let mut games: Vec<Game> = models.into_iter().map(Game::from).collect();
    sort_chronologically(&mut games);
    Ok(games)
}

pub async fn list_for_period<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season: i32,
    episode: Option<i32>,
) -> Result<Vec<Game>, DomainError> {
    let models = games_adapter::list_for_period(conn, season, episode).await?;
    let mut games: Vec<Game> = models.into_iter().map(Game::from).collect();
    sort_chronologically(&mut games);
    Ok(games)
}

/// Insert a game; a missing `played_at` means now.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    record: GameRecord,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameInsert {
        white_id: record.white_id,
        black_id: record.black_id,
        winner: record.winner.into(),
        handicap: record.handicap,
        komi: record.komi,
        season: record.season,
        episode: record.episode,
        played_at: record.played_at.unwrap_or_else(now_whole_seconds),
    };
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

/// Rewrite a game; a missing `played_at` keeps the stored value.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    record: GameRecord,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameUpdate {
        id: game_id,
        white_id: record.white_id,
        black_id: record.black_id,
        winner: record.winner.into(),
        handicap: record.handicap,
        komi: record.komi,
        season: record.season,
        episode: record.episode,
        played_at: record.played_at,
    };
    games_adapter::update_game(conn, dto)
        .await?
        .map(Game::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, fields::game_missing(game_id)))
}
