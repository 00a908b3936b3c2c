//! SeaORM adapter for the game repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameInsert, GameUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let n = games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .count(conn)
        .await?;
    Ok(n > 0)
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::PlayedAt)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

/// Games of one season, optionally narrowed to a single episode.
pub async fn list_for_period<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season: i32,
    episode: Option<i32>,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    let mut query = games::Entity::find().filter(games::Column::Season.eq(season));
    if let Some(episode) = episode {
        query = query.filter(games::Column::Episode.eq(episode));
    }
    query
        .order_by_asc(games::Column::PlayedAt)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameInsert,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: NotSet,
        white_id: Set(dto.white_id),
        black_id: Set(dto.black_id),
        winner: Set(dto.winner),
        handicap: Set(dto.handicap),
        komi: Set(dto.komi),
        season: Set(dto.season),
        episode: Set(dto.episode),
        played_at: Set(dto.played_at),
    };

    game_active.insert(conn).await
}

/// Rewrite every mutable column of an existing game.
///
/// Returns `None` when the id is unknown.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    let Some(existing) = games::Entity::find_by_id(dto.id).one(conn).await? else {
        return Ok(None);
    };

    let mut game_active: games::ActiveModel = existing.into();
    game_active.white_id = Set(dto.white_id);
    game_active.black_id = Set(dto.black_id);
    game_active.winner = Set(dto.winner);
    game_active.handicap = Set(dto.handicap);
    game_active.komi = Set(dto.komi);
    game_active.season = Set(dto.season);
    game_active.episode = Set(dto.episode);
    if let Some(played_at) = dto.played_at {
        game_active.played_at = Set(played_at);
    }

    game_active.update(conn).await.map(Some)
}
