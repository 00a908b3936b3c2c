//! SeaORM adapter for the player repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{games, players};

pub mod dto;

pub use dto::PlayerInsert;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_aga_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    aga_id: i32,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::AgaId.eq(aga_id))
        .one(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerInsert,
) -> Result<players::Model, sea_orm::DbErr> {
    let player_active = players::ActiveModel {
        id: NotSet,
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        aga_id: Set(dto.aga_id),
        aga_rank: Set(dto.aga_rank),
    };

    player_active.insert(conn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = players::Entity::delete_by_id(player_id).exec(conn).await?;
    Ok(res.rows_affected)
}

fn either_side(player_id: i64) -> Condition {
    Condition::any()
        .add(games::Column::WhiteId.eq(player_id))
        .add(games::Column::BlackId.eq(player_id))
}

pub async fn games_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(either_side(player_id))
        .order_by_asc(games::Column::PlayedAt)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn count_games_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find()
        .filter(either_side(player_id))
        .count(conn)
        .await
}
