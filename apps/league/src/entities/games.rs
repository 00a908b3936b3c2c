use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Winner {
    #[sea_orm(string_value = "WHITE")]
    White,
    #[sea_orm(string_value = "BLACK")]
    Black,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "white_id")]
    pub white_id: i64,
    #[sea_orm(column_name = "black_id")]
    pub black_id: i64,
    pub winner: Winner,
    pub handicap: i32,
    pub komi: i32,
    pub season: i32,
    pub episode: i32,
    #[sea_orm(column_name = "played_at")]
    pub played_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::WhiteId",
        to = "super::players::Column::Id",
        on_delete = "Restrict"
    )]
    White,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::BlackId",
        to = "super::players::Column::Id",
        on_delete = "Restrict"
    )]
    Black,
}

impl ActiveModelBehavior for ActiveModel {}
