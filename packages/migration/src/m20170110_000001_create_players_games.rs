use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    FirstName,
    LastName,
    AgaId,
    AgaRank,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    WhiteId,
    BlackId,
    Winner,
    Handicap,
    Komi,
    Season,
    Episode,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players table
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::FirstName).text().not_null())
                    .col(ColumnDef::new(Players::LastName).text().not_null())
                    .col(
                        ColumnDef::new(Players::AgaId)
                            .integer()
                            .not_null()
                            .unique_key()
                            .check(Expr::col(Players::AgaId).between(0, 50000)),
                    )
                    .col(
                        ColumnDef::new(Players::AgaRank)
                            .integer()
                            .not_null()
                            .check(
                                Expr::col(Players::AgaRank)
                                    .between(-30, 9)
                                    .and(Expr::col(Players::AgaRank).ne(0)),
                            ),
                    )
                    .to_owned(),
            )
            .await?;

        // games table; played_at arrives in the follow-up migration
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::WhiteId).big_integer().not_null())
                    .col(ColumnDef::new(Games::BlackId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Games::Winner)
                            .string_len(16)
                            .not_null()
                            .check(Expr::col(Games::Winner).is_in(["WHITE", "BLACK"])),
                    )
                    .col(
                        ColumnDef::new(Games::Handicap)
                            .integer()
                            .not_null()
                            .check(Expr::col(Games::Handicap).is_in([0, 2, 3, 4, 5, 6, 7, 8, 9])),
                    )
                    .col(
                        ColumnDef::new(Games::Komi)
                            .integer()
                            .not_null()
                            .check(Expr::col(Games::Komi).is_in([0, 5, 6, 7])),
                    )
                    .col(
                        ColumnDef::new(Games::Season)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Games::Season).between(0, 10000)),
                    )
                    .col(
                        ColumnDef::new(Games::Episode)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Games::Episode).between(0, 10000)),
                    )
                    .check(Expr::col(Games::WhiteId).ne(Expr::col(Games::BlackId)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_white_id")
                            .from(Games::Table, Games::WhiteId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_black_id")
                            .from(Games::Table, Games::BlackId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_white_id")
                    .table(Games::Table)
                    .col(Games::WhiteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_black_id")
                    .table(Games::Table)
                    .col(Games::BlackId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_season_episode")
                    .table(Games::Table)
                    .col(Games::Season)
                    .col(Games::Episode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games references players, so it goes first; its indexes go with it
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
