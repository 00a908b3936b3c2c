use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend};
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Games {
    Table,
    WhiteId,
    BlackId,
    Season,
    Episode,
    PlayedAt,
}

/// SQLite cannot `ADD COLUMN` with a non-constant default, so the table is
/// rebuilt with the new column and the existing rows copied across.
const SQLITE_REBUILD_GAMES: &[&str] = &[
    "CREATE TABLE games_rebuild (\
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, \
        white_id bigint NOT NULL, \
        black_id bigint NOT NULL, \
        winner varchar(16) NOT NULL CHECK (winner IN ('WHITE', 'BLACK')), \
        handicap integer NOT NULL CHECK (handicap IN (0, 2, 3, 4, 5, 6, 7, 8, 9)), \
        komi integer NOT NULL CHECK (komi IN (0, 5, 6, 7)), \
        season integer NOT NULL DEFAULT 0 CHECK (season BETWEEN 0 AND 10000), \
        episode integer NOT NULL DEFAULT 0 CHECK (episode BETWEEN 0 AND 10000), \
        played_at timestamp_with_timezone_text NOT NULL DEFAULT CURRENT_TIMESTAMP, \
        CHECK (white_id <> black_id), \
        CONSTRAINT fk_games_white_id FOREIGN KEY (white_id) REFERENCES players (id) ON DELETE RESTRICT, \
        CONSTRAINT fk_games_black_id FOREIGN KEY (black_id) REFERENCES players (id) ON DELETE RESTRICT\
    )",
    "INSERT INTO games_rebuild (id, white_id, black_id, winner, handicap, komi, season, episode) \
     SELECT id, white_id, black_id, winner, handicap, komi, season, episode FROM games",
    "DROP TABLE games",
    "ALTER TABLE games_rebuild RENAME TO games",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        match manager.get_database_backend() {
            DatabaseBackend::Postgres => {
                manager
                    .alter_table(
                        Table::alter()
                            .table(Games::Table)
                            .add_column(
                                ColumnDef::new(Games::PlayedAt)
                                    .timestamp_with_time_zone()
                                    .not_null()
                                    .default(Expr::current_timestamp()),
                            )
                            .to_owned(),
                    )
                    .await?;
            }
            DatabaseBackend::Sqlite => {
                let conn = manager.get_connection();
                for stmt in SQLITE_REBUILD_GAMES {
                    conn.execute_unprepared(stmt).await?;
                }

                // DROP TABLE took the original indexes with it
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
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Games::Table)
                    .drop_column(Games::PlayedAt)
                    .to_owned(),
            )
            .await
    }
}
