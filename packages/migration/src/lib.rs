pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm;
use sea_orm_migration::sea_orm::Statement;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

// keep filename + module name in sync; vec order is the apply order
mod m20170110_000001_create_players_games;
mod m20170117_000001_add_played_at;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20170110_000001_create_players_games::Migration),
            Box::new(m20170117_000001_add_played_at::Migration),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl std::str::FromStr for MigrationCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "fresh" => Ok(Self::Fresh),
            "reset" => Ok(Self::Reset),
            "refresh" => Ok(Self::Refresh),
            "status" => Ok(Self::Status),
            other => Err(format!(
                "unknown migration command '{other}' (expected up | down | fresh | reset | refresh | status)"
            )),
        }
    }
}

/// Run one migrator command against an already-connected database.
///
/// Shared by the migration CLI, application bootstrap and tests.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = diagnostics(db).await?;
    tracing::info!(
        command = ?command,
        backend = %before.backend,
        database = %before.name,
        defined = before.defined,
        applied = before.applied,
        "migrate.begin"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    if let Err(e) = result {
        tracing::error!(command = ?command, backend = %before.backend, error = %e, "migrate.failed");
        return Err(e);
    }

    if command != MigrationCommand::Status {
        let after = diagnostics(db).await?;
        tracing::info!(command = ?command, applied = after.applied, "migrate.done");
    }
    Ok(())
}

#[derive(Debug)]
struct Diagnostics {
    backend: String,
    name: String,
    applied: usize,
    defined: usize,
}

async fn diagnostics(db: &DatabaseConnection) -> Result<Diagnostics, DbErr> {
    let backend = db.get_database_backend();

    let name = match backend {
        sea_orm::DatabaseBackend::Postgres => {
            let stmt = Statement::from_string(backend, "SELECT current_database() AS name");
            match db.query_one(stmt).await? {
                Some(row) => row.try_get("", "name")?,
                None => "<unknown>".to_string(),
            }
        }
        sea_orm::DatabaseBackend::Sqlite => {
            let stmt = Statement::from_string(
                backend,
                "SELECT file FROM pragma_database_list WHERE name = 'main'",
            );
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", "file") {
                    Ok(file) if file.is_empty() => ":memory:".to_string(),
                    Ok(file) => file,
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        _ => "<unsupported>".to_string(),
    };

    Ok(Diagnostics {
        backend: format!("{backend:?}"),
        name,
        applied: count_applied_migrations(db).await.unwrap_or(0),
        defined: Migrator::migrations().len(),
    })
}

/// Number of applied migrations; 0 when the migration table does not exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the latest applied migration, if any.
pub async fn get_latest_migration_version(db: &DatabaseConnection) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
