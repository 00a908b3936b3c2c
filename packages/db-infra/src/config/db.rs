//! Database selection and connection-spec building from the environment.

use std::env;
use std::str::FromStr;

use sea_orm::DatabaseBackend;

use crate::error::DbInfraError;

/// Which set of databases a process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test profile; database names must carry a `_test` suffix.
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(DbInfraError::config(format!(
                "unsupported database kind '{other}' (expected postgres | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

/// Read `LEAGUE_DB`, defaulting to Postgres.
pub fn db_kind_from_env() -> Result<DbKind, DbInfraError> {
    match env::var("LEAGUE_DB") {
        Ok(value) => value.parse(),
        Err(_) => Ok(DbKind::Postgres),
    }
}

/// Build the connection URL for the given environment and database kind.
pub fn make_conn_spec(env: RuntimeEnv, kind: DbKind) -> Result<String, DbInfraError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let name = db_name(env)?;
            let user = must_var("LEAGUE_DB_USER")?;
            let password = must_var("LEAGUE_DB_PASSWORD")?;
            Ok(format!("postgresql://{user}:{password}@{host}:{port}/{name}"))
        }
        DbKind::SqliteFile => {
            let dir = must_var("SQLITE_DB_DIR")?;
            let file = match env {
                RuntimeEnv::Prod => "league.db",
                RuntimeEnv::Test => "league_test.db",
            };
            Ok(format!(
                "sqlite://{}/{file}?mode=rwc",
                dir.trim_end_matches('/')
            ))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Reject combinations that should never run, before any connection is attempted.
pub fn validate_db_config(env: RuntimeEnv, kind: DbKind) -> Result<(), DbInfraError> {
    if kind == DbKind::SqliteMemory && env == RuntimeEnv::Prod {
        return Err(DbInfraError::config(
            "in-memory SQLite loses all data on exit and is only allowed for the test profile",
        ));
    }
    Ok(())
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let name = must_var("TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{name}'"
                )));
            }
            Ok(name)
        }
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
