//! Shared database configuration and migration infrastructure.
//! Used by the league app and the migration CLI.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db;
pub use error::DbInfraError;
pub use infra::db::core::{bootstrap_db, connect, orchestrate_migration, schema_up_to_date};
