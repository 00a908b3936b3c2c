pub mod core;

pub use core::{bootstrap_db, connect, orchestrate_migration, schema_up_to_date};
