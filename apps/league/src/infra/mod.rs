//! Infrastructure layer: state construction and storage error translation.

pub mod db_errors;
pub mod state;
