//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert through `map_db_err` (also
//! reachable via `From<DbErr> for DomainError`), and handlers then map
//! `DomainError` to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// `table.column` from SQLite "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = "UNIQUE constraint failed: ";
    let start = error_msg.find(prefix)? + prefix.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',')
        .next()
        .filter(|s| !s.is_empty())
}

fn unique_conflict_kind(error_msg: &str) -> ConflictKind {
    let sqlite_hit = extract_sqlite_table_column(error_msg) == Some("players.aga_id");
    let postgres_hit = error_msg.contains("players_aga_id_key");
    if sqlite_hit || postgres_hit {
        ConflictKind::UniqueAgaId
    } else {
        ConflictKind::Other("Unique".into())
    }
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                format!("Record not found: {what}"),
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        return DomainError::conflict(unique_conflict_kind(&error_msg), "Unique constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::conflict(ConflictKind::ForeignKey, "Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation(
            ValidationKind::CheckViolation,
            "Check constraint violation",
        );
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
