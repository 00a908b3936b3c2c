//! Error codes for the league HTTP API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// One or more form fields failed validation
    FormInvalid,
    /// General validation error
    ValidationError,
    /// Malformed request body or query
    BadRequest,
    /// Body content type is neither form-encoded nor JSON
    UnsupportedMediaType,
    /// Missing or mismatched CSRF token on an unsafe request
    CsrfTokenInvalid,
    /// Path player id is not an integer
    InvalidPlayerId,

    // Resource not found
    PlayerNotFound,
    GameNotFound,
    NotFound,

    // Conflicts
    /// A player already holds this AGA id
    UniqueAgaId,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Database constraint violations
    /// Foreign key constraint violation (SQLSTATE 23503)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514)
    CheckViolation,

    // System errors
    DbError,
    DbUnavailable,
    DbTimeout,
    ConfigError,
}

impl ErrorCode {
    /// Canonical string as it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FormInvalid => "FORM_INVALID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::CsrfTokenInvalid => "CSRF_TOKEN_INVALID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueAgaId => "UNIQUE_AGA_ID",
            Self::Conflict => "CONFLICT",

            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    pub const ALL: [ErrorCode; 17] = [
        Self::FormInvalid,
        Self::ValidationError,
        Self::BadRequest,
        Self::UnsupportedMediaType,
        Self::CsrfTokenInvalid,
        Self::InvalidPlayerId,
        Self::PlayerNotFound,
        Self::GameNotFound,
        Self::NotFound,
        Self::UniqueAgaId,
        Self::Conflict,
        Self::FkViolation,
        Self::CheckViolation,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
