//! Validation of submitted field sets.
//!
//! Each form takes the raw submitted strings plus a [`LeagueLookup`] handle
//! for existence rules and yields either a typed, normalized value or a
//! [`FormErrors`] map naming every failing field. Validation never mutates.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub mod fields;
pub mod game;
pub mod player;
pub mod report;


pub use game::{GameCreate, GameUpdate};
pub use player::{PlayerCreate, PlayerDelete};
pub use report::ReportPeriod;

/// Raw submitted values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawForm(BTreeMap<String, String>);

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and internal callers.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Trimmed value of a field; blank counts as missing.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// True when no field carries a non-blank value.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for RawForm
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawForm(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Field-level validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Keep the value of a passing field or record the failure.
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Read-only queries the existence rules need.
#[async_trait]
pub trait LeagueLookup: Send + Sync {
    /// Player primary key exists.
    async fn player_exists(&self, player_id: i64) -> Result<bool, DomainError>;

    /// Games in which the player sits on either side.
    async fn player_game_count(&self, player_id: i64) -> Result<u64, DomainError>;

    /// A player is registered under this rating-association id.
    async fn aga_id_registered(&self, aga_id: i32) -> Result<bool, DomainError>;

    async fn game_exists(&self, game_id: i64) -> Result<bool, DomainError>;
}
