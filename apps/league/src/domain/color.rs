use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of the board, also used as the recorded winner of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Canonical wire and storage name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
