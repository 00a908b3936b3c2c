//! Domain layer: league records and the go-specific value rules.

pub mod color;
pub mod rules;

#[cfg(test)]
mod tests_props_rules;

pub use color::{Color, ParseColorError};
pub use rules::{
    format_played_at, parse_played_at, Handicap, Komi, Rank, RuleError, AGA_ID_RANGE,
    EPISODE_RANGE, ID_RANGE, REPORT_SEASON_RANGE, SEASON_RANGE,
};
