//! Per-field rules shared by the forms. Each rule returns the user-facing
//! message on failure; the first failing rule wins for a field.

use std::ops::RangeInclusive;

use time::OffsetDateTime;

use super::RawForm;
use crate::domain::{parse_played_at, Color, Handicap, Komi, Rank};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer value.";
pub const NOT_A_CHOICE: &str = "Not a valid choice.";
pub const NOT_A_DATETIME: &str = "Not a valid datetime value.";
pub const INVALID_RANK: &str = "Rank must be -30 to -1 or 1 to 9";
pub const SELF_PLAY: &str = "Players cannot play themselves";
pub const PLAYER_HAS_GAMES: &str = "Players with extant games cannot be deleted";

pub fn out_of_range(range: &RangeInclusive<i32>) -> String {
    format!(
        "Number must be between {} and {}.",
        range.start(),
        range.end()
    )
}

pub fn game_missing(game_id: i64) -> String {
    format!("Game {game_id} does not exist")
}

pub fn player_missing(player_id: i64) -> String {
    format!("Player {player_id} does not exist")
}

pub fn aga_id_unknown(aga_id: i32) -> String {
    format!("No player with AGA id {aga_id}")
}

pub fn required<'a>(raw: &'a RawForm, field: &str) -> Result<&'a str, String> {
    raw.value(field).ok_or_else(|| REQUIRED.to_string())
}

pub fn text(raw: &RawForm, field: &str) -> Result<String, String> {
    required(raw, field).map(str::to_string)
}

pub fn integer(raw: &RawForm, field: &str) -> Result<i64, String> {
    required(raw, field)?
        .parse::<i64>()
        .map_err(|_| NOT_AN_INTEGER.to_string())
}

pub fn within(value: i64, range: &RangeInclusive<i32>) -> Result<i32, String> {
    i32::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .ok_or_else(|| out_of_range(range))
}

pub fn bounded(raw: &RawForm, field: &str, range: &RangeInclusive<i32>) -> Result<i32, String> {
    within(integer(raw, field)?, range)
}

pub fn rank(raw: &RawForm, field: &str) -> Result<Rank, String> {
    let value = integer(raw, field)?;
    i32::try_from(value)
        .ok()
        .and_then(|v| Rank::try_from(v).ok())
        .ok_or_else(|| INVALID_RANK.to_string())
}

pub fn color(raw: &RawForm, field: &str) -> Result<Color, String> {
    required(raw, field)?
        .parse::<Color>()
        .map_err(|_| NOT_A_CHOICE.to_string())
}

fn int_choice<T: TryFrom<i32>>(raw: &RawForm, field: &str) -> Result<T, String> {
    required(raw, field)?
        .parse::<i32>()
        .ok()
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| NOT_A_CHOICE.to_string())
}

pub fn handicap(raw: &RawForm, field: &str) -> Result<Handicap, String> {
    int_choice(raw, field)
}

pub fn komi(raw: &RawForm, field: &str) -> Result<Komi, String> {
    int_choice(raw, field)
}

/// Optional timestamp: missing or blank yields `None`.
pub fn played_at(raw: &RawForm, field: &str) -> Result<Option<OffsetDateTime>, String> {
    match raw.value(field) {
        None => Ok(None),
        Some(v) => parse_played_at(v)
            .map(Some)
            .map_err(|_| NOT_A_DATETIME.to_string()),
    }
}
