use std::ops::RangeInclusive;

use time::macros::format_description;
use time::OffsetDateTime;

/// Rating-association ids accepted for players.
pub const AGA_ID_RANGE: RangeInclusive<i32> = 0..=50000;
/// Player and game primary keys accepted in submitted forms.
pub const ID_RANGE: RangeInclusive<i32> = 0..=50000;
pub const SEASON_RANGE: RangeInclusive<i32> = 0..=10000;
pub const EPISODE_RANGE: RangeInclusive<i32> = 0..=10000;
/// Reports start at season 1; season 0 is the unscheduled bucket.
pub const REPORT_SEASON_RANGE: RangeInclusive<i32> = 1..=10000;

const KYU_RANKS: RangeInclusive<i32> = -30..=-1;
const DAN_RANKS: RangeInclusive<i32> = 1..=9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rank {0} is not in -30..=-1 or 1..=9")]
    Rank(i32),
    #[error("handicap {0} is not an allowed handicap")]
    Handicap(i32),
    #[error("komi {0} is not an allowed komi")]
    Komi(i32),
}

/// AGA rank: negative values are kyu, positive values are dan. Zero is not a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(i32);

impl Rank {
    pub fn is_valid(r: i32) -> bool {
        KYU_RANKS.contains(&r) || DAN_RANKS.contains(&r)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Rank {
    type Error = RuleError;

    fn try_from(r: i32) -> Result<Self, Self::Error> {
        if Rank::is_valid(r) {
            Ok(Rank(r))
        } else {
            Err(RuleError::Rank(r))
        }
    }
}

/// Stones given to the weaker player. One stone is never a handicap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handicap(i32);

impl Handicap {
    pub const ALLOWED: [i32; 9] = [0, 2, 3, 4, 5, 6, 7, 8, 9];

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Handicap {
    type Error = RuleError;

    fn try_from(h: i32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&h) {
            Ok(Handicap(h))
        } else {
            Err(RuleError::Handicap(h))
        }
    }
}

/// Compensation points for white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Komi(i32);

impl Komi {
    pub const ALLOWED: [i32; 4] = [0, 5, 6, 7];

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Komi {
    type Error = RuleError;

    fn try_from(k: i32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&k) {
            Ok(Komi(k))
        } else {
            Err(RuleError::Komi(k))
        }
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS ±HHMM` timestamp.
pub fn parse_played_at(input: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(
        input,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
        ),
    )
}

/// Render a timestamp in the `YYYY-MM-DD HH:MM:SS ±HHMM` wire format.
pub fn format_played_at(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
    ))
}
