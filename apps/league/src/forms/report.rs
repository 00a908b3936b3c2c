use serde::Serialize;

use super::fields;
use super::{FormErrors, RawForm};
use crate::domain::{EPISODE_RANGE, REPORT_SEASON_RANGE};

/// Reporting period. Episode `0` stands for the whole season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub season: i32,
    pub episode: i32,
}

impl ReportPeriod {
    /// A blank query selects no period. Otherwise `season` is required and
    /// `episode` defaults to the whole season.
    pub fn validate(raw: &RawForm) -> Result<Option<Self>, FormErrors> {
        if raw.is_blank() {
            return Ok(None);
        }

        let mut errors = FormErrors::new();
        let season = errors.check("season", fields::bounded(raw, "season", &REPORT_SEASON_RANGE));
        let episode = match raw.value("episode") {
            None => Some(0),
            Some(_) => errors.check("episode", fields::bounded(raw, "episode", &EPISODE_RANGE)),
        };

        match (season, episode) {
            (Some(season), Some(episode)) => Ok(Some(Self { season, episode })),
            _ => Err(errors),
        }
    }

    pub fn whole_season(&self) -> bool {
        self.episode == 0
    }

    /// Episode filter to apply, if any.
    pub fn episode_filter(&self) -> Option<i32> {
        (!self.whole_season()).then_some(self.episode)
    }
}
