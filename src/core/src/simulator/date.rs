use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Calendar anchor for season 1, day 1.
const SEASON_ONE_START: (i32, u32, u32) = (2024, 8, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate {
    pub season: u32,
    pub day: u32,
}

impl GameDate {
    pub fn new(season: u32, day: u32) -> Self {
        GameDate { season, day }
    }

    pub fn start() -> Self {
        GameDate::new(1, 1)
    }

    /// The following day and whether it opened a new season.
    pub fn next(&self, season_length: u32) -> (GameDate, bool) {
        if self.day >= season_length {
            (GameDate::new(self.season + 1, 1), true)
        } else {
            (GameDate::new(self.season, self.day + 1), false)
        }
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = SEASON_ONE_START;

        NaiveDate::from_ymd_opt(year, month, day)?
            .checked_add_months(Months::new(12 * self.season.saturating_sub(1)))?
            .checked_add_days(Days::new(self.day.saturating_sub(1) as u64))
    }
}

impl Display for GameDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.calendar_date() {
            Some(date) => write!(
                f,
                "Season {}, Day {} ({})",
                self.season,
                self.day,
                date.format("%d %b %Y")
            ),
            None => write!(f, "Season {}, Day {}", self.season, self.day),
        }
    }
}
