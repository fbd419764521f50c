//! Civil calendar types: `CivilDate` and `UtcDateTime`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A proleptic Gregorian calendar date.
///
/// This is the unit a panchanga day is requested for and the date half of
/// the descriptor cache key. Ordering is chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Construct a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1..=12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day of this date's midnight (0h), calendar-frame agnostic:
    /// subtract the UTC offset (in days) to get the UTC JD of a local
    /// midnight.
    pub fn jd_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The calendar date containing `jd` (same time frame as `jd` itself).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// The following calendar date.
    pub fn next_day(&self) -> Self {
        Self::from_jd(self.jd_midnight() + 1.0)
    }

    /// The preceding calendar date.
    pub fn prev_day(&self) -> Self {
        Self::from_jd(self.jd_midnight() - 1.0)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad year in {s:?}")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad month in {s:?}")))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad day in {s:?}")))?;
        Self::new(year, month, day)
    }
}

/// A UTC timestamp with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Day (UTC) of this timestamp.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Decompose a Julian Day (UTC) into calendar fields.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The calendar date part.
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcDateTime {
    type Err = TimeError;

    /// Parses `YYYY-MM-DDTHH:MM[:SS[.frac]][Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('Z').unwrap_or(s);
        let Some((date_part, time_part)) = trimmed.split_once('T') else {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DDTHH:MM:SS, got {s:?}"
            )));
        };
        let date: CivilDate = date_part.parse()?;

        let mut fields = time_part.splitn(3, ':');
        let (Some(h), Some(m)) = (fields.next(), fields.next()) else {
            return Err(TimeError::Parse(format!("bad time in {s:?}")));
        };
        let hour: u32 = h
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad hour in {s:?}")))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad minute in {s:?}")))?;
        let second: f64 = match fields.next() {
            Some(sec) => sec
                .parse()
                .map_err(|_| TimeError::Parse(format!("bad second in {s:?}")))?,
            None => 0.0,
        };
        if hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0..=23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0..=59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            minute,
            second,
        })
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
