//! Civil (local clock) time → Universal Time.
//!
//! Birth data arrives as a local calendar date and a 24-hour clock reading
//! in a locale with a fixed UTC offset. There is no timezone database and
//! no daylight-saving handling: the offset is applied as given.
//!
//! `UT = hour + minute / 60 − offset`. The raw value may fall outside
//! `[0, 24)`; [`to_universal`] rolls the calendar date by one day in that
//! case so the hours handed to a Julian Day primitive are always in range.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Largest magnitude accepted for a UTC offset, in hours.
pub const MAX_OFFSET_HOURS: f64 = 14.0;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a `YYYY-MM-DD` proleptic Gregorian date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| TimeError::InvalidDate(format!("{s:?}: {e}")))
}

/// A local wall-clock reading with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Build a clock time, rejecting hour > 23 or minute > 59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime(format!(
                "{hour:02}:{minute:02} is outside 00:00-23:59"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a 24-hour `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::InvalidTime(format!("expected HH:MM, got {s:?}"));
        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour = h.parse::<u32>().map_err(|_| malformed())?;
        let minute = m.parse::<u32>().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    /// Clock reading as decimal hours in `[0, 24)`.
    pub fn decimal_hours(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Fixed offset of local civil time from UT, in hours (east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcOffset {
    hours: f64,
}

impl UtcOffset {
    /// Universal Time itself.
    pub const UTC: Self = Self { hours: 0.0 };

    /// India Standard Time, UT+05:30.
    pub const IST: Self = Self { hours: 5.5 };

    /// Build an offset, rejecting non-finite values and |hours| > 14.
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() || hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(hours));
        }
        Ok(Self { hours })
    }

    pub fn hours(self) -> f64 {
        self.hours
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::IST
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let signed_minutes = (self.hours * 60.0).round() as i32;
        let sign = if signed_minutes < 0 { '-' } else { '+' };
        let total_minutes = signed_minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

/// Universal Time as decimal hours, without wrapping.
///
/// The result may be negative or ≥ 24 when the offset pushes the instant
/// into the adjacent UT day.
pub fn ut_hours(clock: ClockTime, offset: UtcOffset) -> f64 {
    clock.decimal_hours() - offset.hours()
}

/// A UT calendar date with hours of day in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniversalTime {
    pub date: NaiveDate,
    pub hours: f64,
}

impl UniversalTime {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year(), self.month(), self.day() as f64 + self.hours / 24.0)
    }
}

impl Display for UniversalTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut date = self.date;
        let mut total_minutes = (self.hours * 60.0).round() as u32;
        // A value a hair below 24 h rounds up into the next day.
        if total_minutes >= MINUTES_PER_DAY {
            match date.succ_opt() {
                Some(next) => {
                    date = next;
                    total_minutes -= MINUTES_PER_DAY;
                }
                None => total_minutes = MINUTES_PER_DAY - 1,
            }
        }
        write!(
            f,
            "{}T{:02}:{:02}Z",
            date,
            total_minutes / 60,
            total_minutes % 60
        )
    }
}

/// Convert a local date + clock reading to UT, rolling the date when the
/// offset crosses midnight.
pub fn to_universal(
    date: NaiveDate,
    clock: ClockTime,
    offset: UtcOffset,
) -> Result<UniversalTime, TimeError> {
    let out_of_range = || TimeError::InvalidDate(format!("{date} is at the edge of the calendar"));
    let mut date = date;
    let mut hours = ut_hours(clock, offset);
    while hours < 0.0 {
        date = date.pred_opt().ok_or_else(out_of_range)?;
        hours += 24.0;
    }
    while hours >= 24.0 {
        date = date.succ_opt().ok_or_else(out_of_range)?;
        hours -= 24.0;
    }
    Ok(UniversalTime { date, hours })
}
