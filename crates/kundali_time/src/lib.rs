//! Civil-time normalization and Julian Date conversion.
//!
//! This crate provides:
//! - Parsing of `YYYY-MM-DD` dates and `HH:MM` clock readings
//! - Fixed-offset local time → Universal Time, with day rollover
//! - Julian Date ↔ proleptic Gregorian calendar conversions

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{
    ClockTime, MAX_OFFSET_HOURS, UniversalTime, UtcOffset, parse_date, to_universal, ut_hours,
};
pub use error::TimeError;
pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries};

pub use chrono::NaiveDate;
