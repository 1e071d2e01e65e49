//! Error types for civil time parsing and normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/clock parsing or civil → UT conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is malformed or names a day that does not exist.
    InvalidDate(String),
    /// Clock string is malformed, or hour/minute are outside 0-23 / 0-59.
    InvalidTime(String),
    /// UTC offset is not finite or lies outside [-14, +14] hours.
    InvalidOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
            Self::InvalidOffset(hours) => write!(f, "invalid UTC offset: {hours} hours"),
        }
    }
}

impl Error for TimeError {}
