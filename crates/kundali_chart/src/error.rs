//! Error type for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_ephem::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic::VedicError;

/// Why a chart could not be produced. No partial chart accompanies it.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or out-of-range birth data.
    InvalidInput(String),
    /// The ephemeris failed, timed out, or returned something unusable.
    EphemerisUnavailable(String),
    /// Internal invariant violated.
    Computation(String),
}

impl ChartError {
    /// Stable machine-readable name of the error category.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::EphemerisUnavailable(_) => "EphemerisUnavailable",
            Self::Computation(_) => "ComputationError",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidInput(m) | Self::EphemerisUnavailable(m) | Self::Computation(m) => m,
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::EphemerisUnavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::Computation(msg) => write!(f, "computation error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::EphemerisUnavailable(e.to_string())
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Ephemeris(inner) => inner.into(),
            other => Self::Computation(other.to_string()),
        }
    }
}
