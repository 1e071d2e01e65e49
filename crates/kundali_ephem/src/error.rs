//! Errors reported by ephemeris providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ephemeris provider errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Julian Day or UT hours are NaN or infinite.
    InvalidEpoch(f64),
    /// Epoch lies outside the provider's supported span.
    EpochOutOfRange { jd: f64 },
    /// Latitude/longitude rejected by the provider.
    InvalidLocation(&'static str),
    /// Iterative solver did not converge.
    NoConvergence(&'static str),
    /// Provider produced a value that is not a usable angle.
    Malformed(&'static str),
    /// Provider could not be reached or failed internally.
    Unavailable(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch(v) => write!(f, "invalid epoch: {v}"),
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::Malformed(msg) => write!(f, "malformed ephemeris result: {msg}"),
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Reject non-finite angles coming back from a provider.
pub fn finite_angle(value: f64, what: &'static str) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::Malformed(what))
    }
}
