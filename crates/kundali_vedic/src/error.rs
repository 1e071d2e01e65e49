//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_ephem::EphemerisError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// A computed index fell outside its lookup table.
    IndexOutOfRange { table: &'static str, index: usize },
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::IndexOutOfRange { table, index } => {
                write!(f, "{table} index out of range: {index}")
            }
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
