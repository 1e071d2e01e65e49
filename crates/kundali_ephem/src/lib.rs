//! Ephemeris provider contract and built-in providers.
//!
//! The chart pipeline talks to an ephemeris only through two traits:
//! [`JulianDayProvider`] turns a UT calendar instant into a Julian Day, and
//! [`EphemerisProvider`] answers tropical longitudes, the Ascendant, and
//! the ayanamsa for that Julian Day. [`AnalyticEphemeris`] computes them
//! from closed-form theories; [`FixedEphemeris`] returns canned values.

pub mod analytic;
pub mod error;
pub mod fixed;
pub mod kepler;
pub mod lagna;
pub mod moon;
pub mod precession;

pub use analytic::{AnalyticEphemeris, MAX_SUPPORTED_JD, MIN_SUPPORTED_JD};
pub use error::EphemerisError;
pub use fixed::FixedEphemeris;

/// Bodies an ephemeris provider must answer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// Mean ascending lunar node.
    MeanNode,
}

/// All bodies in provider order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }
}

/// House system requested when asking for the Ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    #[default]
    WholeSign,
    Placidus,
}

impl HouseSystem {
    /// Single-letter code conventional in astrology software.
    pub const fn code(self) -> char {
        match self {
            Self::WholeSign => 'W',
            Self::Placidus => 'P',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'W' => Some(Self::WholeSign),
            'P' => Some(Self::Placidus),
            _ => None,
        }
    }
}

/// Civil UT instant to Julian Day.
pub trait JulianDayProvider: Send + Sync {
    /// `ut_hours` is decimal hours in `[0, 24)` on the given UT date.
    fn julian_day(&self, year: i32, month: u32, day: u32, ut_hours: f64)
    -> Result<f64, EphemerisError>;
}

/// Positions for a Julian Day.
///
/// All angles are degrees. Longitudes are tropical, mean equinox of date.
pub trait EphemerisProvider: Send + Sync {
    fn tropical_longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError>;

    /// Ascendant for an observer at `latitude` (north +) and `longitude`
    /// (east +).
    fn ascendant_longitude(
        &self,
        jd: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<f64, EphemerisError>;

    /// Sidereal offset (Lahiri for the built-in provider).
    fn ayanamsa(&self, jd: f64) -> Result<f64, EphemerisError>;
}
