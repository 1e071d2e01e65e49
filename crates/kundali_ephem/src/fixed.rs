//! Canned provider returning preset values, for tests and offline demos.

use crate::error::EphemerisError;
use crate::{Body, EphemerisProvider, HouseSystem, JulianDayProvider};

/// Provider that ignores its inputs and answers from fixed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedEphemeris {
    pub julian_day: f64,
    pub ayanamsa: f64,
    pub ascendant: f64,
    /// Tropical longitudes indexed by [`Body::index`].
    pub longitudes: [f64; 8],
}

impl FixedEphemeris {
    /// All longitudes zero, ayanamsa zero.
    pub fn new(julian_day: f64) -> Self {
        Self {
            julian_day,
            ayanamsa: 0.0,
            ascendant: 0.0,
            longitudes: [0.0; 8],
        }
    }

    pub fn with_longitude(mut self, body: Body, deg: f64) -> Self {
        self.longitudes[body.index()] = deg;
        self
    }

    pub fn with_ascendant(mut self, deg: f64) -> Self {
        self.ascendant = deg;
        self
    }

    pub fn with_ayanamsa(mut self, deg: f64) -> Self {
        self.ayanamsa = deg;
        self
    }
}

impl JulianDayProvider for FixedEphemeris {
    fn julian_day(&self, _: i32, _: u32, _: u32, ut_hours: f64) -> Result<f64, EphemerisError> {
        if !ut_hours.is_finite() {
            return Err(EphemerisError::InvalidEpoch(ut_hours));
        }
        Ok(self.julian_day)
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn tropical_longitude(&self, _: f64, body: Body) -> Result<f64, EphemerisError> {
        Ok(self.longitudes[body.index()])
    }

    fn ascendant_longitude(
        &self,
        _: f64,
        _: f64,
        _: f64,
        _: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        Ok(self.ascendant)
    }

    fn ayanamsa(&self, _: f64) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }
}
