//! Tropical to sidereal correction.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (anchored
//! to the vernal equinox) and the sidereal zodiac (anchored to the stars).
//! A correction is fetched once per Julian Day and then applied to every
//! longitude of the chart, so bodies and ascendant share one offset.

use kundali_ephem::error::finite_angle;
use kundali_ephem::{Body, EphemerisProvider, HouseSystem};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Ayanamsha bound to the Julian Day it was computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AyanamshaCorrection {
    jd: f64,
    offset_deg: f64,
}

impl AyanamshaCorrection {
    /// Ask the provider for the ayanamsha of `jd`.
    pub fn for_epoch(provider: &dyn EphemerisProvider, jd: f64) -> Result<Self, VedicError> {
        let offset_deg = finite_angle(provider.ayanamsa(jd)?, "ayanamsa")?;
        Ok(Self { jd, offset_deg })
    }

    /// Correction with a known offset, e.g. from a cached provider answer.
    pub fn from_parts(jd: f64, offset_deg: f64) -> Self {
        Self { jd, offset_deg }
    }

    pub fn offset_deg(&self) -> f64 {
        self.offset_deg
    }

    /// Sidereal longitude in [0, 360) for a tropical one.
    pub fn sidereal(&self, tropical_deg: f64) -> f64 {
        normalize_360(tropical_deg - self.offset_deg)
    }

    /// Sidereal longitude of `body` at this correction's Julian Day.
    pub fn body_longitude(
        &self,
        provider: &dyn EphemerisProvider,
        body: Body,
    ) -> Result<f64, VedicError> {
        let tropical = finite_angle(provider.tropical_longitude(self.jd, body)?, body.name())?;
        Ok(self.sidereal(tropical))
    }

    /// Sidereal ascendant at this correction's Julian Day.
    pub fn ascendant_longitude(
        &self,
        provider: &dyn EphemerisProvider,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<f64, VedicError> {
        let tropical = finite_angle(
            provider.ascendant_longitude(self.jd, latitude, longitude, system)?,
            "ascendant",
        )?;
        Ok(self.sidereal(tropical))
    }
}
