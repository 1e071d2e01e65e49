//! Self-contained analytical provider.
//!
//! Planets come from mean Keplerian elements, the Moon from a truncated
//! lunar series, the node from its mean polynomial. Longitudes are
//! referred to the mean equinox of date. Julian Dates are treated as UT
//! throughout; Delta-T is ignored.

use kundali_time::{calendar_to_jd, jd_to_centuries};

use crate::error::{EphemerisError, finite_angle};
use crate::kepler::{Orbit, geocentric_longitude_j2000_deg, sun_longitude_j2000_deg};
use crate::precession::{general_precession_deg, lahiri_ayanamsha_deg};
use crate::{Body, EphemerisProvider, HouseSystem, JulianDayProvider, lagna, moon};

/// JD of 1800-01-01 0h, first epoch covered by the element table.
pub const MIN_SUPPORTED_JD: f64 = 2_378_496.5;
/// JD of 2051-01-01 0h. The table covers all of 2050, so this bound is
/// exclusive.
pub const MAX_SUPPORTED_JD: f64 = 2_470_172.5;

/// Placidus cusps are undefined beyond the polar circles.
const PLACIDUS_MAX_ABS_LATITUDE: f64 = 66.5;

/// Built-in ephemeris with no kernel files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn centuries(jd: f64) -> Result<f64, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::InvalidEpoch(jd));
        }
        if !(MIN_SUPPORTED_JD..MAX_SUPPORTED_JD).contains(&jd) {
            return Err(EphemerisError::EpochOutOfRange { jd });
        }
        Ok(jd_to_centuries(jd))
    }
}

fn orbit_of(body: Body) -> Option<Orbit> {
    match body {
        Body::Mercury => Some(Orbit::Mercury),
        Body::Venus => Some(Orbit::Venus),
        Body::Mars => Some(Orbit::Mars),
        Body::Jupiter => Some(Orbit::Jupiter),
        Body::Saturn => Some(Orbit::Saturn),
        Body::Sun | Body::Moon | Body::MeanNode => None,
    }
}

impl JulianDayProvider for AnalyticEphemeris {
    fn julian_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        ut_hours: f64,
    ) -> Result<f64, EphemerisError> {
        if !ut_hours.is_finite() {
            return Err(EphemerisError::InvalidEpoch(ut_hours));
        }
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EphemerisError::Malformed("calendar date"));
        }
        Ok(calendar_to_jd(year, month, day as f64 + ut_hours / 24.0))
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn tropical_longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        let t = Self::centuries(jd)?;
        let raw = match body {
            Body::Moon => moon::moon_longitude_deg(t),
            Body::MeanNode => moon::mean_node_deg(t),
            Body::Sun => sun_longitude_j2000_deg(t)? + general_precession_deg(t),
            _ => match orbit_of(body) {
                Some(orbit) => geocentric_longitude_j2000_deg(orbit, t)? + general_precession_deg(t),
                None => return Err(EphemerisError::Malformed("body without orbit")),
            },
        };
        finite_angle(raw, body.name()).map(|v| v.rem_euclid(360.0))
    }

    fn ascendant_longitude(
        &self,
        jd: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        Self::centuries(jd)?;
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(EphemerisError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        if system == HouseSystem::Placidus && latitude.abs() > PLACIDUS_MAX_ABS_LATITUDE {
            return Err(EphemerisError::InvalidLocation(
                "Placidus is undefined above the polar circles",
            ));
        }
        finite_angle(lagna::ascendant_deg(jd, latitude, longitude), "ascendant")
    }

    fn ayanamsa(&self, jd: f64) -> Result<f64, EphemerisError> {
        let t = Self::centuries(jd)?;
        finite_angle(lahiri_ayanamsha_deg(t), "ayanamsa")
    }
}
