//! Combined sign, nakshatra and pada classification of a sidereal point.

use crate::nakshatra::{Nakshatra, NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{Rashi, RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

/// Full classification of one sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacPosition {
    /// Canonical longitude in [0, 360).
    pub longitude: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
}

impl ZodiacPosition {
    pub fn sign(&self) -> Rashi {
        self.rashi.rashi
    }

    pub fn sign_index(&self) -> u8 {
        self.rashi.rashi_index
    }

    pub fn nakshatra(&self) -> Nakshatra {
        self.nakshatra.nakshatra
    }

    pub fn pada(&self) -> u8 {
        self.nakshatra.pada
    }

    /// `(sign index, nakshatra index, pada)`, handy for comparisons.
    pub fn key(&self) -> (u8, u8, u8) {
        (self.rashi.rashi_index, self.nakshatra.nakshatra_index, self.nakshatra.pada)
    }
}

/// Classify any finite longitude. 0 and 360 classify identically.
pub fn classify(deg: f64) -> ZodiacPosition {
    let longitude = normalize_360(deg);
    ZodiacPosition {
        longitude,
        rashi: rashi_from_longitude(longitude),
        nakshatra: nakshatra_from_longitude(longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_full_circle_agree() {
        assert_eq!(classify(0.0), classify(360.0));
        assert_eq!(classify(0.0).key(), (0, 0, 1));
    }

    #[test]
    fn leo_magha() {
        let pos = classify(125.0);
        assert_eq!(pos.sign(), Rashi::Simha);
        assert_eq!(pos.nakshatra(), Nakshatra::Magha);
        assert_eq!(pos.pada(), 2);
    }

    #[test]
    fn sign_and_nakshatra_share_boundaries_every_120_degrees() {
        for k in 0..3 {
            let pos = classify(k as f64 * 120.0);
            assert_eq!(pos.sign_index(), 4 * k);
            assert_eq!(pos.nakshatra.nakshatra_index, 9 * k);
            assert_eq!(pos.pada(), 1);
        }
    }
}
