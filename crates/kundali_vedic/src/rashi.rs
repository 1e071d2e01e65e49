//! Rashi (zodiac sign) lookup and degrees-minutes-seconds breakdown.
//!
//! Twelve equal signs of 30 deg, Mesha (Aries) starting at sidereal 0 deg.
//! Each sign is closed below and open above: 30.0 belongs to Vrishabha.

use crate::util::normalize_360;

/// Span of one sign in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name, e.g. "Vrischika".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western name, as used on the wire.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Position in [`ALL_RASHIS`]: Mesha 0, Meena 11.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, `None` outside 0..=11.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// The sign `steps` places further along the zodiac.
    pub const fn offset(self, steps: u8) -> Self {
        ALL_RASHIS[((self as u8 as u16 + steps as u16) % 12) as usize]
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees; below 30 when taken within a sign.
    pub degrees: u16,
    /// Whole arc-minutes, 0-59.
    pub minutes: u8,
    /// Arc-seconds in [0, 60), fraction kept.
    pub seconds: f64,
}

/// Rashi placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Same as `rashi.index()`.
    pub rashi_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Decimal degrees to DMS. Sign of the input is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = (remainder.floor() as u8).min(59);
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Rashi from a sidereal longitude in degrees (any real value).
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Saturating cast; clamp covers values a hair below 360.
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_rashi = lon - idx as f64 * RASHI_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), Some(*r));
        }
        assert_eq!(Rashi::from_index(12), None);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Rashi::Meena.offset(1), Rashi::Mesha);
        assert_eq!(Rashi::Karka.offset(11), Rashi::Mithuna);
        assert_eq!(Rashi::Mesha.offset(255), Rashi::Karka);
    }

    #[test]
    fn dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!((d.degrees, d.minutes), (23, 51));
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn boundary_thirty_belongs_to_next_sign() {
        assert_eq!(rashi_from_longitude(29.999_999).rashi, Rashi::Mesha);
        let info = rashi_from_longitude(30.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!(info.degrees_in_rashi.abs() < 1e-12);
    }

    #[test]
    fn every_boundary() {
        for i in 0..12u8 {
            assert_eq!(rashi_from_longitude(i as f64 * 30.0).rashi_index, i);
        }
    }

    #[test]
    fn wrap_and_negative() {
        let info = rashi_from_longitude(365.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-10);

        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn just_below_full_circle() {
        let info = rashi_from_longitude(359.999_999_999);
        assert_eq!(info.rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(360.0).rashi, Rashi::Mesha);
    }
}
