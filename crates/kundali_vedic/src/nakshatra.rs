//! Nakshatra (lunar mansion) and pada lookup, 27-fold scheme.
//!
//! 27 equal nakshatras of 13 deg 20', each split into 4 padas of 3 deg 20'.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 deg.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

#[rustfmt::skip]
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = {
    use Nakshatra::*;
    [
        Ashwini, Bharani, Krittika, Rohini, Mrigashira, Ardra, Punarvasu,
        Pushya, Ashlesha, Magha, PurvaPhalguni, UttaraPhalguni, Hasta,
        Chitra, Swati, Vishakha, Anuradha, Jyeshtha, Mula, PurvaAshadha,
        UttaraAshadha, Shravana, Dhanishtha, Shatabhisha, PurvaBhadrapada,
        UttaraBhadrapada, Revati,
    ]
};

impl Nakshatra {
    /// Transliterated name, compound names spaced ("Purva Ashadha").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Position in [`ALL_NAKSHATRAS`]: Ashwini 0, Revati 26.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Nakshatra placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Same as `nakshatra.index()`.
    pub nakshatra_index: u8,
    /// Quarter within the nakshatra, 1-4.
    pub pada: u8,
    /// Offset from the nakshatra start, [0, 13 deg 20').
    pub degrees_in_nakshatra: f64,
    /// Offset from the pada start, [0, 3 deg 20').
    pub degrees_in_pada: f64,
}

/// Nakshatra and pada from a sidereal longitude in degrees.
///
/// Any real input is accepted; it is wrapped into [0, 360) first.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    // Float residue can leave the remainder a hair negative at a boundary.
    let degrees_in_nakshatra = (lon - idx as f64 * NAKSHATRA_SPAN).max(0.0);
    let quarter = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        nakshatra_index: idx,
        pada: quarter + 1,
        degrees_in_nakshatra,
        degrees_in_pada: degrees_in_nakshatra - quarter as f64 * PADA_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_index() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn first_and_last() {
        let first = nakshatra_from_longitude(0.0);
        assert_eq!(first.nakshatra, Nakshatra::Ashwini);
        assert_eq!(first.pada, 1);

        let last = nakshatra_from_longitude(359.99);
        assert_eq!(last.nakshatra, Nakshatra::Revati);
        assert_eq!(last.pada, 4);
    }

    #[test]
    fn magha_second_pada() {
        // Magha starts at 120 deg; pada 2 covers 123.33..126.67.
        let info = nakshatra_from_longitude(125.0);
        assert_eq!(info.nakshatra, Nakshatra::Magha);
        assert_eq!(info.pada, 2);
        assert!((info.degrees_in_nakshatra - 5.0).abs() < 1e-9);
    }

    #[test]
    fn pada_boundaries() {
        let base = 3.0 * NAKSHATRA_SPAN;
        for q in 0..4u8 {
            let info = nakshatra_from_longitude(base + q as f64 * PADA_SPAN + 1e-9);
            assert_eq!(info.nakshatra, Nakshatra::Rohini);
            assert_eq!(info.pada, q + 1);
        }
    }

    #[test]
    fn negative_input() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }
}
