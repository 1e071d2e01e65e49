//! Output records of chart assembly.

use kundali_time::UniversalTime;
use kundali_vedic::{Graha, Nakshatra, Rashi, WholeSignHouses, ZodiacPosition};

/// A sidereal point with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: ZodiacPosition,
}

impl Placement {
    pub fn new(position: ZodiacPosition) -> Self {
        Self { position }
    }

    /// Sidereal longitude in [0, 360), unrounded.
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    /// Longitude rounded to 2 decimals for display. Never reclassified.
    pub fn display_degree(&self) -> f64 {
        round_2(self.position.longitude)
    }

    pub fn degrees_in_sign(&self) -> f64 {
        self.position.rashi.degrees_in_rashi
    }

    pub fn sign(&self) -> Rashi {
        self.position.sign()
    }

    pub fn nakshatra(&self) -> Nakshatra {
        self.position.nakshatra()
    }

    pub fn pada(&self) -> u8 {
        self.position.pada()
    }
}

/// A graha and where it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPlacement {
    pub graha: Graha,
    pub placement: Placement,
}

/// Current dasha period. Fixed until a real dasha engine exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaPeriod {
    pub mahadasha: Graha,
    pub antardasha: Graha,
}

/// A complete sidereal birth chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// UT instant the chart was cast for.
    pub ut: UniversalTime,
    pub julian_day: f64,
    pub ayanamsha_deg: f64,
    pub lagna: Placement,
    /// In [`kundali_vedic::ALL_GRAHAS`] order.
    pub grahas: [GrahaPlacement; 9],
    pub houses: WholeSignHouses,
    pub dasha: DashaPeriod,
    pub yogas: Vec<&'static str>,
}

impl Chart {
    pub fn graha(&self, graha: Graha) -> &GrahaPlacement {
        &self.grahas[graha.index() as usize]
    }

    /// Whole-sign house (1-12) the graha occupies.
    pub fn house_of(&self, graha: Graha) -> u8 {
        self.houses.house_of(self.graha(graha).placement.sign())
    }
}

/// Round to 2 decimal places.
pub fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
