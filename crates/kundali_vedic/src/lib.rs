//! Sidereal zodiac mapping for Vedic charts.
//!
//! This crate provides:
//! - Ayanamsha correction bound to a Julian Day
//! - Rashi (sign), nakshatra and pada classification
//! - Whole-sign house assignment
//! - The nine grahas and the ephemeris body behind each

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod zodiac;

pub use ayanamsha::AyanamshaCorrection;
pub use bhava::{WholeSignHouses, whole_sign_houses};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, ketu_from_rahu};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
};
pub use util::normalize_360;
pub use zodiac::{ZodiacPosition, classify};
