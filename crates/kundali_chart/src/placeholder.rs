//! Fixed dasha and yoga values attached to every chart.
//!
//! Neither is computed from the chart yet.

use kundali_vedic::Graha;

use crate::chart_types::DashaPeriod;

pub const PLACEHOLDER_DASHA: DashaPeriod = DashaPeriod {
    mahadasha: Graha::Shukra,
    antardasha: Graha::Buddh,
};

pub const PLACEHOLDER_YOGAS: [&str; 1] = ["Gajakesari Yoga"];
