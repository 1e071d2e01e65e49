//! Sidereal birth chart assembly.
//!
//! Turns birth data into a [`Chart`]: ascendant, nine graha placements,
//! whole-sign houses, and the dasha/yoga summary. Time and positions come
//! from caller-supplied [`kundali_ephem::JulianDayProvider`] and
//! [`kundali_ephem::EphemerisProvider`] implementations; nothing is kept
//! between calls.

pub mod chart;
pub mod chart_types;
pub mod error;
pub mod input;
pub mod placeholder;

pub use chart::birth_chart;
pub use chart_types::{Chart, DashaPeriod, GrahaPlacement, Placement, round_2};
pub use error::ChartError;
pub use input::{BirthInput, ChartConfig};
pub use placeholder::{PLACEHOLDER_DASHA, PLACEHOLDER_YOGAS};
