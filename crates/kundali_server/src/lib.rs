//! HTTP surface for sidereal birth charts.
//!
//! `GET /` and `GET /privacy` are static; `POST /getBirthChart` runs the
//! chart pipeline on the blocking pool under a timeout.

pub mod config;
pub mod error;
pub mod routes;
pub mod wire;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::{AppState, DEFAULT_MAX_CHARTS, PRIVACY_POLICY, router};
pub use wire::{BirthChartRequest, BirthChartResponse, DashaEntry, PlanetEntry};
