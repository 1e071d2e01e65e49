//! Router and request handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use kundali_chart::{BirthInput, ChartConfig, birth_chart};
use kundali_ephem::{EphemerisProvider, JulianDayProvider};
use serde_json::{Value, json};
use tokio::sync::Semaphore;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiError;
use crate::wire::{BirthChartRequest, BirthChartResponse};

pub const PRIVACY_POLICY: &str =
    "This API only receives birth data (date, time, location) to compute astrological charts.";

/// Default cap on chart computations occupying blocking threads at once.
pub const DEFAULT_MAX_CHARTS: usize = 64;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub jd_provider: Arc<dyn JulianDayProvider>,
    pub ephemeris: Arc<dyn EphemerisProvider>,
    pub chart_config: ChartConfig,
    pub timeout: Duration,
    /// One permit per running chart. A permit is released when the
    /// computation returns, not when the request times out.
    chart_slots: Arc<Semaphore>,
    max_charts: usize,
}

impl AppState {
    /// One value serving as both providers.
    pub fn with_provider<P>(provider: P, chart_config: ChartConfig, timeout: Duration) -> Self
    where
        P: JulianDayProvider + EphemerisProvider + 'static,
    {
        let provider = Arc::new(provider);
        Self {
            jd_provider: provider.clone(),
            ephemeris: provider,
            chart_config,
            timeout,
            chart_slots: Arc::new(Semaphore::new(DEFAULT_MAX_CHARTS)),
            max_charts: DEFAULT_MAX_CHARTS,
        }
    }

    /// Replace the concurrent chart cap.
    pub fn with_max_charts(mut self, max_charts: usize) -> Self {
        self.chart_slots = Arc::new(Semaphore::new(max_charts));
        self.max_charts = max_charts;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/privacy", get(privacy))
        .route("/getBirthChart", post(get_birth_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "status": "running" }))
}

async fn privacy() -> Json<Value> {
    Json(json!({ "policy": PRIVACY_POLICY }))
}

async fn get_birth_chart(
    State(state): State<AppState>,
    payload: Result<Json<BirthChartRequest>, JsonRejection>,
) -> Result<Json<BirthChartResponse>, ApiError> {
    let Json(req) = payload?;
    let input = BirthInput::parse(&req.dob, &req.time, req.latitude, req.longitude)?;

    let permit = Arc::clone(&state.chart_slots)
        .try_acquire_owned()
        .map_err(|_| ApiError::Saturated(state.max_charts))?;

    // A timed-out task keeps running on its blocking thread, holding its permit.
    let worker = state.clone();
    let task = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        birth_chart(
            worker.jd_provider.as_ref(),
            worker.ephemeris.as_ref(),
            &input,
            &worker.chart_config,
        )
    });
    let chart = tokio::time::timeout(state.timeout, task)
        .await
        .map_err(|_| ApiError::Timeout(state.timeout))?
        .map_err(|e| ApiError::Worker(e.to_string()))??;

    debug!(julian_day = chart.julian_day, "chart served");
    Ok(Json(BirthChartResponse::from(&chart)))
}
