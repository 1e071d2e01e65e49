//! HTTP error responses.

use std::time::Duration;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kundali_chart::ChartError;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("chart computation exceeded {0:?}")]
    Timeout(Duration),
    #[error("all {0} chart workers are busy")]
    Saturated(usize),
    #[error("chart worker failed: {0}")]
    Worker(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Chart(e) => e.kind(),
            Self::Body(_) => "InvalidInput",
            Self::Timeout(_) | Self::Saturated(_) => "EphemerisUnavailable",
            Self::Worker(_) => "ComputationError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            "InvalidInput" => StatusCode::UNPROCESSABLE_ENTITY,
            "EphemerisUnavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Chart(e) => e.detail().to_string(),
            Self::Body(e) => e.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.kind(),
            detail: self.detail(),
        };
        warn!(status = status.as_u16(), kind = body.error, detail = %body.detail, "request failed");
        (status, Json(body)).into_response()
    }
}
