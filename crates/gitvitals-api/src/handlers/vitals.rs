//! Vitals submission relay handler.
//!
//! The payload is opaque: it is forwarded to the prediction service
//! exactly as received, never validated or persisted. The three outcome
//! classes map to fixed response shapes:
//!
//! - downstream 2xx  -> 200 with the prediction
//! - downstream error -> 502 with the downstream response text
//! - transport error  -> 500 with the error message
//!
//! This handler deliberately bypasses [`crate::error::ApiError`]; its
//! response contract predates the common envelope and clients depend on
//! these exact shapes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::state::AppState;

/// Successful relay response.
#[derive(Serialize)]
pub struct SubmitVitalsResponse {
    pub message: &'static str,
    pub prediction: Value,
}

/// Failed relay response.
#[derive(Serialize)]
pub struct SubmitVitalsFailure {
    pub message: &'static str,
    pub error: String,
}

/// POST /api/vitals/submit
///
/// Forward a vitals payload to the ML prediction service and relay the
/// outcome. One downstream call per request, no retries.
pub async fn submit_vitals(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    match state.ml.predict(&payload).await {
        Ok(prediction) => (
            StatusCode::OK,
            Json(SubmitVitalsResponse {
                message: "Vitals data submitted successfully.",
                prediction,
            }),
        )
            .into_response(),
        Err(err) if err.is_upstream() => {
            warn!("Prediction service rejected submission: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(SubmitVitalsFailure {
                    message: "Prediction failed",
                    error: err.detail(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!("Vitals submission could not reach prediction service: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitVitalsFailure {
                    message: "Unable to process vitals submission.",
                    error: err.detail(),
                }),
            )
                .into_response()
        }
    }
}
