//! Student submission handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use gitvitals_models::{VitalReading, VitalSigns};

use crate::error::ApiResult;
use crate::handlers::patient::MessageResponse;
use crate::state::AppState;

/// Reading submission body.
#[derive(Debug, Deserialize)]
pub struct SubmitReadingRequest {
    /// Who entered the reading
    pub entered_by_id: String,
    /// student or instructor
    pub entered_by_role: String,
    pub patient_id: String,
    pub reading_number: u32,
    #[serde(flatten)]
    pub vitals: VitalSigns,
}

/// POST /api/student/:id/submit
///
/// Persist a vitals reading for a student.
pub async fn submit_reading(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<SubmitReadingRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .vitals()
        .create_reading(&VitalReading {
            id: None,
            entered_by_id: request.entered_by_id,
            entered_by_role: request.entered_by_role,
            patient_id: request.patient_id,
            student_id,
            reading_number: request.reading_number,
            vitals: request.vitals,
            submitted_at: Utc::now(),
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Vitals data saved successfully.".to_string(),
    }))
}
