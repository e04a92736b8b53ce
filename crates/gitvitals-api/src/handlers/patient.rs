//! Patient handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use gitvitals_models::{CorrectVitals, PatientRecord, VitalSigns};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Patient creation request body.
#[derive(Debug, Deserialize)]
pub struct CreatePatientRequest {
    /// Student record id to assign the patient to
    pub student_id: Option<String>,
    pub name: String,
    pub relationship: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

/// Message-only response used by the patient and student routes.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/patient/create
///
/// Create a patient owned by the authenticated caller, optionally
/// assigned to a student.
pub async fn create_patient(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreatePatientRequest>,
) -> ApiResult<Json<MessageResponse>> {
    // Assignment targets must exist before the patient row points at them
    if let Some(student_id) = &request.student_id {
        state
            .students()
            .find(student_id)
            .await?
            .ok_or_else(|| ApiError::bad_request(format!("Student not found: {student_id}")))?;
    }

    let now = Utc::now();
    state
        .patients()
        .create(&PatientRecord {
            id: None,
            user_id: user.id,
            student_id: request.student_id,
            name: request.name,
            relationship: request.relationship,
            age: request.age,
            gender: request.gender,
            is_baseline_set: false,
            created_at: Some(now),
            updated_at: Some(now),
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Patient data saved successfully.".to_string(),
    }))
}

/// POST /api/patient/:id/correct-vitals
///
/// Record the instructor baseline for a patient. The baseline write is
/// awaited before the patient is flagged, so a flagged patient always has
/// a baseline row.
pub async fn correct_vitals(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    Json(vitals): Json<VitalSigns>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .patients()
        .find(&patient_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Patient not found."))?;

    state
        .vitals()
        .create_correct_vitals(&CorrectVitals {
            id: None,
            patient_id: patient_id.clone(),
            vitals,
            created_at: None,
        })
        .await?;

    state.patients().set_baseline_flag(&patient_id).await?;
    info!("Baseline captured for patient {}", patient_id);

    Ok(Json(MessageResponse {
        message: format!("Correct vitals data saved for patient with ID: {patient_id}"),
    }))
}
