//! Patient record model.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A simulated patient assigned to a student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PatientRecord {
    /// Store-assigned patient id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User who created the patient
    pub user_id: String,
    /// Assigned student record id, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub name: String,
    /// Relationship of the patient to the scenario (e.g. "self", "family")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Whether instructor baseline vitals have been captured
    pub is_baseline_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
