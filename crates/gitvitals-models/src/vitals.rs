//! Vital-sign reading models.
//!
//! The prediction relay treats vitals payloads as opaque JSON and never
//! deserializes into these types; they exist for the store-backed routes
//! that persist readings and instructor baselines.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The six clinical measurements captured per reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VitalSigns {
    /// Beats per minute
    pub heart_rate: f64,
    pub blood_pressure_systolic: f64,
    pub blood_pressure_diastolic: f64,
    /// Breaths per minute
    pub respiratory_rate: f64,
    /// Degrees Fahrenheit
    pub temperature: f64,
    /// SpO2 percentage
    pub oxygen_saturation: f64,
}

/// A vitals reading submitted for a student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VitalReading {
    /// Store-assigned record id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Who entered the reading
    pub entered_by_id: String,
    /// Role of the entering actor (student or instructor)
    pub entered_by_role: String,
    pub patient_id: String,
    pub student_id: String,
    /// Ordinal of the reading within the exercise
    pub reading_number: u32,
    #[serde(flatten)]
    pub vitals: VitalSigns,
    pub submitted_at: DateTime<Utc>,
}

/// Instructor-entered baseline vitals for a patient.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CorrectVitals {
    /// Store-assigned record id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub patient_id: String,
    #[serde(flatten)]
    pub vitals: VitalSigns,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
