//! Shared data models for the GitVitals backend.
//!
//! This crate provides Serde-serializable types for:
//! - User profiles and roles
//! - Student and patient records
//! - Vital-sign readings and baseline ("correct") vitals

pub mod patient;
pub mod user;
pub mod vitals;

// Re-export common types
pub use patient::PatientRecord;
pub use user::{Role, RoleParseError, StudentRecord, UserProfile};
pub use vitals::{CorrectVitals, VitalReading, VitalSigns};
