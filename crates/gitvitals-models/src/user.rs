//! User profile and role definitions.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Account roles recognized at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Nursing student recording practice readings
    Student,
    /// Instructor grading submissions
    Instructor,
}

impl Role {
    /// All roles accepted by the signup route.
    pub const ALL: &'static [Role] = &[Role::Student, Role::Instructor];

    /// Uppercase form used by the profile store's role column.
    pub fn store_value(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Instructor => "INSTRUCTOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Instructor => write!(f, "instructor"),
        }
    }
}

/// Error returned when a role string is not recognized.
#[derive(Debug, Error)]
#[error("invalid role: {0}. Must be student or instructor")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// A user profile as stored in the profile store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserProfile {
    /// Auth provider user id (primary key)
    pub id: String,
    pub email: String,
    pub name: String,
    /// Uppercase role value as persisted by the store
    pub role: String,
    /// Institutional (Canvas) id, present for students
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A student record linking a user profile to an institutional id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StudentRecord {
    /// Store-assigned record id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user profile id
    pub user_id: String,
    /// Institutional id entered at signup
    pub student_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_any_case() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("INSTRUCTOR".parse::<Role>().unwrap(), Role::Instructor);
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
    }

    #[test]
    fn role_rejects_unknown() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn role_store_value_is_uppercase() {
        assert_eq!(Role::Student.store_value(), "STUDENT");
        assert_eq!(Role::Instructor.store_value(), "INSTRUCTOR");
    }
}
