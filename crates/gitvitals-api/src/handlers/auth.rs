//! Signup and login handlers.
//!
//! Both routes are glue: credentials go to the hosted auth provider,
//! profile fields go to the profile store. The provider's user id is the
//! store's primary key, which is what ties the two halves together.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use gitvitals_models::{Role, StudentRecord, UserProfile};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Signup request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub role: Option<String>,
}

/// Signup response body.
#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub user: Value,
    pub message: &'static str,
}

/// POST /api/auth/signup
///
/// Register credentials with the auth provider, then create the profile
/// (and student record, for students) in the store.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let (email, password, name, role) = match (
        non_empty(request.email),
        non_empty(request.password),
        non_empty(request.name),
        non_empty(request.role),
    ) {
        (Some(e), Some(p), Some(n), Some(r)) => (e, p, n, r),
        _ => {
            return Err(ApiError::bad_request(
                "Email, password, name, and role are required",
            ))
        }
    };

    if password.len() < 6 {
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters",
        ));
    }

    let role: Role = role
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid role. Must be student or instructor"))?;

    let student_id = non_empty(request.student_id);
    if role == Role::Student && student_id.is_none() {
        return Err(ApiError::bad_request("Student ID is required for students"));
    }
    let canvas_id = match role {
        Role::Student => student_id.clone(),
        Role::Instructor => None,
    };

    info!("Registering {} account for {}", role, email);
    let signup = state
        .auth
        .sign_up(
            &email,
            &password,
            json!({
                "name": &name,
                "role": role.store_value(),
                "canvas_id": &canvas_id,
            }),
        )
        .await
        .map_err(|e| {
            if e.is_rejection() {
                ApiError::bad_request(e.to_string())
            } else {
                error!("Auth provider signup failed: {}", e);
                ApiError::internal(format!("Registration failed: {e}"))
            }
        })?;

    let user_id = signup.user.id;

    let profile = state
        .users()
        .upsert(&UserProfile {
            id: user_id.clone(),
            email,
            name,
            role: role.store_value().to_string(),
            canvas_id,
            created_at: None,
            updated_at: None,
        })
        .await?;

    let student = match role {
        Role::Student => Some(
            state
                .students()
                .create(&StudentRecord {
                    id: None,
                    user_id: user_id.clone(),
                    // Checked above for students
                    student_id: student_id.unwrap_or_default(),
                })
                .await?,
        ),
        Role::Instructor => None,
    };

    let mut user = serde_json::to_value(&profile).map_err(|e| ApiError::internal(e.to_string()))?;
    user["students"] = match &student {
        Some(s) => json!([s]),
        None => json!([]),
    };

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            user,
            message: "Registration successful",
        }),
    ))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response body.
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: Value,
}

/// POST /api/auth/login
///
/// Authenticate with the auth provider, then return the stored profile
/// together with the provider session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (email, password) = match (non_empty(request.email), non_empty(request.password)) {
        (Some(e), Some(p)) => (e, p),
        _ => return Err(ApiError::bad_request("Email and password are required")),
    };

    let session = state.auth.sign_in(&email, &password).await.map_err(|e| {
        if e.is_rejection() {
            ApiError::unauthorized(e.to_string())
        } else {
            error!("Auth provider sign-in failed: {}", e);
            ApiError::internal(format!("Authentication failed: {e}"))
        }
    })?;

    let profile = state
        .users()
        .find(&session.user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User profile not found"))?;

    let mut user = serde_json::to_value(&profile).map_err(|e| ApiError::internal(e.to_string()))?;
    user["session"] =
        serde_json::to_value(&session).map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_filters_blank_strings() {
        assert_eq!(non_empty(Some("a".into())), Some("a".to_string()));
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(None), None);
    }
}
