//! Auth provider request/response types.

use serde::{Deserialize, Serialize};

/// A user as reported by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user id
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Result of a successful sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSignup {
    pub user: AuthUser,
}

/// A session issued by a password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}
