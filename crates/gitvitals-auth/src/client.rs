//! Auth provider HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::types::{AuthSession, AuthSignup, AuthUser};

/// Auth client configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the auth provider
    pub base_url: String,
    /// Project API key, sent as `apikey` header
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl AuthConfig {
    /// Create config from environment variables.
    pub fn from_env() -> AuthResult<Self> {
        let base_url = std::env::var("AUTH_BASE_URL")
            .map_err(|_| AuthError::config("AUTH_BASE_URL must be set"))?;
        let api_key = std::env::var("AUTH_API_KEY")
            .map_err(|_| AuthError::config("AUTH_API_KEY must be set"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(10),
        })
    }
}

/// Client for the hosted auth provider.
pub struct AuthClient {
    http: Client,
    config: AuthConfig,
}

impl AuthClient {
    /// Create a new auth client.
    pub fn new(config: AuthConfig) -> AuthResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AuthError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AuthResult<Self> {
        Self::new(AuthConfig::from_env()?)
    }

    /// Register a new credential pair with the provider.
    ///
    /// `metadata` is attached to the provider-side user record verbatim;
    /// the profile store remains the source of truth for profile fields.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Value,
    ) -> AuthResult<AuthSignup> {
        let url = format!("{}/auth/v1/signup", self.config.base_url);
        debug!("Signing up user via {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&json!({
                "email": email,
                "password": password,
                "data": metadata,
            }))
            .send()
            .await?;

        let body = Self::check(response).await?;
        let user = extract_user(&body)?;
        Ok(AuthSignup { user })
    }

    /// Exchange an email/password pair for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.base_url
        );
        debug!("Signing in user via {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let body = Self::check(response).await?;
        serde_json::from_value(body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    /// Resolve the user behind an access token.
    pub async fn current_user(&self, access_token: &str) -> AuthResult<AuthUser> {
        let url = format!("{}/auth/v1/user", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let body = Self::check(response).await?;
        extract_user(&body)
    }

    /// Turn a provider response into its JSON body, mapping non-success
    /// statuses to [`AuthError::Rejected`] with the provider's message.
    async fn check(response: reqwest::Response) -> AuthResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::Rejected(rejection_message(&text)));
        }

        serde_json::from_str(&text).map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}

/// Pull the user object out of a provider response. Sign-up responses may
/// nest it under `user`; token and user-info responses carry it top-level.
fn extract_user(body: &Value) -> AuthResult<AuthUser> {
    let candidate = body.get("user").unwrap_or(body);
    serde_json::from_value(candidate.clone())
        .map_err(|_| AuthError::InvalidResponse("response carries no user id".to_string()))
}

/// Best-effort extraction of the human-readable message from a provider
/// error body; falls back to the raw text.
fn rejection_message(text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<Value>(text) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(msg) = body.get(key).and_then(Value::as_str) {
                return msg.to_string();
            }
        }
    }
    text.to_string()
}
