//! Auth client error types.

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider rejected the request (bad credentials, duplicate
    /// email, weak password). Carries the provider's own message.
    #[error("{0}")]
    Rejected(String),

    #[error("Auth configuration error: {0}")]
    Config(String),

    #[error("Invalid response from auth provider: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AuthError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for provider-side rejections, false for transport failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected(_))
    }
}
