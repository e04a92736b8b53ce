//! ML client error types.

use thiserror::Error;

pub type MlResult<T> = Result<T, MlError>;

#[derive(Debug, Error)]
pub enum MlError {
    /// The prediction service responded with a non-success status.
    #[error("Prediction service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MlError {
    /// True when the service itself rejected the request, as opposed to the
    /// call never completing. Callers surface these as a bad-gateway class
    /// of failure rather than a generic server error.
    pub fn is_upstream(&self) -> bool {
        matches!(self, MlError::Upstream { .. })
    }

    /// The downstream response text for upstream rejections, the error
    /// message otherwise.
    pub fn detail(&self) -> String {
        match self {
            MlError::Upstream { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
