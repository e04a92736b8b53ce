//! Prediction service HTTP client.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{MlError, MlResult};

/// Default prediction endpoint when `ML_API_URL` is unset.
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:8004/predict";

/// Configuration for the ML client.
///
/// Deliberately a single field: the relay contract is one attempt,
/// fail-fast, with no timeout or retry knobs.
#[derive(Debug, Clone)]
pub struct MlClientConfig {
    /// Full URL of the prediction endpoint
    pub predict_url: String,
}

impl Default for MlClientConfig {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
        }
    }
}

impl MlClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            predict_url: std::env::var("ML_API_URL")
                .unwrap_or_else(|_| DEFAULT_PREDICT_URL.to_string()),
        }
    }
}

/// Client for the ML vitals prediction service.
pub struct MlClient {
    http: Client,
    config: MlClientConfig,
}

impl MlClient {
    /// Create a new ML client.
    pub fn new(config: MlClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::new(MlClientConfig::from_env())
    }

    /// The configured prediction endpoint.
    pub fn predict_url(&self) -> &str {
        &self.config.predict_url
    }

    /// Forward a vitals payload to the prediction service and return its
    /// prediction.
    ///
    /// Exactly one outbound POST is issued per call. The payload is sent
    /// unchanged; the downstream JSON body is returned unchanged. A
    /// non-success downstream status yields [`MlError::Upstream`] with the
    /// downstream response text preserved.
    pub async fn predict(&self, payload: &Value) -> MlResult<Value> {
        debug!("Forwarding vitals payload to {}", self.config.predict_url);

        let response = self
            .http
            .post(&self.config.predict_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MlError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let prediction: Value = serde_json::from_str(&body)?;
        Ok(prediction)
    }
}
