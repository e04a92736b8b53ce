//! Shared helpers for API integration tests.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;
use wiremock::MockServer;

use gitvitals_api::{create_router, ApiConfig, AppState};
use gitvitals_auth::{AuthClient, AuthConfig};
use gitvitals_ml_client::{MlClient, MlClientConfig};
use gitvitals_store::{StoreClient, StoreConfig};

/// Downstream endpoints the app under test talks to.
pub struct Downstreams {
    pub predict_url: String,
    pub auth_url: String,
    pub store_url: String,
}

impl Downstreams {
    /// All three collaborators stubbed by one mock server.
    pub fn all(server: &MockServer) -> Self {
        Self {
            predict_url: format!("{}/predict", server.uri()),
            auth_url: server.uri(),
            store_url: server.uri(),
        }
    }

    /// Nothing listening anywhere. For routes that should not make
    /// downstream calls, or for transport-failure cases.
    pub fn unreachable() -> Self {
        Self {
            predict_url: "http://127.0.0.1:1/predict".to_string(),
            auth_url: "http://127.0.0.1:1".to_string(),
            store_url: "http://127.0.0.1:1".to_string(),
        }
    }
}

/// Build the app router against the given downstreams.
pub fn test_app(downstreams: Downstreams) -> Router {
    let ml = MlClient::new(MlClientConfig {
        predict_url: downstreams.predict_url,
    });
    let auth = AuthClient::new(AuthConfig {
        base_url: downstreams.auth_url,
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(2),
    })
    .expect("auth client");
    let store = StoreClient::new(StoreConfig {
        base_url: downstreams.store_url,
        api_key: "svc-key".to_string(),
        timeout: Duration::from_secs(2),
    })
    .expect("store client");

    create_router(AppState::with_clients(ApiConfig::default(), ml, auth, store))
}

/// Build a JSON POST request.
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
