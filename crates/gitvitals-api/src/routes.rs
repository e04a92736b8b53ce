//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::auth::{login, signup};
use crate::handlers::patient::{correct_vitals, create_patient};
use crate::handlers::student::submit_reading;
use crate::handlers::vitals::submit_vitals;
use crate::handlers::{health, ready};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Prediction relay
        .route("/vitals/submit", post(submit_vitals))
        // Auth glue
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        // Patient management
        .route("/patient/create", post(create_patient))
        .route("/patient/:id/correct-vitals", post(correct_vitals))
        // Student reading submission
        .route("/student/:id/submit", post(submit_reading));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
