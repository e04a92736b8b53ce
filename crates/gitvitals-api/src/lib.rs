//! Axum HTTP API server.
//!
//! This crate provides:
//! - The vitals prediction relay endpoint
//! - Signup/login glue over the hosted auth provider
//! - Patient, baseline and reading routes over the profile store
//! - Request-id, logging and CORS middleware

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
