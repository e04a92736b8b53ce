//! Client for the ML vitals prediction service.
//!
//! This crate provides the relay half of the vitals submission flow: it
//! forwards a JSON payload verbatim to the prediction endpoint and reports
//! the outcome as one of three classes (prediction, upstream rejection,
//! transport failure). The payload is opaque to this crate; no validation
//! or transformation happens on either side of the call.

pub mod client;
pub mod error;

pub use client::{MlClient, MlClientConfig};
pub use error::{MlError, MlResult};
