//! Client for the hosted auth provider.
//!
//! The provider is consumed as an opaque black box over its REST surface:
//! sign-up, password sign-in, and bearer-token user lookup. No token
//! verification or session management happens locally; tokens are passed
//! through to the provider.

pub mod client;
pub mod error;
pub mod types;

pub use client::{AuthClient, AuthConfig};
pub use error::{AuthError, AuthResult};
pub use types::{AuthSession, AuthSignup, AuthUser};
