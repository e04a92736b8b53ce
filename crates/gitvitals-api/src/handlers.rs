//! Request handlers.

pub mod auth;
pub mod health;
pub mod patient;
pub mod student;
pub mod vitals;

pub use auth::*;
pub use health::*;
pub use patient::*;
pub use student::*;
pub use vitals::*;
