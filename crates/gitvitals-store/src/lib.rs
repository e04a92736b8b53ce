//! REST client for the hosted profile store.
//!
//! The store is a hosted relational database exposed over a PostgREST-style
//! surface. This crate consumes it as an opaque collaborator:
//! - Typed repositories for users, students, patients and vitals records
//! - Row-level create/find/update/upsert keyed by primary key
//! - No schema management or migrations

pub mod client;
pub mod error;
pub mod repos;

pub use client::{StoreClient, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use repos::{PatientRepository, StudentRepository, UserRepository, VitalsRepository};
