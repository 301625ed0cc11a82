//! Keyturn REST API
//!
//! This crate provides the Axum-based HTTP API for Keyturn: the
//! registration, login and logout endpoints plus routes guarded by the
//! token gate.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
