//! Keyturn Database Layer
//!
//! This crate provides the user store for Keyturn: the `UserStore`
//! contract and its SQLite implementation via sqlx.

pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod utils;

pub use error::DbError;
pub use models::{NewUser, User};
pub use repository::Database;
pub use store::UserStore;
