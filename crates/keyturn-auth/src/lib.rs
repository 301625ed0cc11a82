//! Keyturn Authentication
//!
//! This crate provides the credential manager (registration, login,
//! logout) and the token gate middleware that guards protected routes
//! with JWT bearer tokens.

pub mod credentials;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod validation;

pub use credentials::{CredentialManager, IssuedToken};
pub use error::AuthError;
pub use jwt::{Claims, JwtManager};
pub use middleware::{AuthUser, TokenGate, require_auth};
pub use password::{hash_password, verify_password};
