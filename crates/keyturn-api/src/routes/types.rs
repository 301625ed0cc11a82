//! Request/Response DTOs

use keyturn_auth::AuthUser;
use serde::{Deserialize, Serialize};

/// Register/login request
///
/// Missing fields deserialize as empty strings so they fail validation
/// rather than JSON parsing.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Plain acknowledgement
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub expires_in: i64,
}

/// Current user response
#[derive(Serialize)]
pub struct MeResponse {
    pub message: String,
    pub user: AuthUser,
}
