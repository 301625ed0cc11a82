//! Authentication error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use keyturn_db::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("Username already exists")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Access token is missing or invalid")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Token issue error: {0}")]
    TokenIssue(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Store error: {0}")]
    Store(DbError),
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Duplicate(_) => AuthError::DuplicateUser,
            other => AuthError::Store(other),
        }
    }
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_)
            | AuthError::DuplicateUser
            | AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::Jwt(_) => {
                StatusCode::FORBIDDEN
            }
            AuthError::TokenIssue(_) | AuthError::PasswordHash(_) | AuthError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::Jwt(_) => {
                json!({ "message": "Invalid token" })
            }
            AuthError::TokenIssue(_) | AuthError::PasswordHash(_) | AuthError::Store(_) => json!({
                "message": "Internal server error",
                "error": self.to_string()
            }),
            _ => json!({ "message": self.to_string() }),
        };

        (status, axum::Json(body)).into_response()
    }
}
