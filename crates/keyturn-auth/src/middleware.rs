//! Token gate middleware for Axum

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use keyturn_db::{User, UserStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::AuthError;
use crate::jwt::JwtManager;

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Handlers behind the token gate can take `AuthUser` directly
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

/// Extract bearer token from authorization header
fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    let rest = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;
    Ok(rest.split(' ').next().unwrap_or_default())
}

/// Verifies bearer tokens and resolves them to stored users
#[derive(Clone)]
pub struct TokenGate {
    jwt: Arc<JwtManager>,
    store: Arc<dyn UserStore>,
}

impl TokenGate {
    pub fn new(jwt: Arc<JwtManager>, store: Arc<dyn UserStore>) -> Self {
        Self { jwt, store }
    }

    /// Authenticate a request from its headers
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = extract_bearer_token(header)?;
        let claims = self.jwt.validate_token(token)?;

        // A token can outlive its user; treat that like any other bad token
        let user = self
            .store
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthUser::from(user))
    }
}

/// Authentication middleware
///
/// Rejects the request unless it carries a valid bearer token; on success
/// the resolved `AuthUser` is added to request extensions.
pub async fn require_auth(
    State(gate): State<TokenGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = gate.authenticate(request.headers()).await?;

    debug!("Authenticated user: {} ({})", user.username, user.id);

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
