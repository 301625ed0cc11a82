//! Registration, login and logout routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

use super::types::{CredentialsRequest, LoginResponse, MessageResponse};

/// Unwrap a JSON body, turning parse failures into a 400
fn credentials(
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<CredentialsRequest, ApiError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::BadRequest(e.body_text())
    })?;
    Ok(request)
}

/// POST /register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let request = credentials(payload)?;

    state
        .credentials
        .register(&request.username, &request.password)
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// POST /login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = credentials(payload)?;

    let issued = state
        .credentials
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: issued.token,
        expires_in: issued.expires_in,
    }))
}

/// POST /logout
async fn logout(State(state): State<AppState>) -> Json<MessageResponse> {
    state.credentials.logout();
    Json(MessageResponse::new("Logout successful"))
}

/// Create auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}
