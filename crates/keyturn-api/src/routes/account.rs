//! Routes behind the token gate

use axum::{Json, Router, middleware::from_fn_with_state, routing::get};
use keyturn_auth::{AuthUser, require_auth};

use crate::state::AppState;

use super::types::MeResponse;

/// GET /me
async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        message: "Authenticated".to_string(),
        user,
    })
}

/// Create protected routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route_layer(from_fn_with_state(state.gate.clone(), require_auth))
}
