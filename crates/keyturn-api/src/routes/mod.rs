//! API routes

mod account;
mod auth;
mod health;
pub mod types;

use axum::Router;

use crate::state::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .merge(health::routes())
        // Register, login, logout
        .merge(auth::routes())
        // Protected routes
        .merge(account::routes(&state))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use keyturn_auth::JwtManager;
    use keyturn_db::Database;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app() -> Router {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let jwt = Arc::new(JwtManager::new("test-secret-key", 3600));
        create_router(AppState::new(db, jwt))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_me(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_register_login_and_access_protected_route() {
        let app = app().await;
        let credentials = json!({ "username": "alice_b", "password": "1234" });

        let (status, body) = send(&app, post_json("/register", credentials.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User registered successfully" }));

        let (status, body) = send(&app, post_json("/register", credentials.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Username already exists");

        let (status, body) = send(&app, post_json("/login", credentials)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["expires_in"], 3600);
        let token = body["token"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get_me(Some(format!("Bearer {}", token).as_str()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "alice_b");
        assert!(body["user"].get("password_hash").is_none());

        let (status, body) = send(&app, get_me(None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Access token is missing or invalid");

        let (status, body) = send(&app, get_me(Some("Bearer garbage"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Invalid token");
    }

    #[tokio::test]
    async fn test_register_validation_messages() {
        let app = app().await;

        let (status, body) = send(
            &app,
            post_json("/register", json!({ "username": "alice1", "password": "1234" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Username can only contain letters and underscores."
        );

        let (status, body) = send(
            &app,
            post_json("/register", json!({ "username": "alice", "password": "12" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Password must be at least 4 characters long and contain only numbers."
        );
    }

    #[tokio::test]
    async fn test_missing_fields_fail_validation() {
        let app = app().await;

        let (status, body) = send(&app, post_json("/register", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Username can only contain letters and underscores."
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_login_failures_share_message() {
        let app = app().await;
        send(
            &app,
            post_json("/register", json!({ "username": "alice_b", "password": "1234" })),
        )
        .await;

        let (status, wrong_password) = send(
            &app,
            post_json("/login", json!({ "username": "alice_b", "password": "0000" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, unknown_user) = send(
            &app,
            post_json("/login", json!({ "username": "bob", "password": "1234" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_logout_acknowledges() {
        let app = app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/logout")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Logout successful" }));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
