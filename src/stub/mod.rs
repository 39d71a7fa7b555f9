//! Stub Prediction API
//!
//! Local stand-in for the remote prediction service, built with Axum.
//! Used for UI development and by the integration tests.
//!
//! # Endpoints
//!
//! - `POST /register` - Create an account
//! - `POST /login` - Exchange credentials for a token
//! - `POST /predict` - Score one case
//! - `GET /health` - Service status
//!
//! # Example
//!
//! ```rust,ignore
//! use recidivision::config::StubConfig;
//! use recidivision::stub::{serve, StubState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StubConfig::default();
//!     serve(StubState::from_config(&config), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod scoring;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::StubState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::StubConfig;

/// Build the stub router with all routes and middleware
pub fn build_router(state: StubState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/register", post(routes::register))
        .route("/login", post(routes::login))
        .route("/predict", post(routes::predict))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        // Browser UI is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the stub server
pub async fn serve(state: StubState, config: &StubConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Stub prediction API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Stub prediction API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(StubState::default())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const CASE: &str = r#"{
        "gender": "F",
        "race": "BLACK",
        "age_at_release": "25",
        "education_level": "High School Diploma",
        "supervision_risk_score_first": "6",
        "residence_puma": "12",
        "jobs_per_year": "1.5"
    }"#;

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_login_seeded_user() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/login",
                r#"{"username": "analyst", "password": "analyst"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Login successful");
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/login",
                r#"{"username": "analyst", "password": "nope"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/login", r#"{"username": "analyst"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let app = create_test_app();
        let body = r#"{"username": "new-user", "password": "secret"}"#;

        let response = app
            .clone()
            .oneshot(post_json("/register", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(post_json("/register", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = json_body(response).await;
        assert_eq!(body["error"], "User already exists");
    }

    #[tokio::test]
    async fn test_register_requires_both_fields() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/register", r#"{"username": "", "password": "x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Username and password are required");
    }

    #[tokio::test]
    async fn test_predict() {
        let app = create_test_app();

        let response = app.oneshot(post_json("/predict", CASE)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["prediction"].as_str().unwrap().ends_with("Risk of Recidivism"));
        assert!(body["probabilities"]["Non-Recidivist"].is_number());
        assert!(body["probabilities"]["Recidivist"].is_number());
        assert!(body["explanation_text"]
            .as_str()
            .unwrap()
            .starts_with("Based on the information provided"));
    }

    #[tokio::test]
    async fn test_predict_missing_field() {
        let app = create_test_app();
        let mut case: Value = serde_json::from_str(CASE).unwrap();
        case.as_object_mut().unwrap().remove("jobs_per_year");

        let response = app
            .oneshot(post_json("/predict", &case.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Missing field: jobs_per_year");
    }

    #[tokio::test]
    async fn test_predict_invalid_json() {
        let app = create_test_app();

        let response = app.oneshot(post_json("/predict", "not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
