//! Stub Routes
//!
//! - POST /register - Create an account
//! - POST /login - Exchange credentials for a token
//! - POST /predict - Score one case
//! - GET /health - Service status

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::dto::{Credentials, HealthResponse, LoginResponse, MessageResponse};
use crate::report::PredictionResult;

use super::error::{ApiError, ApiResult};
use super::scoring;
use super::state::StubState;

/// POST /register
pub async fn register(
    State(state): State<Arc<StubState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    require_credentials(&credentials)?;

    if !state
        .register(&credentials.username, &credentials.password)
        .await
    {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    tracing::info!(username = %credentials.username, "Registered user");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /login
///
/// Tokens are opaque and not remembered; `/predict` accepts any caller.
pub async fn login(
    State(state): State<Arc<StubState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<LoginResponse>> {
    require_credentials(&credentials)?;

    if !state
        .check_password(&credentials.username, &credentials.password)
        .await
    {
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    Ok(Json(LoginResponse {
        message: Some("Login successful".to_string()),
        token: uuid::Uuid::new_v4().to_string(),
    }))
}

/// POST /predict
pub async fn predict(Json(body): Json<Value>) -> ApiResult<Json<PredictionResult>> {
    let fields = body
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("Request body must be a JSON object".to_string()))?;

    let result = scoring::score(fields)?;

    tracing::debug!(prediction = %result.prediction, "Scored prediction request");

    Ok(Json(result))
}

/// GET /health
pub async fn health(State(state): State<Arc<StubState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

fn require_credentials(credentials: &Credentials) -> ApiResult<()> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }
    Ok(())
}
