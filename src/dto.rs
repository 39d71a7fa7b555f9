//! Data Transfer Objects
//!
//! Request and response bodies of the prediction service.
//! These types are serialized/deserialized to/from JSON by both clients
//! and by the stub server.

use serde::{Deserialize, Serialize};

// ============================================
// AUTH DTOs
// ============================================

/// Credentials as entered on the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful `/login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub token: String,
}

/// Successful `/register` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body: `{error?: string}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================
// PREDICTION DTOs
// ============================================

/// `/predict` request body.
///
/// Values are the raw text of the form, sent without coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub gender: String,
    pub race: String,
    pub age_at_release: String,
    pub education_level: String,
    pub supervision_risk_score_first: String,
    pub residence_puma: String,
    pub jobs_per_year: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// `/health` response of the stub server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("nope"));
    }

    #[test]
    fn test_login_response_without_message() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert!(resp.message.is_none());
    }
}
