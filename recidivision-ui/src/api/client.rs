//! HTTP API Client
//!
//! Functions for communicating with the prediction service. Failures are
//! mapped into the same `ClientError` taxonomy the native client uses.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use recidivision::dto::{Credentials, ErrorBody, LoginResponse, PredictRequest};
use recidivision::error::ClientError;
use recidivision::report::PredictionResult;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// `localStorage` key holding an API base URL override
pub const API_URL_KEY: &str = "recidivision_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref())
}

fn normalize_base(stored: Option<&str>) -> String {
    let url = stored
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    url.trim_end_matches('/').to_string()
}

// ============ API Functions ============

/// Exchange credentials for a token
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ClientError> {
    post("/login", credentials, None).await
}

/// Submit one case
pub async fn predict(
    request: &PredictRequest,
    token: Option<&str>,
) -> Result<PredictionResult, ClientError> {
    post("/predict", request, token).await
}

async fn post<B, T>(path: &str, body: &B, token: Option<&str>) -> Result<T, ClientError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let mut builder = Request::post(&format!("{}{}", get_api_base(), path));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .json(body)
        .map_err(|e| ClientError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error);
        return Err(ClientError::rejected(status, message));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_default() {
        assert_eq!(normalize_base(None), DEFAULT_API_BASE);
        assert_eq!(normalize_base(Some("  ")), DEFAULT_API_BASE);
    }

    #[test]
    fn test_api_base_override_trims_slash() {
        assert_eq!(
            normalize_base(Some("https://api.example.org/")),
            "https://api.example.org"
        );
    }
}
