//! Prediction Service REST Client
//!
//! HTTP client for the `/login`, `/register` and `/predict` endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::dto::{Credentials, ErrorBody, HealthResponse, LoginResponse, MessageResponse, PredictRequest};
use crate::error::ClientError;
use crate::report::PredictionResult;

/// Operations of the remote prediction service
#[async_trait]
pub trait RecidivismApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError>;

    async fn register(&self, credentials: &Credentials) -> Result<MessageResponse, ClientError>;

    async fn predict(&self, request: &PredictRequest) -> Result<PredictionResult, ClientError>;
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Create a client for a base URL with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Attach the session token as a bearer credential
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the service health endpoint
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await.map_err(send_error)?;
        read_json(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(send_error)?;
        read_json(response).await
    }
}

#[async_trait]
impl RecidivismApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        self.post("/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<MessageResponse, ClientError> {
        self.post("/register", credentials).await
    }

    async fn predict(&self, request: &PredictRequest) -> Result<PredictionResult, ClientError> {
        self.post("/predict", request).await
    }
}

fn send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Network(format!("Request timed out: {}", e))
    } else {
        ClientError::Network(e.to_string())
    }
}

/// Decode a 2xx body, or turn anything else into `Rejected`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.error);

    Err(ClientError::rejected(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::with_base_url("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then release a port so nothing is listening on it
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::with_base_url(&format!("http://{}", addr)).unwrap();
        let err = client
            .login(&Credentials::new("a", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }
}
