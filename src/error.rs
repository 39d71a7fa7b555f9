//! Client Error Types
//!
//! Failure taxonomy shared by the native (reqwest) and browser (gloo-net)
//! API clients, plus token persistence errors.

use thiserror::Error;

/// Message shown when the login endpoint rejects a request without saying why
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Message shown when no response was received from the login endpoint
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Message shown when a login succeeded but the token could not be kept
pub const SESSION_SAVE_FAILED_MESSAGE: &str = "Unable to save your session. Please try again.";

/// Message shown when a prediction request fails
pub const PREDICTION_FAILED_MESSAGE: &str = "Unable to get a prediction. Please try again.";

/// Errors produced while talking to the remote API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The server answered with a non-2xx status
    #[error("Server returned status {status}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected {
        status: u16,
        /// `error` field of the response body, if the body carried one
        message: Option<String>,
    },

    /// No response was received (connection refused, DNS, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// A response was received but its body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build a rejection, dropping blank server messages
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        ClientError::Rejected {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Banner text for a failed login attempt
    pub fn login_message(&self) -> String {
        match self {
            ClientError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Rejected { message: None, .. } => INVALID_CREDENTIALS_MESSAGE.to_string(),
            // An unreadable body counts as "no usable response"
            ClientError::Network(_) | ClientError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Errors from persisting the session token
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Token storage unavailable: {0}")]
    Unavailable(String),

    #[error("Token storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token storage format error: {0}")]
    Format(#[from] serde_json::Error),
}
