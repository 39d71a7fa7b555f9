//! Login Form State
//!
//! Credentials, busy flag and the banner message of the login view.

use crate::dto::Credentials;
use crate::error::{ClientError, StoreError, SESSION_SAVE_FAILED_MESSAGE};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub credentials: Credentials,
    busy: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.credentials.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Inputs and submit button are disabled while busy
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit button caption
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Logging in..."
        } else {
            "Login"
        }
    }

    /// Start an attempt: clears the previous banner and returns the
    /// credentials to send, or `None` while a request is outstanding.
    pub fn begin(&mut self) -> Option<Credentials> {
        if self.busy {
            return None;
        }
        self.error = None;
        self.busy = true;
        Some(self.credentials.clone())
    }

    /// The server issued a token. Credentials are dropped.
    pub fn succeed(&mut self) {
        self.busy = false;
        self.credentials = Credentials::default();
    }

    /// The attempt failed; show the banner for it
    pub fn fail(&mut self, error: &ClientError) {
        tracing::warn!(error = %error, "Login failed");
        self.busy = false;
        self.error = Some(error.login_message());
    }

    /// The server accepted the credentials but the token was not persisted
    pub fn fail_to_persist(&mut self, error: &StoreError) {
        tracing::error!(error = %error, "Failed to store session token");
        self.busy = false;
        self.error = Some(SESSION_SAVE_FAILED_MESSAGE.to_string());
    }
}
