//! Stub Server State
//!
//! Shared state accessible by all stub handlers.

use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::{StubConfig, StubUser};

/// Shared state for the stub handlers
pub struct StubState {
    /// username -> password
    users: RwLock<HashMap<String, String>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl StubState {
    pub fn new(users: &[StubUser]) -> Self {
        let users = users
            .iter()
            .map(|u| (u.username.clone(), u.password.clone()))
            .collect();

        Self {
            users: RwLock::new(users),
            start_time: Instant::now(),
        }
    }

    pub fn from_config(config: &StubConfig) -> Self {
        Self::new(&config.users)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Add an account; `false` if the name is taken
    pub async fn register(&self, username: &str, password: &str) -> bool {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return false;
        }
        users.insert(username.to_string(), password.to_string());
        true
    }

    pub async fn check_password(&self, username: &str, password: &str) -> bool {
        self.users
            .read()
            .await
            .get(username)
            .map(|stored| stored == password)
            .unwrap_or(false)
    }
}

impl Default for StubState {
    fn default() -> Self {
        Self::from_config(&StubConfig::default())
    }
}
