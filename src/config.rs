//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub stub: StubConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote prediction API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_file")]
    pub token_file: String,
}

fn default_token_file() -> String {
    dirs::data_local_dir()
        .map(|p| {
            p.join("recidivision")
                .join("session.json")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./recidivision_session.json".to_string())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
        }
    }
}

impl SessionConfig {
    pub fn token_path(&self) -> PathBuf {
        PathBuf::from(&self.token_file)
    }
}

/// Stub prediction server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StubConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Accounts available at startup
    #[serde(default = "default_users")]
    pub users: Vec<StubUser>,
}

/// Seeded stub account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StubUser {
    pub username: String,
    pub password: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_users() -> Vec<StubUser> {
    vec![StubUser {
        username: "analyst".to_string(),
        password: "analyst".to_string(),
    }]
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            users: default_users(),
        }
    }
}

impl StubConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// A config file that exists but cannot be read or parsed is an error,
    /// not a silent fall back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("recidivision").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first of `paths` that exists, or defaults with env overrides
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = var("RECIDIVISION_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("RECIDIVISION_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = Some(t);
            }
        }

        // Session overrides
        if let Some(path) = var("RECIDIVISION_TOKEN_FILE") {
            self.session.token_file = path;
        }

        // Stub overrides
        if let Some(host) = var("RECIDIVISION_STUB_HOST") {
            self.stub.host = host;
        }
        if let Some(port) = var("RECIDIVISION_STUB_PORT") {
            if let Ok(p) = port.parse() {
                self.stub.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("RECIDIVISION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("RECIDIVISION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# RecidiVision Configuration
#
# Environment variables override these settings:
# - RECIDIVISION_API_URL
# - RECIDIVISION_API_TIMEOUT_SECS
# - RECIDIVISION_TOKEN_FILE
# - RECIDIVISION_STUB_HOST
# - RECIDIVISION_STUB_PORT
# - RECIDIVISION_LOG_LEVEL
# - RECIDIVISION_LOG_FORMAT

[api]
# Prediction service base URL (serves /login and /predict)
base_url = "http://127.0.0.1:5000"

# Request timeout in seconds (omit to wait indefinitely)
# request_timeout_secs = 30

[session]
# Where the terminal client keeps its token
# token_file = "~/.local/share/recidivision/session.json"

[stub]
# Local stub server bind address
host = "127.0.0.1"
port = 5000

# Accounts available when the stub starts
[[stub.users]]
username = "analyst"
password = "analyst"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert!(config.api.request_timeout_secs.is_none());
        assert_eq!(config.stub.addr(), "127.0.0.1:5000");
        assert_eq!(config.stub.users.len(), 1);
        assert_eq!(config.logging.level, "info");
        assert!(config.session.token_file.ends_with("session.json"));
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::from_toml(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.stub.port, 5000);
        assert_eq!(config.stub.users[0].username, "analyst");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [api]
            base_url = "https://risk.example.org"
            request_timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://risk.example.org");
        assert_eq!(config.api.request_timeout_secs, Some(10));
        assert_eq!(config.stub.port, 5000);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RECIDIVISION_API_URL", "http://api:9000"),
            ("RECIDIVISION_STUB_PORT", "6001"),
            ("RECIDIVISION_STUB_HOST", "0.0.0.0"),
            ("RECIDIVISION_LOG_FORMAT", "json"),
            ("RECIDIVISION_TOKEN_FILE", "/tmp/token.json"),
            ("RECIDIVISION_API_TIMEOUT_SECS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://api:9000");
        assert_eq!(config.stub.addr(), "0.0.0.0:6001");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.session.token_path(), PathBuf::from("/tmp/token.json"));
        assert!(config.api.request_timeout_secs.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[api\nbase_url = ").unwrap();
        let fallback = dir.path().join("fallback.toml");
        std::fs::write(&fallback, "[api]\nbase_url = \"http://fallback:5000\"\n").unwrap();

        let err = Config::load_first(&[broken, fallback]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("config.toml");
        std::fs::write(&present, "[api]\nbase_url = \"http://present:5000\"\n").unwrap();

        let config = Config::load_first(&[dir.path().join("absent.toml"), present]).unwrap();
        assert_eq!(config.api.base_url, "http://present:5000");
    }
}
