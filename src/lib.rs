//! # RecidiVision
//!
//! Client for a remote recidivism-risk prediction service: credential
//! login, a guarded prediction form, and presentation of the returned
//! prediction, probabilities and explanation.
//!
//! ## Modules
//!
//! - [`form`]: the seven inputs, the range rule table and form state
//! - [`prediction`]: submit cycle, result modal and explanation toggle
//! - [`login`]: login form state and failure messages
//! - [`session`]: authentication state, token storage and the route guard
//! - [`report`]: headline, chart data and explanation lines
//! - [`dto`]: wire bodies shared with the service
//!
//! With the `native` feature (default):
//!
//! - [`client`]: reqwest client for the service
//! - [`workflow`]: login and prediction submissions over a client
//! - [`stub`]: local stand-in for the service, built with Axum
//! - [`config`] and [`logging`]: TOML/env configuration and tracing output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recidivision::client::ApiClient;
//! use recidivision::form::FieldName;
//! use recidivision::prediction::PredictionPanel;
//! use recidivision::session::{MemoryTokenStore, Session};
//! use recidivision::workflow::submit_prediction;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::restore(MemoryTokenStore::with_token("token"));
//!     let client = ApiClient::with_base_url("http://127.0.0.1:5000")?
//!         .with_token(session.token());
//!
//!     let mut panel = PredictionPanel::new();
//!     panel.edit(FieldName::Gender, "M");
//!     panel.edit(FieldName::Race, "WHITE");
//!     panel.edit(FieldName::AgeAtRelease, "30");
//!     panel.edit(FieldName::EducationLevel, "High School Diploma");
//!     panel.edit(FieldName::SupervisionRiskScoreFirst, "4");
//!     panel.edit(FieldName::ResidencePuma, "10");
//!     panel.edit(FieldName::JobsPerYear, "2");
//!
//!     submit_prediction(&client, &mut panel).await;
//!     if let Some(result) = panel.result() {
//!         println!("{}", result.headline());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod form;
pub mod login;
pub mod prediction;
pub mod report;
pub mod session;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod stub;
#[cfg(feature = "native")]
pub mod workflow;

// Re-export top-level types for convenience
pub use dto::{Credentials, LoginResponse, PredictRequest};
pub use error::{ClientError, StoreError};
pub use form::{FieldError, FieldName, PredictionForm};
pub use login::LoginForm;
pub use prediction::PredictionPanel;
pub use report::{ChartData, PredictionResult, Probabilities};
pub use session::{resolve, MemoryTokenStore, Route, RouteDecision, Session, TokenStore};

#[cfg(feature = "native")]
pub use client::{ApiClient, RecidivismApi};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
