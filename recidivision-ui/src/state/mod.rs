//! State Management
//!
//! Session state shared by all views.

pub mod session;

pub use session::{provide_app_state, use_app_state, AppState, BrowserTokenStore};
