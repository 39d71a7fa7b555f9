//! Pages
//!
//! Top-level page components for each route.

pub mod login;
pub mod predict;

pub use login::LoginPage;
pub use predict::PredictPage;
