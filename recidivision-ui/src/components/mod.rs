//! UI Components
//!
//! Reusable Leptos components for the login and prediction views.

pub mod chart;
pub mod form_field;
pub mod loading;
pub mod nav;
pub mod result_modal;
pub mod toast;

pub use chart::ProbabilityChart;
pub use form_field::FormField;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use result_modal::ResultModal;
pub use toast::Toast;
