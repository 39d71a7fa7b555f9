//! Prediction Form
//!
//! ## Components
//!
//! - [`fields`]: the seven inputs and their option sets
//! - [`validation`]: the range rule table and the single validation routine
//! - [`state`]: raw values + per-field errors, and the submit invariant

pub mod fields;
pub mod state;
pub mod validation;

pub use fields::{parses_as_option, EducationLevel, FieldName, Gender, Race, SelectOption};
pub use state::PredictionForm;
pub use validation::{rule_for, validate, FieldError, RangeRule, RANGE_RULES};
