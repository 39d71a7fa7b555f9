//! Field Validation
//!
//! Keystroke-level validation driven by a single rule table. Invalid text is
//! never rejected; validation only produces the message shown under a field.

use thiserror::Error;

use super::fields::{parses_as_option, FieldName};

/// Numeric constraint for one free-text field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRule {
    pub field: FieldName,
    /// Prefix used in error messages
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub integer: bool,
}

/// Bounds for every numeric field. Ranges are inclusive.
pub const RANGE_RULES: [RangeRule; 4] = [
    RangeRule {
        field: FieldName::AgeAtRelease,
        label: "Age",
        min: 18.0,
        max: 80.0,
        integer: true,
    },
    RangeRule {
        field: FieldName::ResidencePuma,
        label: "Residence PUMA",
        min: 1.0,
        max: 25.0,
        integer: true,
    },
    RangeRule {
        field: FieldName::SupervisionRiskScoreFirst,
        label: "Supervision Risk Score",
        min: 1.0,
        max: 10.0,
        integer: true,
    },
    RangeRule {
        field: FieldName::JobsPerYear,
        label: "Jobs Per Year",
        min: 0.0,
        max: 8.0,
        integer: false,
    },
];

/// Look up the range rule for a field
pub fn rule_for(field: FieldName) -> Option<&'static RangeRule> {
    RANGE_RULES.iter().find(|rule| rule.field == field)
}

/// Why a field value is invalid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("{label} must be a whole number.")]
    NotInteger { label: &'static str },

    #[error("{label} must be a number.")]
    NotNumber { label: &'static str },

    #[error("{label} must be between {min} and {max}.")]
    OutOfRange {
        label: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Please select a valid option.")]
    UnknownOption,
}

/// Validate raw field text.
///
/// Empty text yields no error: emptiness is enforced by the form's
/// submit invariant, not by a message under the field.
pub fn validate(field: FieldName, raw: &str) -> Result<(), FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }

    if let Some(known) = parses_as_option(field, raw) {
        return if known {
            Ok(())
        } else {
            Err(FieldError::UnknownOption)
        };
    }

    match rule_for(field) {
        Some(rule) => check_range(rule, raw),
        None => Ok(()),
    }
}

fn check_range(rule: &RangeRule, raw: &str) -> Result<(), FieldError> {
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite());

    let value = match value {
        Some(v) => v,
        None if rule.integer => return Err(FieldError::NotInteger { label: rule.label }),
        None => return Err(FieldError::NotNumber { label: rule.label }),
    };

    if rule.integer && value.fract() != 0.0 {
        return Err(FieldError::NotInteger { label: rule.label });
    }

    if value < rule.min || value > rule.max {
        return Err(FieldError::OutOfRange {
            label: rule.label,
            min: rule.min,
            max: rule.max,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(field: FieldName, raw: &str) -> bool {
        validate(field, raw).is_ok()
    }

    #[test]
    fn test_age_bounds() {
        assert!(!is_valid(FieldName::AgeAtRelease, "17"));
        assert!(is_valid(FieldName::AgeAtRelease, "18"));
        assert!(is_valid(FieldName::AgeAtRelease, "80"));
        assert!(!is_valid(FieldName::AgeAtRelease, "81"));
    }

    #[test]
    fn test_puma_bounds() {
        assert!(!is_valid(FieldName::ResidencePuma, "0"));
        assert!(is_valid(FieldName::ResidencePuma, "1"));
        assert!(is_valid(FieldName::ResidencePuma, "25"));
        assert!(!is_valid(FieldName::ResidencePuma, "26"));
    }

    #[test]
    fn test_risk_score_bounds() {
        assert!(!is_valid(FieldName::SupervisionRiskScoreFirst, "0"));
        assert!(is_valid(FieldName::SupervisionRiskScoreFirst, "1"));
        assert!(is_valid(FieldName::SupervisionRiskScoreFirst, "10"));
        assert!(!is_valid(FieldName::SupervisionRiskScoreFirst, "11"));
    }

    #[test]
    fn test_jobs_bounds() {
        assert!(!is_valid(FieldName::JobsPerYear, "-1"));
        assert!(is_valid(FieldName::JobsPerYear, "0"));
        assert!(is_valid(FieldName::JobsPerYear, "8"));
        assert!(!is_valid(FieldName::JobsPerYear, "9"));
        assert!(is_valid(FieldName::JobsPerYear, "2.5"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            validate(FieldName::AgeAtRelease, "17").unwrap_err().to_string(),
            "Age must be between 18 and 80."
        );
        assert_eq!(
            validate(FieldName::AgeAtRelease, "30.5").unwrap_err().to_string(),
            "Age must be a whole number."
        );
        assert_eq!(
            validate(FieldName::ResidencePuma, "abc").unwrap_err().to_string(),
            "Residence PUMA must be a whole number."
        );
        assert_eq!(
            validate(FieldName::SupervisionRiskScoreFirst, "11")
                .unwrap_err()
                .to_string(),
            "Supervision Risk Score must be between 1 and 10."
        );
        assert_eq!(
            validate(FieldName::JobsPerYear, "lots").unwrap_err().to_string(),
            "Jobs Per Year must be a number."
        );
        assert_eq!(
            validate(FieldName::JobsPerYear, "8.5").unwrap_err().to_string(),
            "Jobs Per Year must be between 0 and 8."
        );
    }

    #[test]
    fn test_integer_written_as_decimal() {
        assert!(is_valid(FieldName::AgeAtRelease, "25.0"));
        assert!(is_valid(FieldName::ResidencePuma, " 12 "));
    }

    #[test]
    fn test_empty_has_no_message() {
        for field in FieldName::ALL {
            assert!(is_valid(field, ""));
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(!is_valid(FieldName::JobsPerYear, "inf"));
        assert!(!is_valid(FieldName::JobsPerYear, "NaN"));
    }

    #[test]
    fn test_selection_fields() {
        assert!(is_valid(FieldName::Gender, "M"));
        assert!(is_valid(FieldName::Race, "WHITE"));
        assert!(is_valid(FieldName::EducationLevel, "High School Diploma"));
        assert_eq!(
            validate(FieldName::Gender, "X"),
            Err(FieldError::UnknownOption)
        );
    }

    #[test]
    fn test_every_numeric_field_has_a_rule() {
        for field in FieldName::ALL {
            assert_eq!(rule_for(field).is_some(), !field.is_selection());
        }
    }
}
