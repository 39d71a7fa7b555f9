//! Prediction Form State
//!
//! Raw text per field plus the current validation error of each field.

use std::collections::BTreeMap;

use super::fields::FieldName;
use super::validation::{validate, FieldError};
use crate::dto::PredictRequest;

/// Editable state of the seven-field prediction form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    values: BTreeMap<FieldName, String>,
    errors: BTreeMap<FieldName, FieldError>,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text for a field and revalidate only that field
    pub fn set(&mut self, field: FieldName, raw: impl Into<String>) {
        let raw = raw.into();
        match validate(field, &raw) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
        self.values.insert(field, raw);
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, field: FieldName, raw: impl Into<String>) -> Self {
        self.set(field, raw);
        self
    }

    /// Raw text of a field (empty if never set)
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message shown under a field, if any
    pub fn error_message(&self, field: FieldName) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    /// Fields that are still empty, in form order
    pub fn missing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// All current field errors, in form order
    pub fn errors(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// All seven fields are non-empty and no field has an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.missing().is_empty()
    }

    /// Build the `/predict` body from the raw values, or `None` if the
    /// form is not submittable
    pub fn to_request(&self) -> Option<PredictRequest> {
        if !self.is_valid() {
            return None;
        }

        Some(PredictRequest {
            gender: self.value(FieldName::Gender).to_string(),
            race: self.value(FieldName::Race).to_string(),
            age_at_release: self.value(FieldName::AgeAtRelease).to_string(),
            education_level: self.value(FieldName::EducationLevel).to_string(),
            supervision_risk_score_first: self
                .value(FieldName::SupervisionRiskScoreFirst)
                .to_string(),
            residence_puma: self.value(FieldName::ResidencePuma).to_string(),
            jobs_per_year: self.value(FieldName::JobsPerYear).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PredictionForm {
        PredictionForm::new()
            .with(FieldName::Gender, "M")
            .with(FieldName::Race, "BLACK")
            .with(FieldName::AgeAtRelease, "30")
            .with(FieldName::EducationLevel, "High School Diploma")
            .with(FieldName::SupervisionRiskScoreFirst, "5")
            .with(FieldName::ResidencePuma, "12")
            .with(FieldName::JobsPerYear, "1.5")
    }

    #[test]
    fn test_empty_form_not_valid() {
        let form = PredictionForm::new();
        assert!(!form.is_valid());
        assert_eq!(form.missing().len(), 7);
        assert!(form.to_request().is_none());
    }

    #[test]
    fn test_filled_form_valid() {
        let form = filled_form();
        assert!(form.is_valid());

        let request = form.to_request().unwrap();
        assert_eq!(request.age_at_release, "30");
        assert_eq!(request.jobs_per_year, "1.5");
    }

    #[test]
    fn test_each_missing_field_blocks_submit() {
        for field in FieldName::ALL {
            let form = filled_form().with(field, "");
            assert!(!form.is_valid(), "{} empty should block", field);
            assert_eq!(form.missing(), vec![field]);
        }
    }

    #[test]
    fn test_invalid_text_is_kept() {
        let mut form = filled_form();
        form.set(FieldName::AgeAtRelease, "81");

        assert_eq!(form.value(FieldName::AgeAtRelease), "81");
        assert_eq!(
            form.error_message(FieldName::AgeAtRelease).as_deref(),
            Some("Age must be between 18 and 80.")
        );
        assert!(!form.is_valid());

        form.set(FieldName::AgeAtRelease, "80");
        assert!(form.error(FieldName::AgeAtRelease).is_none());
        assert!(form.is_valid());
    }

    #[test]
    fn test_errors_are_independent() {
        let mut form = filled_form();
        form.set(FieldName::ResidencePuma, "0");
        form.set(FieldName::JobsPerYear, "9");

        assert_eq!(form.errors().count(), 2);
        assert!(form.error(FieldName::AgeAtRelease).is_none());

        form.set(FieldName::ResidencePuma, "1");
        assert_eq!(form.errors().count(), 1);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_request_keeps_text_as_entered() {
        let form = filled_form().with(FieldName::AgeAtRelease, "25.0");
        let body = serde_json::to_value(form.to_request().unwrap()).unwrap();

        assert_eq!(body["age_at_release"], "25.0");
        assert_eq!(body["gender"], "M");
        assert_eq!(body.as_object().unwrap().len(), 7);
    }
}
