//! Stub Scoring
//!
//! Deterministic stand-in for the prediction model: a logistic score over
//! the numeric inputs and education level. Gender and race carry no weight.

use serde_json::{Map, Value};
use std::str::FromStr;

use crate::form::{EducationLevel, FieldName, Gender, Race};
use crate::report::{PredictionResult, Probabilities};

use super::error::ApiError;

const BIAS: f64 = -2.0;

const HIGH_RISK_LABEL: &str = "High Risk of Recidivism";
const LOW_RISK_LABEL: &str = "Low Risk of Recidivism";

/// One weighted input after normalization to [0, 1]
struct Contribution {
    field: FieldName,
    value: f64,
}

/// Score a `/predict` body
pub fn score(body: &Map<String, Value>) -> Result<PredictionResult, ApiError> {
    for field in FieldName::ALL {
        if !body.contains_key(field.as_str()) {
            return Err(ApiError::BadRequest(format!("Missing field: {}", field)));
        }
    }

    let age = number(body, FieldName::AgeAtRelease)?;
    let risk = number(body, FieldName::SupervisionRiskScoreFirst)?;
    let jobs = number(body, FieldName::JobsPerYear)?;
    // Parsed for validation only
    number(body, FieldName::ResidencePuma)?;

    // Checked for membership only
    option::<Gender>(body, FieldName::Gender)?;
    option::<Race>(body, FieldName::Race)?;

    let education = match option::<EducationLevel>(body, FieldName::EducationLevel)? {
        EducationLevel::LessThanHighSchool => 1.0,
        EducationLevel::HighSchoolDiploma => 0.5,
        EducationLevel::SomeCollege => 0.0,
    };

    let contributions = [
        Contribution {
            field: FieldName::AgeAtRelease,
            value: 1.2 * ((80.0 - age) / 62.0).clamp(0.0, 1.0),
        },
        Contribution {
            field: FieldName::EducationLevel,
            value: 0.6 * education,
        },
        Contribution {
            field: FieldName::SupervisionRiskScoreFirst,
            value: 2.4 * ((risk - 1.0) / 9.0).clamp(0.0, 1.0),
        },
        Contribution {
            field: FieldName::JobsPerYear,
            value: 0.8 * (1.0 - jobs / 8.0).clamp(0.0, 1.0),
        },
    ];

    let z = BIAS + contributions.iter().map(|c| c.value).sum::<f64>();
    let recidivist = round4(1.0 / (1.0 + (-z).exp()));
    let non_recidivist = round4(1.0 - recidivist);

    let label = if recidivist >= 0.5 {
        HIGH_RISK_LABEL
    } else {
        LOW_RISK_LABEL
    };

    Ok(PredictionResult {
        prediction: label.to_string(),
        probabilities: Some(Probabilities {
            non_recidivist,
            recidivist,
        }),
        explanation_text: explain(label, &contributions),
    })
}

fn explain(label: &str, contributions: &[Contribution]) -> String {
    let total: f64 = contributions.iter().map(|c| c.value.abs()).sum();

    let mut text = format!(
        "Based on the information provided, the person is predicted to be a {}.\n",
        label
    );

    for c in contributions.iter().filter(|c| c.value != 0.0) {
        let share = if total > 0.0 { c.value / total } else { 0.0 };
        text.push_str(&format!(
            "The person's {} had a {:.2}% influence on the prediction.\n",
            c.field.label(),
            share * 100.0
        ));
    }

    text
}

fn number(body: &Map<String, Value>, field: FieldName) -> Result<f64, ApiError> {
    let value = match body.get(field.as_str()) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid value for field: {}", field)))
}

fn option<T: FromStr>(body: &Map<String, Value>, field: FieldName) -> Result<T, ApiError> {
    body.get(field.as_str())
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<T>().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid value for field: {}", field)))
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(age: Value, risk: Value, jobs: Value, education: &str) -> Map<String, Value> {
        let value = json!({
            "gender": "M",
            "race": "WHITE",
            "age_at_release": age,
            "education_level": education,
            "supervision_risk_score_first": risk,
            "residence_puma": "4",
            "jobs_per_year": jobs,
        });
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_high_and_low_risk() {
        let high = score(&body(json!("19"), json!("10"), json!("0"), "Less Than High School Diploma")).unwrap();
        assert_eq!(high.prediction, HIGH_RISK_LABEL);

        let low = score(&body(json!(75), json!(1), json!(6), "At Least Some College")).unwrap();
        assert_eq!(low.prediction, LOW_RISK_LABEL);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let result = score(&body(json!("40"), json!("5"), json!("2.5"), "High School Diploma")).unwrap();
        let p = result.probabilities.unwrap();
        assert!((p.non_recidivist + p.recidivist - 1.0).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&p.recidivist));
    }

    #[test]
    fn test_deterministic() {
        let b = body(json!("33"), json!("7"), json!("1"), "High School Diploma");
        assert_eq!(score(&b).unwrap(), score(&b).unwrap());
    }

    #[test]
    fn test_explanation_lines() {
        let result = score(&body(json!("30"), json!("6"), json!("1"), "High School Diploma")).unwrap();
        let lines = result.explanation_lines();

        assert!(lines[0].starts_with("Based on the information provided"));
        assert!(lines[1..].iter().all(|l| l.starts_with("The person's ")));
        assert!(!result.explanation_text.contains("Race"));
        assert!(!result.explanation_text.contains("Gender"));
    }

    #[test]
    fn test_missing_field() {
        let mut b = body(json!("30"), json!("6"), json!("1"), "High School Diploma");
        b.remove("race");

        let err = score(&b).unwrap_err();
        assert_eq!(err.to_string(), "Missing field: race");
    }

    #[test]
    fn test_unknown_option() {
        let b = body(json!("30"), json!("6"), json!("1"), "PhD");
        let err = score(&b).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for field: education_level");

        let mut b = body(json!("30"), json!("6"), json!("1"), "High School Diploma");
        b.insert("gender".to_string(), json!("X"));
        let err = score(&b).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for field: gender");
    }

    #[test]
    fn test_unparseable_number() {
        let b = body(json!("thirty"), json!("6"), json!("1"), "High School Diploma");
        let err = score(&b).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for field: age_at_release");
    }
}
