//! Form Field Definitions
//!
//! The seven prediction inputs and the closed option sets of the
//! selection fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven prediction form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Gender,
    Race,
    AgeAtRelease,
    EducationLevel,
    SupervisionRiskScoreFirst,
    ResidencePuma,
    JobsPerYear,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 7] = [
        FieldName::Gender,
        FieldName::Race,
        FieldName::AgeAtRelease,
        FieldName::EducationLevel,
        FieldName::SupervisionRiskScoreFirst,
        FieldName::ResidencePuma,
        FieldName::JobsPerYear,
    ];

    /// Wire name used in the `/predict` request body
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Gender => "gender",
            FieldName::Race => "race",
            FieldName::AgeAtRelease => "age_at_release",
            FieldName::EducationLevel => "education_level",
            FieldName::SupervisionRiskScoreFirst => "supervision_risk_score_first",
            FieldName::ResidencePuma => "residence_puma",
            FieldName::JobsPerYear => "jobs_per_year",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Gender => "Gender",
            FieldName::Race => "Race",
            FieldName::AgeAtRelease => "Age at Release",
            FieldName::EducationLevel => "Education Level",
            FieldName::SupervisionRiskScoreFirst => "Supervision Risk Score",
            FieldName::ResidencePuma => "Residence PUMA",
            FieldName::JobsPerYear => "Jobs Per Year",
        }
    }

    /// Tooltip text shown next to the input
    pub fn help(&self) -> &'static str {
        match self {
            FieldName::Gender => "The self-identified gender of the individual.",
            FieldName::Race => "The racial or ethnic background of the individual.",
            FieldName::AgeAtRelease => {
                "The age of the individual at the time of release from prison."
            }
            FieldName::EducationLevel => {
                "The highest level of education completed by the individual."
            }
            FieldName::SupervisionRiskScoreFirst => {
                "A numerical risk score indicating the likelihood of violating parole or reoffending."
            }
            FieldName::ResidencePuma => {
                "The Public Use Microdata Area (PUMA) code where the individual resides."
            }
            FieldName::JobsPerYear => "The number of jobs held per year by the individual.",
        }
    }

    /// Options for selection fields, `None` for free-text numeric fields
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        match self {
            FieldName::Gender => Some(Gender::OPTIONS),
            FieldName::Race => Some(Race::OPTIONS),
            FieldName::EducationLevel => Some(EducationLevel::OPTIONS),
            _ => None,
        }
    }

    /// Whether the field is a selection from a closed set
    pub fn is_selection(&self) -> bool {
        self.options().is_some()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// A selectable option: submitted value and display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub display: &'static str,
}

/// Gender selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const OPTIONS: &'static [SelectOption] = &[
        SelectOption { value: Gender::Male.as_str(), display: "Male" },
        SelectOption { value: Gender::Female.as_str(), display: "Female" },
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

/// Race selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Race {
    Black,
    White,
}

impl Race {
    pub const OPTIONS: &'static [SelectOption] = &[
        SelectOption { value: Race::Black.as_str(), display: "Black" },
        SelectOption { value: Race::White.as_str(), display: "White" },
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Race::Black => "BLACK",
            Race::White => "WHITE",
        }
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BLACK" => Ok(Race::Black),
            "WHITE" => Ok(Race::White),
            other => Err(format!("Unknown race: {}", other)),
        }
    }
}

/// Highest education level completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    LessThanHighSchool,
    HighSchoolDiploma,
    SomeCollege,
}

impl EducationLevel {
    pub const OPTIONS: &'static [SelectOption] = &[
        SelectOption {
            value: EducationLevel::LessThanHighSchool.as_str(),
            display: EducationLevel::LessThanHighSchool.as_str(),
        },
        SelectOption {
            value: EducationLevel::HighSchoolDiploma.as_str(),
            display: EducationLevel::HighSchoolDiploma.as_str(),
        },
        SelectOption {
            value: EducationLevel::SomeCollege.as_str(),
            display: EducationLevel::SomeCollege.as_str(),
        },
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::LessThanHighSchool => "Less Than High School Diploma",
            EducationLevel::HighSchoolDiploma => "High School Diploma",
            EducationLevel::SomeCollege => "At Least Some College",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Less Than High School Diploma" => Ok(EducationLevel::LessThanHighSchool),
            "High School Diploma" => Ok(EducationLevel::HighSchoolDiploma),
            "At Least Some College" => Ok(EducationLevel::SomeCollege),
            other => Err(format!("Unknown education level: {}", other)),
        }
    }
}

/// Whether `raw` is one of the closed-set values of a selection field.
///
/// `None` for free-text numeric fields.
pub fn parses_as_option(field: FieldName, raw: &str) -> Option<bool> {
    match field {
        FieldName::Gender => Some(raw.parse::<Gender>().is_ok()),
        FieldName::Race => Some(raw.parse::<Race>().is_ok()),
        FieldName::EducationLevel => Some(raw.parse::<EducationLevel>().is_ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
        assert!("age".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_selection_fields() {
        let selections: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(FieldName::is_selection)
            .collect();
        assert_eq!(
            selections,
            vec![FieldName::Gender, FieldName::Race, FieldName::EducationLevel]
        );
        assert_eq!(EducationLevel::OPTIONS.len(), 3);
    }

    #[test]
    fn test_options_parse_back() {
        for (field, options) in [
            (FieldName::Gender, Gender::OPTIONS),
            (FieldName::Race, Race::OPTIONS),
            (FieldName::EducationLevel, EducationLevel::OPTIONS),
        ] {
            for option in options {
                assert_eq!(parses_as_option(field, option.value), Some(true));
            }
        }

        assert_eq!(Gender::OPTIONS[1].value, "F");
        assert_eq!(
            "At Least Some College".parse::<EducationLevel>().unwrap(),
            EducationLevel::SomeCollege
        );
        assert_eq!(parses_as_option(FieldName::Race, "white"), Some(false));
        assert_eq!(parses_as_option(FieldName::AgeAtRelease, "30"), None);
    }
}
