//! Prediction Report
//!
//! The `/predict` success body and the pieces the results display is
//! built from: headline, two-bar probability chart, explanation lines.

use serde::{Deserialize, Serialize};

/// Output class labels, in chart order
pub const CLASS_LABELS: [&str; 2] = ["Non-Recidivist", "Recidivist"];

/// Bar fill colors (green, red)
const BAR_COLORS: [&str; 2] = ["#4caf50", "#f44336"];

/// Bar border colors
const BAR_BORDERS: [&str; 2] = ["#388e3c", "#c62828"];

/// Successful prediction response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class label as returned by the server
    pub prediction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Probabilities>,
    /// Newline-delimited explanation
    #[serde(default)]
    pub explanation_text: String,
}

/// Probability per output class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "Non-Recidivist")]
    pub non_recidivist: f64,
    #[serde(rename = "Recidivist")]
    pub recidivist: f64,
}

/// A single chart bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    pub border: &'static str,
}

/// Bar chart of the class probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: &'static str,
    pub bars: [Bar; 2],
}

impl ChartData {
    pub fn from_probabilities(p: &Probabilities) -> Self {
        let values = [p.non_recidivist, p.recidivist];
        let bars = [0usize, 1].map(|i| Bar {
            label: CLASS_LABELS[i],
            value: values[i],
            color: BAR_COLORS[i],
            border: BAR_BORDERS[i],
        });

        Self {
            title: "Probability",
            bars,
        }
    }

    /// Largest bar value, used to scale the y axis
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

impl PredictionResult {
    /// Headline shown at the top of the results display
    pub fn headline(&self) -> String {
        format!("Prediction: {}", self.prediction)
    }

    /// Explanation split on newlines, whitespace-only lines dropped
    pub fn explanation_lines(&self) -> Vec<&str> {
        explanation_lines(&self.explanation_text)
    }

    /// Chart data, if the response carried probabilities
    pub fn chart(&self) -> Option<ChartData> {
        self.probabilities.as_ref().map(ChartData::from_probabilities)
    }
}

/// Split explanation text into list items.
pub fn explanation_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}
