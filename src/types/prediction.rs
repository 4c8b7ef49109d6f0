//! Prediction output and its presentation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display style for a rendered verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    Positive,
    Negative,
}

impl DisplayStyle {
    /// Positive if and only if the decoded label is `Yes`.
    pub fn from_label(label: &str) -> Self {
        if label == "Yes" {
            DisplayStyle::Positive
        } else {
            DisplayStyle::Negative
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Class index returned by the classifier
    pub class_index: usize,

    /// Decoded class label (`Yes`/`No`)
    pub label: String,

    /// Per-class probability distribution for the scored row
    pub probabilities: Vec<f64>,

    /// Prediction timestamp
    pub timestamp: DateTime<Utc>,
}

impl PredictionResult {
    /// Create a prediction result stamped with the current time.
    pub fn new(class_index: usize, label: String, probabilities: Vec<f64>) -> Self {
        Self {
            class_index,
            label,
            probabilities,
            timestamp: Utc::now(),
        }
    }

    /// Display style derived from the decoded label.
    pub fn display_style(&self) -> DisplayStyle {
        DisplayStyle::from_label(&self.label)
    }

    /// Probability backing the verdict: class 1 when positive, class 0 when
    /// negative.
    pub fn display_probability(&self) -> Result<f64> {
        let index = match self.display_style() {
            DisplayStyle::Positive => 1,
            DisplayStyle::Negative => 0,
        };

        self.probabilities.get(index).copied().with_context(|| {
            format!(
                "classifier returned {} probabilities, expected class index {}",
                self.probabilities.len(),
                index
            )
        })
    }

    /// Verdict headline for the terminal.
    pub fn headline(&self) -> &'static str {
        match self.display_style() {
            DisplayStyle::Positive => "Customer is likely to order online food! 🎉",
            DisplayStyle::Negative => "Customer is unlikely to order online food. 😔",
        }
    }

    /// Probability line with the percentage formatted to two decimals.
    pub fn probability_line(&self) -> Result<String> {
        let probability = self.display_probability()?;
        let line = match self.display_style() {
            DisplayStyle::Positive => {
                format!("Probability of ordering: {:.2}%", probability * 100.0)
            }
            DisplayStyle::Negative => {
                format!("Probability of not ordering: {:.2}%", probability * 100.0)
            }
        };
        Ok(line)
    }
}
