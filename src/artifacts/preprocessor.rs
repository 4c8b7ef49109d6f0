//! Feature preprocessing fit during training, applied unchanged at inference.
//!
//! The transform schema is exported by the training pipeline and mirrors the
//! fitted ColumnTransformer: features come out in schema order, numerics
//! passed through or standardized, categoricals one-hot expanded.

use crate::types::customer::{CustomerRecord, FieldValue};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One fitted column transform.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnTransform {
    /// Copy a numeric value unchanged
    Passthrough { column: String },
    /// Standardize a numeric value with the fitted mean and scale
    Scale { column: String, mean: f64, scale: f64 },
    /// Expand a categorical value into one indicator per category
    OneHot {
        column: String,
        categories: Vec<String>,
    },
}

impl ColumnTransform {
    /// Record column this transform reads.
    pub fn column(&self) -> &str {
        match self {
            ColumnTransform::Passthrough { column } => column,
            ColumnTransform::Scale { column, .. } => column,
            ColumnTransform::OneHot { column, .. } => column,
        }
    }

    /// Number of features this transform emits.
    fn width(&self) -> usize {
        match self {
            ColumnTransform::Passthrough { .. } | ColumnTransform::Scale { .. } => 1,
            ColumnTransform::OneHot { categories, .. } => categories.len(),
        }
    }
}

/// Deterministic feature-transformation pipeline fit during training.
#[derive(Debug, Clone, Deserialize)]
pub struct Preprocessor {
    columns: Vec<ColumnTransform>,
}

impl Preprocessor {
    /// Load the fitted schema from a JSON artifact.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open preprocessor from {:?}", path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse preprocessor schema from {:?}", path))
    }

    /// Transform a customer record into the feature vector in trained order.
    ///
    /// A category absent from the fitted vocabulary is an error; the caller
    /// surfaces it and drops the current interaction.
    pub fn transform(&self, record: &CustomerRecord) -> Result<Vec<f32>> {
        let row: HashMap<&str, FieldValue> = record.columns().into_iter().collect();
        let mut features = Vec::with_capacity(self.feature_count());

        for transform in &self.columns {
            let value = row.get(transform.column()).with_context(|| {
                format!("column `{}` missing from input record", transform.column())
            })?;

            match (transform, value) {
                (ColumnTransform::Passthrough { .. }, FieldValue::Number(v)) => {
                    features.push(*v as f32);
                }
                (ColumnTransform::Scale { mean, scale, .. }, FieldValue::Number(v)) => {
                    features.push(((v - mean) / scale) as f32);
                }
                (ColumnTransform::OneHot { column, categories }, FieldValue::Text(v)) => {
                    let hit = categories.iter().position(|c| c == v).with_context(|| {
                        format!("unknown category `{}` for column `{}`", v, column)
                    })?;
                    for i in 0..categories.len() {
                        features.push(if i == hit { 1.0 } else { 0.0 });
                    }
                }
                _ => bail!(
                    "column `{}` carries the wrong value type for its transform",
                    transform.column()
                ),
            }
        }

        Ok(features)
    }

    /// Total number of features the schema emits.
    pub fn feature_count(&self) -> usize {
        self.columns.iter().map(ColumnTransform::width).sum()
    }

    /// Number of record columns the schema consumes.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::customer::{Feedback, MonthlyIncome};

    fn sample_schema() -> Preprocessor {
        serde_json::from_value(serde_json::json!({
            "columns": [
                {"kind": "scale", "column": "Age", "mean": 25.0, "scale": 5.0},
                {"kind": "one_hot", "column": "Gender",
                 "categories": ["Female", "Male", "Prefer not to say"]},
                {"kind": "passthrough", "column": "Monthly Income"},
                {"kind": "one_hot", "column": "Feedback",
                 "categories": ["Negative ", "Positive"]},
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_features_come_out_in_schema_order() {
        let preprocessor = sample_schema();
        let record = CustomerRecord {
            age: 30,
            monthly_income: MonthlyIncome::Rs10001To25000,
            ..CustomerRecord::default()
        };

        let features = preprocessor.transform(&record).unwrap();

        // scaled age, one-hot gender (Male), income ordinal, one-hot feedback
        assert_eq!(features, vec![1.0, 0.0, 1.0, 0.0, 2.0, 0.0, 1.0]);
        assert_eq!(features.len(), preprocessor.feature_count());
    }

    #[test]
    fn test_trailing_space_feedback_matches_trained_vocabulary() {
        let preprocessor = sample_schema();
        let record = CustomerRecord {
            feedback: Feedback::Negative,
            ..CustomerRecord::default()
        };

        let features = preprocessor.transform(&record).unwrap();
        assert_eq!(&features[5..], &[1.0, 0.0]);
    }

    #[test]
    fn test_unknown_category_is_a_transform_error() {
        let preprocessor: Preprocessor = serde_json::from_value(serde_json::json!({
            "columns": [
                {"kind": "one_hot", "column": "Pin code", "categories": ["560001"]},
            ]
        }))
        .unwrap();
        let record = CustomerRecord {
            pin_code: "110001".to_string(),
            ..CustomerRecord::default()
        };

        let err = preprocessor.transform(&record).unwrap_err();
        assert!(err.to_string().contains("Pin code"));
        assert!(err.to_string().contains("110001"));
    }

    #[test]
    fn test_schema_column_not_in_record_is_an_error() {
        let preprocessor: Preprocessor = serde_json::from_value(serde_json::json!({
            "columns": [
                {"kind": "passthrough", "column": "Delivery time"},
            ]
        }))
        .unwrap();

        let err = preprocessor
            .transform(&CustomerRecord::default())
            .unwrap_err();
        assert!(err.to_string().contains("Delivery time"));
    }

    #[test]
    fn test_categorical_transform_rejects_numeric_column() {
        let preprocessor: Preprocessor = serde_json::from_value(serde_json::json!({
            "columns": [
                {"kind": "one_hot", "column": "Age", "categories": ["25"]},
            ]
        }))
        .unwrap();

        assert!(preprocessor.transform(&CustomerRecord::default()).is_err());
    }

    #[test]
    fn test_feature_count_sums_one_hot_widths() {
        assert_eq!(sample_schema().feature_count(), 7);
        assert_eq!(sample_schema().column_count(), 4);
    }
}
