//! Class-label table mapping classifier indices back to human labels.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Bidirectional mapping between class names and the integer indices the
/// classifier operates on. Index order is the fitted order.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Load the fitted class table from a JSON artifact.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open label encoder from {:?}", path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse label encoder from {:?}", path))
    }

    /// Decode a class index back to its label.
    pub fn inverse_transform(&self, index: usize) -> Result<&str> {
        self.classes
            .get(index)
            .map(String::as_str)
            .with_context(|| {
                format!(
                    "class index {} out of range for {} classes",
                    index,
                    self.classes.len()
                )
            })
    }

    /// Encode a label to its class index.
    pub fn transform(&self, label: &str) -> Result<usize> {
        self.classes
            .iter()
            .position(|c| c == label)
            .with_context(|| format!("unknown class label `{}`", label))
    }

    /// Fitted class labels in index order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
