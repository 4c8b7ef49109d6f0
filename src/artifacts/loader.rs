//! Startup loader for the pre-trained artifacts.

use crate::artifacts::classifier::Classifier;
use crate::artifacts::label_encoder::LabelEncoder;
use crate::artifacts::preprocessor::Preprocessor;
use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

/// Fixed artifact filenames, owned by the training pipeline.
pub const PREPROCESSOR_FILE: &str = "preprocessor.json";
pub const CLASSIFIER_FILE: &str = "best_model.onnx";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";

/// The three pre-trained artifacts the application cannot run without.
#[derive(Debug)]
pub struct Artifacts {
    pub preprocessor: Preprocessor,
    pub classifier: Classifier,
    pub label_encoder: LabelEncoder,
}

impl Artifacts {
    /// Load all three artifacts from `dir`.
    ///
    /// Every path is checked before anything is loaded: a missing file is a
    /// fatal configuration error whose message names each expected filename,
    /// and no form interaction happens after it.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let missing: Vec<&str> = [PREPROCESSOR_FILE, CLASSIFIER_FILE, LABEL_ENCODER_FILE]
            .into_iter()
            .filter(|name| !dir.join(name).exists())
            .collect();

        if !missing.is_empty() {
            bail!(
                "Model, preprocessor, or label encoder not found (missing: {}). \
                 Make sure `{}`, `{}`, and `{}` are present in `{}`.",
                missing.join(", "),
                PREPROCESSOR_FILE,
                CLASSIFIER_FILE,
                LABEL_ENCODER_FILE,
                dir.display()
            );
        }

        // ONNX Runtime must be initialized before the first session is built
        ort::init().commit()?;

        let preprocessor = Preprocessor::from_path(dir.join(PREPROCESSOR_FILE))?;
        info!(
            features = preprocessor.feature_count(),
            columns = preprocessor.column_count(),
            "Preprocessor loaded"
        );

        let classifier = Classifier::load(dir.join(CLASSIFIER_FILE))?;

        let label_encoder = LabelEncoder::from_path(dir.join(LABEL_ENCODER_FILE))?;
        info!(classes = ?label_encoder.classes(), "Label encoder loaded");

        Ok(Self {
            preprocessor,
            classifier,
            label_encoder,
        })
    }
}
