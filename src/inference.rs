//! Inference over the loaded artifacts.

use crate::artifacts::Artifacts;
use crate::types::customer::CustomerRecord;
use crate::types::prediction::PredictionResult;
use anyhow::Result;
use tracing::debug;

/// The three loaded artifacts, held for the process lifetime and handed by
/// reference to every interaction.
pub struct InferenceContext {
    artifacts: Artifacts,
}

impl InferenceContext {
    /// Wrap loaded artifacts into an inference context.
    pub fn new(artifacts: Artifacts) -> Self {
        Self { artifacts }
    }

    /// Transform stage: record to feature vector in trained order.
    ///
    /// Errors here abort the current interaction only; the caller surfaces
    /// them and prompts again.
    pub fn transform(&self, record: &CustomerRecord) -> Result<Vec<f32>> {
        self.artifacts.preprocessor.transform(record)
    }

    /// Predict and predict-probability stages plus label decode.
    ///
    /// Errors here are application faults and propagate to the process error
    /// surface.
    pub fn predict(&mut self, features: &[f32]) -> Result<PredictionResult> {
        let class_index = self.artifacts.classifier.predict(features)?;
        let probabilities = self.artifacts.classifier.predict_proba(features)?;
        let label = self
            .artifacts
            .label_encoder
            .inverse_transform(class_index)?
            .to_string();

        debug!(
            class_index,
            label = %label,
            probabilities = ?probabilities,
            "Inference complete"
        );

        Ok(PredictionResult::new(class_index, label, probabilities))
    }

    /// Feature width the preprocessor produces.
    pub fn feature_count(&self) -> usize {
        self.artifacts.preprocessor.feature_count()
    }

    /// Class labels in fitted order.
    pub fn class_labels(&self) -> &[String] {
        self.artifacts.label_encoder.classes()
    }
}
