//! ONNX classifier wrapper.
//!
//! Handles the two output layouts of sklearn-family ONNX exports: a label
//! tensor plus probabilities as either a plain tensor or seq(map(int64,float)).

use anyhow::{bail, Context, Result};
use ort::memory::Allocator;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{DowncastableTarget, DynMapValueType, DynSequenceValueType, Tensor};
use std::path::Path;
use tracing::{debug, info};

/// Trained binary classifier loaded from an ONNX export.
#[derive(Debug)]
pub struct Classifier {
    session: Session,
    /// Input name for the model
    input_name: String,
    /// Output name for the predicted class
    label_output: String,
    /// Output name for probabilities
    prob_output: String,
}

impl Classifier {
    /// Load the classifier from an ONNX file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(1)?
            .commit_from_file(path)
            .context(format!("Failed to load classifier from {:?}", path))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        let label_output = session
            .outputs
            .iter()
            .find(|o| o.name.contains("label"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "output_label".to_string());

        let prob_output = session
            .outputs
            .iter()
            .find(|o| o.name.contains("prob"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "output_probability".to_string());

        info!(
            input = %input_name,
            label = %label_output,
            probabilities = %prob_output,
            "Classifier loaded"
        );

        Ok(Self {
            session,
            input_name,
            label_output,
            prob_output,
        })
    }

    /// Predicted class index for one feature row.
    pub fn predict(&mut self, features: &[f32]) -> Result<usize> {
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor =
            Tensor::from_array((shape, features.to_vec())).context("Failed to create input tensor")?;

        let outputs = self
            .session
            .run(ort::inputs![&self.input_name => input_tensor])?;

        if let Some(output) = outputs.get(&self.label_output) {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                let class = data
                    .first()
                    .copied()
                    .context("classifier returned an empty label tensor")?;
                return Ok(class as usize);
            }
        }

        // Fallback: take any int64 tensor among the outputs
        for (name, output) in outputs.iter() {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                if let Some(class) = data.first().copied() {
                    debug!(output = %name, class = class, "Extracted label (fallback)");
                    return Ok(class as usize);
                }
            }
        }

        bail!("classifier produced no label output")
    }

    /// Per-class probability distribution for one feature row.
    pub fn predict_proba(&mut self, features: &[f32]) -> Result<Vec<f64>> {
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor =
            Tensor::from_array((shape, features.to_vec())).context("Failed to create input tensor")?;

        let outputs = self
            .session
            .run(ort::inputs![&self.input_name => input_tensor])?;

        if let Some(output) = outputs.get(&self.prob_output) {
            // Tensor format (e.g. RandomForest without zipmap)
            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                return Ok(Self::distribution_from_tensor(&shape, data));
            }

            // seq(map(int64, float)) format (zipmap exports)
            if DynSequenceValueType::can_downcast(&output.dtype()) {
                if let Ok(probs) = Self::distribution_from_sequence_map(output) {
                    return Ok(probs);
                }
            }
        }

        // Fallback: iterate all outputs and try extraction
        for (name, output) in outputs.iter() {
            if name.contains("label") {
                continue;
            }

            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                debug!(output = %name, "Extracted probabilities from tensor (fallback)");
                return Ok(Self::distribution_from_tensor(&shape, data));
            }

            if DynSequenceValueType::can_downcast(&output.dtype()) {
                if let Ok(probs) = Self::distribution_from_sequence_map(&output) {
                    debug!(output = %name, "Extracted probabilities from seq(map) (fallback)");
                    return Ok(probs);
                }
            }
        }

        bail!("classifier produced no probability output")
    }

    /// First-row distribution from a `[batch, num_classes]` or `[num_classes]`
    /// tensor.
    fn distribution_from_tensor(shape: &ort::tensor::Shape, data: &[f32]) -> Vec<f64> {
        let dims: Vec<i64> = shape.iter().copied().collect();

        let width = match dims.len() {
            2 => dims[1] as usize,
            1 => dims[0] as usize,
            _ => data.len(),
        };

        data.iter().take(width).map(|&v| v as f64).collect()
    }

    /// Distribution from seq(map(int64, float)), ordered by class index.
    fn distribution_from_sequence_map(output: &ort::value::DynValue) -> Result<Vec<f64>> {
        let allocator = Allocator::default();

        let sequence = output
            .downcast_ref::<DynSequenceValueType>()
            .map_err(|e| anyhow::anyhow!("Failed to downcast to sequence: {}", e))?;

        let maps = sequence.try_extract_sequence::<DynMapValueType>(&allocator)?;
        if maps.is_empty() {
            bail!("empty probability sequence");
        }

        // Batch size is always 1; the first map holds the distribution
        let mut kv_pairs = maps[0].try_extract_key_values::<i64, f32>()?;
        kv_pairs.sort_by_key(|(class_id, _)| *class_id);

        Ok(kv_pairs.into_iter().map(|(_, prob)| prob as f64).collect())
    }
}
