//! Online Food Order Predictor Library
//!
//! Collects customer attributes through a console form and scores them with
//! a pre-trained preprocessing pipeline and binary classifier loaded from
//! disk.

pub mod artifacts;
pub mod config;
pub mod form;
pub mod inference;
pub mod metrics;
pub mod types;

pub use artifacts::Artifacts;
pub use config::AppConfig;
pub use inference::InferenceContext;
pub use metrics::SessionMetrics;
pub use types::{customer::CustomerRecord, prediction::PredictionResult};
