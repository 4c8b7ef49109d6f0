//! Type definitions for the order predictor

pub mod customer;
pub mod prediction;

pub use customer::CustomerRecord;
pub use prediction::{DisplayStyle, PredictionResult};
