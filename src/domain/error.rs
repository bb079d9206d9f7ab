//! Error types for the localization pipeline.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocalizationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Length mismatch: {features} feature vectors but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("Split would leave the {side} set empty ({total} samples, test_fraction={test_fraction})")]
    EmptySplit {
        side: &'static str,
        total: usize,
        test_fraction: f64,
    },

    #[error("Model not trained: call train() before predict() or evaluate()")]
    NotTrained,
}

pub type Result<T> = std::result::Result<T, LocalizationError>;
