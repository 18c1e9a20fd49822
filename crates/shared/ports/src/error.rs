use thiserror::Error;

/// Errors raised by a regime predictor at prediction time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    #[error("Cannot predict on an empty return matrix")]
    EmptyInput,

    #[error("Return matrix has {actual} columns, predictor expects {expected}")]
    ColumnMismatch { expected: usize, actual: usize },

    #[error("Prediction failed: {0}")]
    Failed(String),
}

pub type PredictorResult<T> = std::result::Result<T, PredictorError>;
