//! Risk manager errors

use regime_core::CoreError;
use regime_ports::PredictorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Insufficient return history: need at least {required} observations, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Regime predictor {predictor} failed: {source}")]
    Predictor {
        predictor: String,
        #[source]
        source: PredictorError,
    },

    #[error("Regime predictor {predictor} returned {actual} labels for {expected} observations")]
    LabelCountMismatch {
        predictor: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
