//! Cointegration errors
//!
//! Data problems are reported before any regression runs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No prices for {ticker} inside the requested window")]
    EmptyWindow { ticker: String },

    #[error("Price histories are not aligned: {x} has {x_len} dates, {y} has {y_len}")]
    Misaligned {
        x: String,
        y: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("Need at least {required} observations, have {available}")]
    InsufficientObservations { required: usize, available: usize },

    #[error("Regression design matrix is singular")]
    SingularDesign,

    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
