//! Runner errors

use crate::config::ConfigError;
use regime_core::TradeDate;
use regime_hmm::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to load model {path}: {source}")]
    Model {
        path: String,
        #[source]
        source: ModelError,
    },

    #[error("Risk manager {manager} failed: {source}")]
    RiskManager {
        manager: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Bar for {date} is not after the previous bar ({previous})")]
    OutOfOrder { date: TradeDate, previous: TradeDate },

    #[error("Invalid adjusted close {adj_close} on {date}")]
    InvalidPrice { date: TradeDate, adj_close: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
