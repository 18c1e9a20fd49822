//! Cointegration test configuration

use serde::{Deserialize, Serialize};

/// Lag-length selection for the ADF regression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoLag {
    /// Minimise the Akaike information criterion
    #[default]
    Aic,
    /// Minimise the Bayesian information criterion
    Bic,
    /// Use the maximum lag as given
    Fixed,
}

/// Configuration for [`CointegrationTest`](crate::CointegrationTest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CointegrationConfig {
    /// p-value at or below which the pair is declared cointegrated
    pub significance: f64,
    /// Upper bound on augmentation lags; derived from the sample size when unset
    pub max_lag: Option<usize>,
    pub autolag: AutoLag,
}

impl Default for CointegrationConfig {
    fn default() -> Self {
        Self {
            significance: 0.05,
            max_lag: None,
            autolag: AutoLag::Aic,
        }
    }
}
