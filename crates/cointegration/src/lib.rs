//! Cointegration Report
//!
//! Offline check of whether two adjusted-close series share a long-run
//! equilibrium:
//!
//! 1. Window both histories to the same inclusive date range
//! 2. Regress `y` on `x` with an intercept (OLS)
//! 3. Run an augmented Dickey-Fuller test on the residual spread
//! 4. Declare the pair cointegrated when the p-value is at or below the
//!    configured significance (0.05 by default)
//!
//! Reading price files is left to the caller; the test works on in-memory
//! [`PriceHistory`](regime_core::PriceHistory) values.

pub mod adf;
pub mod config;
pub mod error;
pub mod mackinnon;
pub mod ols;
pub mod report;

pub use adf::{AdfResult, adf_test};
pub use config::{AutoLag, CointegrationConfig};
pub use error::{Error, Result};
pub use mackinnon::CriticalValues;
pub use ols::{OlsFit, ols};
pub use report::{CointegrationReport, CointegrationTest};
