//! Regime Core Domain
//!
//! Pure domain types shared by the regime predictor, the risk manager and
//! the cointegration report. This crate contains no I/O and is 100% unit
//! testable.

pub mod entities;
pub mod error;
pub mod series;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{OrderAction, OrderIntent, Regime, RegimeLabel};
pub use error::{CoreError, CoreResult};
pub use series::{PriceHistory, ReturnSeries};
pub use values::{Quantity, Ticker, TradeDate};
