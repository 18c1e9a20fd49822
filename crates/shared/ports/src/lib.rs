//! Regime Ports
//!
//! Port definitions (traits) for the regime-gated trading workflow.
//! These define the boundaries between the decision logic and the
//! collaborators it only knows through a single capability:
//!
//! - [`RegimePredictor`]: labels a return series with hidden states
//! - [`ReturnSource`]: exposes the returns observed so far
//! - [`RiskManager`]: filters proposed orders

mod error;
mod predictor;
mod returns;
mod risk;

pub use error::{PredictorError, PredictorResult};
pub use predictor::RegimePredictor;
pub use returns::ReturnSource;
pub use risk::RiskManager;
