//! Baseline risk manager that approves every order

use regime_core::OrderIntent;
use regime_ports::{ReturnSource, RiskManager};
use std::convert::Infallible;

/// Approves every proposed order unchanged
///
/// Useful as the ungated baseline when comparing sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughRiskManager;

impl RiskManager for PassThroughRiskManager {
    type Error = Infallible;

    fn name(&self) -> &str {
        "PassThroughRiskManager"
    }

    fn refine_orders(
        &mut self,
        _portfolio: &dyn ReturnSource,
        order: &OrderIntent,
    ) -> Result<Vec<OrderIntent>, Infallible> {
        Ok(vec![order.clone()])
    }
}
