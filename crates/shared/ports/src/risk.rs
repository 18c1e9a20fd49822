use crate::returns::ReturnSource;
use regime_core::OrderIntent;

/// Port for order risk management
///
/// Sits between the strategy's sized orders and execution. A risk manager
/// may suppress an order or pass it through unchanged; it never creates or
/// resizes orders. Calls for one instance must be made sequentially.
pub trait RiskManager {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the risk manager's name for logging
    fn name(&self) -> &str;

    /// Refine a proposed order into the list of orders to execute (0 or 1)
    fn refine_orders(
        &mut self,
        portfolio: &dyn ReturnSource,
        order: &OrderIntent,
    ) -> Result<Vec<OrderIntent>, Self::Error>;
}
