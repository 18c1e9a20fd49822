//! Regime-Gated Risk Manager
//!
//! Stateful order filter that:
//! - Reads the combined regime from two predictors on every order
//! - Lets orders through unchanged in the desirable regime
//! - Blocks new exposure in the undesirable regime
//! - Still lets an open trade be closed when it straddles a regime change

use crate::config::{FlagPolicy, RiskManagerConfig};
use crate::error::{Error, Result};
use crate::regime::{RegimeReading, determine_regime};
use log::{debug, info};
use regime_core::{OrderAction, OrderIntent, Regime};
use regime_ports::{RegimePredictor, ReturnSource, RiskManager};
use std::sync::Arc;

/// Which row of the decision table an order fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Desirable regime, not invested
    Open,
    /// Desirable regime, invested
    Close,
    /// Undesirable regime, not invested: order suppressed
    BadMarket,
    /// Undesirable regime, invested: order let through to exit the trade
    ForcedClose,
}

impl Branch {
    fn describe(&self) -> &'static str {
        match self {
            Branch::Open => "Open",
            Branch::Close => "Close",
            Branch::BadMarket => "Bad Market Condition, do not invest",
            Branch::ForcedClose => "Bad Trade, get out of the trade",
        }
    }
}

/// Outcome of evaluating one proposed order
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Labels the decision was based on
    pub reading: RegimeReading,
    /// Decision table row
    pub branch: Branch,
    /// Invested flag before the order
    pub invested_before: bool,
    /// Invested flag after the order
    pub invested_after: bool,
    /// The order to execute, identical to the proposed one, if approved
    pub approved: Option<OrderIntent>,
}

impl Decision {
    pub fn regime(&self) -> Regime {
        self.reading.regime()
    }

    pub fn is_approved(&self) -> bool {
        self.approved.is_some()
    }

    /// Orders to hand to execution (0 or 1)
    pub fn into_orders(self) -> Vec<OrderIntent> {
        self.approved.into_iter().collect()
    }
}

/// Risk manager gated on a two-predictor market regime
///
/// Owns its invested flag exclusively; the predictors are shared handles,
/// fitted once and reused across sessions. Not meant for concurrent
/// mutation: callers serialize decisions per instance.
pub struct RegimeRiskManager {
    config: RiskManagerConfig,
    /// Read one step behind (second-to-last label)
    primary: Arc<dyn RegimePredictor>,
    /// Read at the latest observation (last label)
    secondary: Arc<dyn RegimePredictor>,
    /// Own belief about whether a position is open
    invested: bool,
}

impl RegimeRiskManager {
    /// Create a new risk manager with the literal flag policy
    pub fn new(primary: Arc<dyn RegimePredictor>, secondary: Arc<dyn RegimePredictor>) -> Self {
        Self::with_config(primary, secondary, RiskManagerConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        primary: Arc<dyn RegimePredictor>,
        secondary: Arc<dyn RegimePredictor>,
        config: RiskManagerConfig,
    ) -> Self {
        Self {
            config,
            primary,
            secondary,
            invested: false,
        }
    }

    pub fn is_invested(&self) -> bool {
        self.invested
    }

    pub fn flag_policy(&self) -> FlagPolicy {
        self.config.flag_policy
    }

    /// Current regime over the portfolio's full return history
    pub fn determine_regime(&self, portfolio: &dyn ReturnSource) -> Result<RegimeReading> {
        determine_regime(
            self.primary.as_ref(),
            self.secondary.as_ref(),
            portfolio.returns(),
        )
    }

    /// Invested flag after an order approved while invested
    fn after_close(&self, action: OrderAction) -> bool {
        match (self.config.flag_policy, action) {
            (FlagPolicy::Literal, OrderAction::Bot) => true,
            (FlagPolicy::Literal, OrderAction::Sld) => false,
            (FlagPolicy::ClearOnClose, _) => false,
        }
    }

    /// Evaluate a proposed order and update the invested flag
    ///
    /// On error nothing is approved and the flag is left unchanged.
    pub fn evaluate(
        &mut self,
        portfolio: &dyn ReturnSource,
        order: &OrderIntent,
    ) -> Result<Decision> {
        let reading = self.determine_regime(portfolio)?;
        let regime = reading.regime();
        let invested_before = self.invested;
        let action = order.action();

        let (branch, approve, invested_after) = match (regime, invested_before) {
            (Regime::Desirable, false) => (Branch::Open, true, action == OrderAction::Sld),
            (Regime::Desirable, true) => (Branch::Close, true, self.after_close(action)),
            (Regime::Undesirable, false) => (Branch::BadMarket, false, false),
            (Regime::Undesirable, true) => (Branch::ForcedClose, true, self.after_close(action)),
        };

        self.invested = invested_after;

        info!(
            "[RISK] Regime {} {:?}: {} ({} {})",
            regime.index(),
            reading.indices(),
            branch.describe(),
            if approve { "approved" } else { "suppressed" },
            order
        );
        debug!(
            "[RISK] invested {} -> {} (policy={:?})",
            invested_before, invested_after, self.config.flag_policy
        );

        Ok(Decision {
            reading,
            branch,
            invested_before,
            invested_after,
            approved: approve.then(|| order.clone()),
        })
    }
}

impl RiskManager for RegimeRiskManager {
    type Error = Error;

    fn name(&self) -> &str {
        "RegimeRiskManager"
    }

    fn refine_orders(
        &mut self,
        portfolio: &dyn ReturnSource,
        order: &OrderIntent,
    ) -> Result<Vec<OrderIntent>> {
        Ok(self.evaluate(portfolio, order)?.into_orders())
    }
}
