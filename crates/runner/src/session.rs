//! Backtest Session
//!
//! Funnels every decision for one risk manager through a single ordered
//! sequence: bars extend the portfolio's return history, proposed orders are
//! refined against the history observed so far.

use crate::config::ErrorPolicy;
use crate::error::{Error, Result};
use log::{debug, info, warn};
use regime_core::{OrderIntent, ReturnSeries, TradeDate};
use regime_ports::RiskManager;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One step of a backtest, in timestamp order
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// End-of-day adjusted close for the traded asset
    Bar { date: TradeDate, adj_close: f64 },
    /// Sized order proposed by the strategy
    Order(OrderIntent),
}

/// Summary of a finished (or halted) session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    /// Bars consumed
    pub bars: usize,
    /// Orders proposed to the risk manager
    pub proposed: usize,
    /// Orders the risk manager let through, in order
    pub approved: Vec<OrderIntent>,
    /// Orders the risk manager dropped
    pub suppressed: usize,
    /// Orders skipped because the risk manager failed
    pub skipped: usize,
}

/// Drives one risk manager through a stream of bars and orders
pub struct BacktestSession<R: RiskManager> {
    id: Uuid,
    risk_manager: R,
    error_policy: ErrorPolicy,
    returns: ReturnSeries,
    last_close: Option<f64>,
    last_date: Option<TradeDate>,
    report: SessionReport,
}

impl<R: RiskManager> BacktestSession<R> {
    pub fn new(risk_manager: R, error_policy: ErrorPolicy) -> Self {
        let id = Uuid::new_v4();
        info!(
            "[SESSION] {} started with {} (on error: {:?})",
            id,
            risk_manager.name(),
            error_policy
        );

        Self {
            id,
            risk_manager,
            error_policy,
            returns: ReturnSeries::new(),
            last_close: None,
            last_date: None,
            report: SessionReport {
                session_id: id,
                ..SessionReport::default()
            },
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns observed so far
    pub fn returns(&self) -> &ReturnSeries {
        &self.returns
    }

    pub fn risk_manager(&self) -> &R {
        &self.risk_manager
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Apply one event
    pub fn process(&mut self, event: SessionEvent) -> Result<()> {
        match event {
            SessionEvent::Bar { date, adj_close } => self.on_bar(date, adj_close),
            SessionEvent::Order(order) => self.on_order(order),
        }
    }

    /// Apply every event in order and hand back the report
    pub fn run(mut self, events: impl IntoIterator<Item = SessionEvent>) -> Result<SessionReport> {
        for event in events {
            self.process(event)?;
        }

        info!(
            "[SESSION] {} finished: {} bars, {} proposed, {} approved, {} suppressed, {} skipped",
            self.id,
            self.report.bars,
            self.report.proposed,
            self.report.approved.len(),
            self.report.suppressed,
            self.report.skipped
        );
        Ok(self.report)
    }

    fn on_bar(&mut self, date: TradeDate, adj_close: f64) -> Result<()> {
        if let Some(previous) = self.last_date
            && date <= previous
        {
            return Err(Error::OutOfOrder { date, previous });
        }
        if !adj_close.is_finite() || adj_close <= 0.0 {
            return Err(Error::InvalidPrice { date, adj_close });
        }

        if let Some(previous) = self.last_close {
            self.returns.push(adj_close / previous - 1.0);
        }
        self.last_close = Some(adj_close);
        self.last_date = Some(date);
        self.report.bars += 1;
        Ok(())
    }

    fn on_order(&mut self, order: OrderIntent) -> Result<()> {
        self.report.proposed += 1;

        match self.risk_manager.refine_orders(&self.returns, &order) {
            Ok(orders) if orders.is_empty() => {
                debug!("[SESSION] {} suppressed", order);
                self.report.suppressed += 1;
            }
            Ok(orders) => self.report.approved.extend(orders),
            Err(e) => match self.error_policy {
                ErrorPolicy::Halt => {
                    return Err(Error::RiskManager {
                        manager: self.risk_manager.name().to_string(),
                        source: Box::new(e),
                    });
                }
                ErrorPolicy::Skip => {
                    warn!("[SESSION] skipping {}: {}", order, e);
                    self.report.skipped += 1;
                }
            },
        }

        Ok(())
    }
}
