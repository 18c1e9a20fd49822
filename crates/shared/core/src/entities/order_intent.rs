use crate::entities::OrderAction;
use crate::error::{CoreError, CoreResult};
use crate::values::{Quantity, Ticker};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sized order proposed by the strategy layer
///
/// Immutable once created. Risk managers may only decide whether to emit it,
/// never change its ticker, action or quantity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOrderIntent")]
pub struct OrderIntent {
    ticker: Ticker,
    action: OrderAction,
    quantity: Quantity,
}

impl OrderIntent {
    /// Create a new order intent
    pub fn new(ticker: impl Into<Ticker>, action: OrderAction, quantity: Quantity) -> CoreResult<Self> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity);
        }

        Ok(Self {
            ticker: ticker.into(),
            action,
            quantity,
        })
    }

    /// Create from an action code ("BOT" / "SLD")
    pub fn parse(ticker: impl Into<Ticker>, action: &str, quantity: Quantity) -> CoreResult<Self> {
        Self::new(ticker, action.parse()?, quantity)
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn action(&self) -> OrderAction {
        self.action
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

impl fmt::Display for OrderIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.action, self.quantity, self.ticker)
    }
}

/// Unvalidated wire form, so deserialized intents go through `new`
#[derive(Deserialize)]
struct RawOrderIntent {
    ticker: Ticker,
    action: String,
    quantity: Quantity,
}

impl TryFrom<RawOrderIntent> for OrderIntent {
    type Error = CoreError;

    fn try_from(raw: RawOrderIntent) -> Result<Self, Self::Error> {
        OrderIntent::parse(raw.ticker, &raw.action, raw.quantity)
    }
}
