use crate::series::ReturnSeries;
use crate::values::{Ticker, TradeDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily adjusted-close history for one ticker, keyed by trading date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    ticker: Ticker,
    closes: BTreeMap<TradeDate, f64>,
}

impl PriceHistory {
    pub fn new(ticker: impl Into<Ticker>) -> Self {
        Self {
            ticker: ticker.into(),
            closes: BTreeMap::new(),
        }
    }

    /// Build from (date, adjusted close) points; later duplicates win
    pub fn from_points(
        ticker: impl Into<Ticker>,
        points: impl IntoIterator<Item = (TradeDate, f64)>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            closes: points.into_iter().collect(),
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn insert(&mut self, date: TradeDate, adj_close: f64) {
        self.closes.insert(date, adj_close);
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Sub-history with both bounds inclusive
    pub fn window(&self, start: TradeDate, end: TradeDate) -> PriceHistory {
        let closes = if start <= end {
            self.closes
                .range(start..=end)
                .map(|(d, p)| (*d, *p))
                .collect()
        } else {
            BTreeMap::new()
        };

        PriceHistory {
            ticker: self.ticker.clone(),
            closes,
        }
    }

    /// Dates in ascending order
    pub fn dates(&self) -> impl Iterator<Item = &TradeDate> {
        self.closes.keys()
    }

    /// Adjusted closes in date order
    pub fn closes(&self) -> Vec<f64> {
        self.closes.values().copied().collect()
    }

    pub fn first_date(&self) -> Option<TradeDate> {
        self.closes.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<TradeDate> {
        self.closes.keys().next_back().copied()
    }

    /// Percentage returns of the adjusted close
    pub fn returns(&self) -> ReturnSeries {
        ReturnSeries::from_prices(&self.closes())
    }

    /// True when both histories cover exactly the same dates
    pub fn is_aligned_with(&self, other: &PriceHistory) -> bool {
        self.closes.len() == other.closes.len() && self.closes.keys().eq(other.closes.keys())
    }
}
