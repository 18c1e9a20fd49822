use serde::{Deserialize, Serialize};

/// Running sequence of percentage returns for one asset
///
/// Append-only: grows by one element per trading period and is never
/// rewritten. Readers always see the full history observed so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    values: Vec<f64>,
}

impl ReturnSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage returns of a price path; the first price has no return
    pub fn from_prices(prices: &[f64]) -> Self {
        let values = prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
        Self { values }
    }

    /// Append the return for the latest period
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for ReturnSeries {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}
