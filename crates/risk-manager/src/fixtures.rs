//! Deterministic regime predictors
//!
//! Stand-ins for fitted models so decision logic can be exercised without a
//! trained HMM. Used by this crate's tests and by downstream session tests.

use ndarray::ArrayView2;
use regime_ports::{PredictorResult, RegimePredictor};

/// Returns a fixed label sequence regardless of the input
///
/// The sequence is returned as-is, so a length that differs from the number
/// of rows is passed through to the caller.
#[derive(Debug, Clone)]
pub struct FixedLabels {
    labels: Vec<usize>,
}

impl FixedLabels {
    pub fn new(labels: Vec<usize>) -> Self {
        Self { labels }
    }
}

impl RegimePredictor for FixedLabels {
    fn predict(&self, _returns: ArrayView2<'_, f64>) -> PredictorResult<Vec<usize>> {
        Ok(self.labels.clone())
    }

    fn name(&self) -> &str {
        "FixedLabels"
    }
}

/// Labels every observation with the same state
#[derive(Debug, Clone, Copy)]
pub struct ConstantLabel(pub usize);

impl RegimePredictor for ConstantLabel {
    fn predict(&self, returns: ArrayView2<'_, f64>) -> PredictorResult<Vec<usize>> {
        Ok(vec![self.0; returns.nrows()])
    }

    fn name(&self) -> &str {
        "ConstantLabel"
    }
}

/// Labels an observation undesirable (1) when its absolute return exceeds a threshold
#[derive(Debug, Clone, Copy)]
pub struct VolatilityThreshold {
    pub threshold: f64,
}

impl RegimePredictor for VolatilityThreshold {
    fn predict(&self, returns: ArrayView2<'_, f64>) -> PredictorResult<Vec<usize>> {
        Ok(returns
            .column(0)
            .iter()
            .map(|r| usize::from(r.abs() > self.threshold))
            .collect())
    }

    fn name(&self) -> &str {
        "VolatilityThreshold"
    }
}
