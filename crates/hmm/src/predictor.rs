//! `RegimePredictor` adapter over a frozen Gaussian HMM

use crate::error::{ModelError, Result};
use crate::model::GaussianHmm;
use ndarray::ArrayView2;
use regime_ports::{PredictorError, PredictorResult, RegimePredictor};
use std::path::Path;

/// Regime predictor backed by a fitted Gaussian HMM
#[derive(Debug, Clone)]
pub struct HmmRegimePredictor {
    name: String,
    model: GaussianHmm,
}

impl HmmRegimePredictor {
    /// Wrap a model of any state count
    pub fn new(name: impl Into<String>, model: GaussianHmm) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }

    /// Wrap a model that must have exactly two states (desirable / undesirable)
    pub fn two_state(name: impl Into<String>, model: GaussianHmm) -> Result<Self> {
        if model.n_states() != 2 {
            return Err(ModelError::StateCount {
                expected: 2,
                actual: model.n_states(),
            });
        }
        Ok(Self::new(name, model))
    }

    /// Load a two-state model artifact from disk
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let model = GaussianHmm::from_file(path)?;
        Self::two_state(name, model)
    }

    pub fn model(&self) -> &GaussianHmm {
        &self.model
    }
}

impl RegimePredictor for HmmRegimePredictor {
    fn predict(&self, returns: ArrayView2<'_, f64>) -> PredictorResult<Vec<usize>> {
        if returns.ncols() != 1 {
            return Err(PredictorError::ColumnMismatch {
                expected: 1,
                actual: returns.ncols(),
            });
        }
        if returns.nrows() == 0 {
            return Err(PredictorError::EmptyInput);
        }

        let observations: Vec<f64> = returns.column(0).to_vec();
        if observations.iter().any(|r| !r.is_finite()) {
            return Err(PredictorError::Failed(
                "return matrix contains non-finite values".to_string(),
            ));
        }

        Ok(self.model.decode(&observations))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
