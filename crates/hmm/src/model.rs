//! Frozen Gaussian HMM parameters

use crate::algorithms::{forward_log_likelihood, viterbi};
use crate::error::{ModelError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// Tolerance for probability rows summing to one
const STOCHASTIC_TOL: f64 = 1e-6;

/// Gaussian hidden Markov model over a single feature (daily returns)
///
/// Parameters are frozen: the model is fitted elsewhere and only used for
/// decoding here. With one feature the "full" covariance of each state is a
/// single variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelArtifact", into = "ModelArtifact")]
pub struct GaussianHmm {
    /// Initial state probabilities
    start_prob: Array1<f64>,
    /// State transition matrix (rows sum to 1)
    trans_mat: Array2<f64>,
    /// Emission mean per state
    means: Array1<f64>,
    /// Emission variance per state
    variances: Array1<f64>,
}

/// On-disk layout of a fitted model
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    start_prob: Vec<f64>,
    trans_mat: Vec<Vec<f64>>,
    means: Vec<f64>,
    variances: Vec<f64>,
}

impl GaussianHmm {
    /// Create a model from fitted parameters, validating them
    pub fn new(
        start_prob: Vec<f64>,
        trans_mat: Vec<Vec<f64>>,
        means: Vec<f64>,
        variances: Vec<f64>,
    ) -> Result<Self> {
        Self::try_from(ModelArtifact {
            start_prob,
            trans_mat,
            means,
            variances,
        })
    }

    /// Load a model artifact from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let model = Self::from_json(&content)?;
        log::debug!(
            "[HMM] Loaded {}-state model from {}: means={:?}, variances={:?}",
            model.n_states(),
            path.display(),
            model.means.to_vec(),
            model.variances.to_vec()
        );
        Ok(model)
    }

    /// Parse a model artifact from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::try_from(artifact)
    }

    /// Serialize to the artifact JSON layout
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of hidden states
    pub fn n_states(&self) -> usize {
        self.start_prob.len()
    }

    pub fn start_prob(&self) -> &Array1<f64> {
        &self.start_prob
    }

    pub fn transition_matrix(&self) -> &Array2<f64> {
        &self.trans_mat
    }

    pub fn means(&self) -> &Array1<f64> {
        &self.means
    }

    pub fn variances(&self) -> &Array1<f64> {
        &self.variances
    }

    /// Log density of `x` under the emission distribution of `state`
    pub fn log_emission(&self, state: usize, x: f64) -> f64 {
        let var = self.variances[state];
        let diff = x - self.means[state];
        -0.5 * ((2.0 * PI * var).ln() + diff * diff / var)
    }

    /// Most likely state sequence (Viterbi)
    pub fn decode(&self, observations: &[f64]) -> Vec<usize> {
        let (path, _) = viterbi(
            observations,
            &self.start_prob,
            &self.trans_mat,
            |state, x| self.log_emission(state, x),
        );
        path
    }

    /// Log-likelihood of the observations under the model
    pub fn score(&self, observations: &[f64]) -> f64 {
        forward_log_likelihood(
            observations,
            &self.start_prob,
            &self.trans_mat,
            |state, x| self.log_emission(state, x),
        )
    }
}

fn check_distribution(name: &str, probs: &[f64]) -> Result<()> {
    if probs.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(ModelError::Malformed(format!(
            "{name} contains negative or non-finite probabilities"
        )));
    }

    let sum: f64 = probs.iter().sum();
    if (sum - 1.0).abs() > STOCHASTIC_TOL {
        return Err(ModelError::Malformed(format!(
            "{name} sums to {sum}, expected 1"
        )));
    }

    Ok(())
}

impl TryFrom<ModelArtifact> for GaussianHmm {
    type Error = ModelError;

    fn try_from(artifact: ModelArtifact) -> Result<Self> {
        let n = artifact.start_prob.len();
        if n == 0 {
            return Err(ModelError::Malformed("model has no states".to_string()));
        }

        check_distribution("start_prob", &artifact.start_prob)?;

        if artifact.trans_mat.len() != n {
            return Err(ModelError::Malformed(format!(
                "trans_mat has {} rows, expected {n}",
                artifact.trans_mat.len()
            )));
        }
        for (i, row) in artifact.trans_mat.iter().enumerate() {
            if row.len() != n {
                return Err(ModelError::Malformed(format!(
                    "trans_mat row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            check_distribution(&format!("trans_mat row {i}"), row)?;
        }

        if artifact.means.len() != n || artifact.variances.len() != n {
            return Err(ModelError::Malformed(format!(
                "expected {n} means and variances, got {} and {}",
                artifact.means.len(),
                artifact.variances.len()
            )));
        }
        if artifact.means.iter().any(|m| !m.is_finite()) {
            return Err(ModelError::Malformed("means must be finite".to_string()));
        }
        if artifact.variances.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ModelError::Malformed(
                "variances must be finite and positive".to_string(),
            ));
        }

        let trans_mat = Array2::from_shape_fn((n, n), |(i, j)| artifact.trans_mat[i][j]);

        Ok(Self {
            start_prob: Array1::from_vec(artifact.start_prob),
            trans_mat,
            means: Array1::from_vec(artifact.means),
            variances: Array1::from_vec(artifact.variances),
        })
    }
}

impl From<GaussianHmm> for ModelArtifact {
    fn from(model: GaussianHmm) -> Self {
        Self {
            start_prob: model.start_prob.to_vec(),
            trans_mat: model.trans_mat.rows().into_iter().map(|r| r.to_vec()).collect(),
            means: model.means.to_vec(),
            variances: model.variances.to_vec(),
        }
    }
}
