//! Bootstrap - builds a regime-gated risk manager from configuration
//!
//! Model artifacts are read and validated here, once, before any session
//! starts. A bad artifact is a startup failure, never a decision-time one.

use crate::config::RunnerConfig;
use crate::error::{Error, Result};
use log::info;
use regime_hmm::HmmRegimePredictor;
use regime_risk_manager::RegimeRiskManager;
use std::path::Path;
use std::sync::Arc;

/// Predictor named after its artifact's file stem
fn load_predictor(path: &Path) -> Result<HmmRegimePredictor> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    HmmRegimePredictor::from_file(name, path).map_err(|source| Error::Model {
        path: path.display().to_string(),
        source,
    })
}

/// Load both model artifacts and wire them into a fresh risk manager
pub fn load_regime_risk_manager(config: &RunnerConfig) -> Result<RegimeRiskManager> {
    let primary = load_predictor(&config.models.primary)?;
    let secondary = load_predictor(&config.models.secondary)?;

    info!(
        "[SESSION] Loaded regime models primary={} secondary={} (policy={:?})",
        config.models.primary.display(),
        config.models.secondary.display(),
        config.risk.flag_policy
    );

    Ok(RegimeRiskManager::with_config(
        Arc::new(primary),
        Arc::new(secondary),
        config.risk.clone(),
    ))
}
