//! Augmented Dickey-Fuller unit-root test
//!
//! Regression with a constant:
//!
//! ```text
//! Δy_t = α + γ·y_{t-1} + Σ_{i=1..p} δ_i·Δy_{t-i} + ε_t
//! ```
//!
//! The statistic is the t value of `γ`. With automatic lag selection every
//! candidate `p` in `0..=maxlag` is fitted on the same sample (the one the
//! largest lag allows), the best information criterion wins, and the chosen
//! lag is refitted on its own full sample.

use crate::config::{AutoLag, CointegrationConfig};
use crate::error::{Error, Result};
use crate::mackinnon::{self, CriticalValues};
use crate::ols::Regression;
use log::debug;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Outcome of one ADF test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfResult {
    /// t value of the lagged level coefficient
    pub statistic: f64,
    pub p_value: f64,
    pub critical_values: CriticalValues,
    /// Number of lagged differences in the final regression
    pub used_lag: usize,
    /// Observations in the final regression
    pub nobs: usize,
    /// Winning information criterion, when the lag was selected automatically
    pub ic_best: Option<f64>,
}

/// Largest lag the sample supports, or `None` when it is too short for any
fn lag_limit(n: usize) -> Option<usize> {
    (n / 2).checked_sub(2)
}

/// Default upper bound on lags: `ceil(12 · (n/100)^¼)`, capped by the sample
fn default_max_lag(n: usize, limit: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    schwert.min(limit)
}

/// Design for `lags` augmentation terms on rows `skip..` of the differences
///
/// Columns: lagged level, `lags` lagged differences, constant.
fn lagged_design(
    series: &[f64],
    diff: &[f64],
    lags: usize,
    skip: usize,
) -> (DMatrix<f64>, DVector<f64>) {
    let rows = diff.len() - skip;
    let cols = lags + 2;

    let design = DMatrix::from_fn(rows, cols, |r, c| {
        let t = skip + r;
        match c {
            0 => series[t],
            c if c <= lags => diff[t - c],
            _ => 1.0,
        }
    });
    let target = DVector::from_fn(rows, |r, _| diff[skip + r]);

    (design, target)
}

/// Run the ADF test on `series`
pub fn adf_test(series: &[f64], config: &CointegrationConfig) -> Result<AdfResult> {
    if series.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFinite("series"));
    }

    let n = series.len();
    let limit = lag_limit(n).ok_or(Error::InsufficientObservations {
        required: 4,
        available: n,
    })?;

    let max_lag = match config.max_lag {
        Some(lag) if lag > limit => {
            return Err(Error::InsufficientObservations {
                required: 2 * (lag + 2),
                available: n,
            });
        }
        Some(lag) => lag,
        None => default_max_lag(n, limit),
    };

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();

    let (used_lag, ic_best) = match config.autolag {
        AutoLag::Fixed => (max_lag, None),
        AutoLag::Aic | AutoLag::Bic => {
            let (lag, ic) = select_lag(series, &diff, max_lag, config.autolag)?;
            (lag, Some(ic))
        }
    };

    let (design, target) = lagged_design(series, &diff, used_lag, used_lag);
    let fit = Regression::fit(&design, &target)?;

    let statistic = fit.t_value(0);
    if !statistic.is_finite() {
        return Err(Error::NonFinite("adf statistic"));
    }

    debug!(
        "[COINT] ADF stat={:.4} lag={} (max {}) nobs={}",
        statistic, used_lag, max_lag, fit.nobs
    );

    Ok(AdfResult {
        statistic,
        p_value: mackinnon::p_value(statistic),
        critical_values: mackinnon::critical_values(fit.nobs),
        used_lag,
        nobs: fit.nobs,
        ic_best,
    })
}

/// Pick the lag with the lowest criterion on the common sample; ties go to
/// the shorter lag
fn select_lag(
    series: &[f64],
    diff: &[f64],
    max_lag: usize,
    method: AutoLag,
) -> Result<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for lag in 0..=max_lag {
        let (design, target) = lagged_design(series, diff, lag, max_lag);
        let fit = Regression::fit(&design, &target)?;
        let ic = match method {
            AutoLag::Bic => fit.bic(),
            _ => fit.aic(),
        };

        if best.is_none_or(|(_, current)| ic < current) {
            best = Some((lag, ic));
        }
    }

    best.ok_or(Error::NonFinite("information criterion"))
}
