//! Two-step cointegration report over a date window

use crate::adf::{AdfResult, adf_test};
use crate::config::CointegrationConfig;
use crate::error::{Error, Result};
use crate::ols::ols;
use log::info;
use regime_core::{PriceHistory, TradeDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Regresses `y` on `x` and tests the residual spread for a unit root
#[derive(Debug, Clone, Default)]
pub struct CointegrationTest {
    config: CointegrationConfig,
}

impl CointegrationTest {
    pub fn new(config: CointegrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CointegrationConfig {
        &self.config
    }

    /// Test `x` (independent) against `y` (dependent) over `[start, end]`
    pub fn run(
        &self,
        x: &PriceHistory,
        y: &PriceHistory,
        start: TradeDate,
        end: TradeDate,
    ) -> Result<CointegrationReport> {
        let x_window = x.window(start, end);
        let y_window = y.window(start, end);

        for window in [&x_window, &y_window] {
            if window.is_empty() {
                return Err(Error::EmptyWindow {
                    ticker: window.ticker().to_string(),
                });
            }
        }

        if !x_window.is_aligned_with(&y_window) {
            return Err(Error::Misaligned {
                x: x_window.ticker().to_string(),
                y: y_window.ticker().to_string(),
                x_len: x_window.len(),
                y_len: y_window.len(),
            });
        }

        let x_closes = x_window.closes();
        let y_closes = y_window.closes();
        if x_closes.iter().chain(&y_closes).any(|p| !p.is_finite()) {
            return Err(Error::NonFinite("adjusted close"));
        }

        let fit = ols(&y_closes, &x_closes)?;
        let adf = adf_test(&fit.residuals, &self.config)?;

        let report = CointegrationReport {
            x: x_window.ticker().to_string(),
            y: y_window.ticker().to_string(),
            start,
            end,
            hedge_ratio: fit.slope,
            intercept: fit.intercept,
            significance: self.config.significance,
            adf,
        };

        info!(
            "[COINT] {} ~ {} [{} .. {}]: p={:.4} -> {}",
            report.y,
            report.x,
            start,
            end,
            report.adf.p_value,
            report.verdict()
        );

        Ok(report)
    }
}

/// Result of a cointegration test for one pair and window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CointegrationReport {
    /// Independent series
    pub x: String,
    /// Dependent series
    pub y: String,
    pub start: TradeDate,
    pub end: TradeDate,
    /// Slope of `y` on `x`
    pub hedge_ratio: f64,
    pub intercept: f64,
    pub significance: f64,
    /// ADF test on the regression residuals
    pub adf: AdfResult,
}

impl CointegrationReport {
    pub fn statistic(&self) -> f64 {
        self.adf.statistic
    }

    pub fn p_value(&self) -> f64 {
        self.adf.p_value
    }

    pub fn is_cointegrated(&self) -> bool {
        self.adf.p_value <= self.significance
    }

    fn verdict(&self) -> &'static str {
        if self.is_cointegrated() {
            "cointegrated"
        } else {
            "not cointegrated"
        }
    }
}

impl fmt::Display for CointegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ADF Statistic: {:.6}", self.adf.statistic)?;
        writeln!(f, "p-value: {:.6}", self.adf.p_value)?;
        writeln!(f, "Critical values:")?;
        for (level, value) in self.adf.critical_values.levels() {
            writeln!(f, "\t{}: {:.6}", level, value)?;
        }
        write!(f, "{} and {} are {}", self.x, self.y, self.verdict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mackinnon::CriticalValues;

    fn date(y: i32, m: u32, d: u32) -> TradeDate {
        TradeDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history(ticker: &str, days: &[u32], base: f64) -> PriceHistory {
        PriceHistory::from_points(
            ticker,
            days.iter()
                .map(|d| (date(2021, 4, *d), base + *d as f64 * 0.5)),
        )
    }

    fn report(p_value: f64) -> CointegrationReport {
        CointegrationReport {
            x: "UPRO".to_string(),
            y: "VOO".to_string(),
            start: date(2011, 4, 29),
            end: date(2021, 4, 30),
            hedge_ratio: 2.1,
            intercept: 14.0,
            significance: 0.05,
            adf: AdfResult {
                statistic: -3.1,
                p_value,
                critical_values: CriticalValues {
                    one_pct: -3.43,
                    five_pct: -2.86,
                    ten_pct: -2.57,
                },
                used_lag: 1,
                nobs: 2514,
                ic_best: Some(-120.0),
            },
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(report(0.05).is_cointegrated());
        assert!(report(0.01).is_cointegrated());
        assert!(!report(0.0500001).is_cointegrated());
    }

    #[test]
    fn test_display() {
        let text = report(0.0276).to_string();
        assert!(text.starts_with("ADF Statistic: -3.100000\np-value: 0.027600\n"));
        assert!(text.contains("\t5%: -2.860000"));
        assert!(text.ends_with("UPRO and VOO are cointegrated"));

        assert!(report(0.3).to_string().ends_with("are not cointegrated"));
    }

    #[test]
    fn test_empty_window_names_ticker() {
        let x = history("UPRO", &[26, 27, 28], 50.0);
        let y = history("VOO", &[29, 30], 380.0);

        let err = CointegrationTest::default()
            .run(&x, &y, date(2021, 4, 29), date(2021, 4, 30))
            .unwrap_err();
        assert_eq!(
            err,
            Error::EmptyWindow {
                ticker: "UPRO".to_string()
            }
        );
    }

    #[test]
    fn test_reversed_window_is_empty() {
        let x = history("UPRO", &[26, 27, 28], 50.0);
        let y = history("VOO", &[26, 27, 28], 380.0);

        let err = CointegrationTest::default()
            .run(&x, &y, date(2021, 4, 28), date(2021, 4, 26))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyWindow { .. }));
    }

    #[test]
    fn test_misaligned_dates() {
        let x = history("UPRO", &[26, 27, 28, 29], 50.0);
        let y = history("VOO", &[26, 28, 29, 30], 380.0);

        let err = CointegrationTest::default()
            .run(&x, &y, date(2021, 4, 26), date(2021, 4, 30))
            .unwrap_err();
        assert!(matches!(err, Error::Misaligned { x_len: 4, y_len: 4, .. }));
    }
}
