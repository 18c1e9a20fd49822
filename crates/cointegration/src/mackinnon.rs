//! MacKinnon response-surface approximations for the Dickey-Fuller
//! distribution, constant-only regression with a single variable.
//!
//! p-values follow MacKinnon (1994), critical values MacKinnon (2010).

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Above this statistic the p-value is 1
const TAU_MAX: f64 = 2.74;
/// Below this statistic the p-value is 0
const TAU_MIN: f64 = -18.83;
/// Switch point between the small-p and large-p polynomials
const TAU_STAR: f64 = -1.61;

const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

/// Rows are 1%, 5%, 10%; columns multiply `1, 1/n, 1/n², 1/n³`
const TAU_CRIT: [[f64; 4]; 3] = [
    [-3.43035, -6.5393, -16.786, -79.433],
    [-2.86154, -2.8903, -4.234, -40.04],
    [-2.56677, -1.5384, -2.809, 0.0],
];

/// Critical values of the test statistic at the usual levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    pub one_pct: f64,
    pub five_pct: f64,
    pub ten_pct: f64,
}

impl CriticalValues {
    /// `(label, value)` pairs in increasing significance
    pub fn levels(&self) -> [(&'static str, f64); 3] {
        [("1%", self.one_pct), ("5%", self.five_pct), ("10%", self.ten_pct)]
    }
}

/// Evaluate `c0 + c1·x + c2·x² + ...`
fn polyval(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Approximate p-value of an ADF statistic
pub fn p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }

    let coefs: &[f64] = if statistic <= TAU_STAR {
        &TAU_SMALL_P
    } else {
        &TAU_LARGE_P
    };
    standard_normal_cdf(polyval(coefs, statistic))
}

/// Finite-sample critical values for a regression on `nobs` observations
pub fn critical_values(nobs: usize) -> CriticalValues {
    let inv = 1.0 / nobs as f64;
    let [one_pct, five_pct, ten_pct] = TAU_CRIT.map(|row| polyval(&row, inv));
    CriticalValues {
        one_pct,
        five_pct,
        ten_pct,
    }
}
