//! Ordinary least squares
//!
//! Solved through the normal equations `β = (X'X)⁻¹ X'y`. The inverse is
//! kept so coefficient standard errors come for free.

use crate::error::{Error, Result};
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;

/// Simple regression `y = intercept + slope · x`
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub intercept: f64,
    pub slope: f64,
    /// `y - ŷ`, in input order
    pub residuals: Vec<f64>,
}

/// Regress `y` on `x` with an intercept
pub fn ols(y: &[f64], x: &[f64]) -> Result<OlsFit> {
    if y.len() != x.len() {
        return Err(Error::Misaligned {
            x: "x".to_string(),
            y: "y".to_string(),
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let n = y.len();
    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
    let target = DVector::from_column_slice(y);

    let fit = Regression::fit(&design, &target)?;

    Ok(OlsFit {
        intercept: fit.params[0],
        slope: fit.params[1],
        residuals: fit.residuals.iter().copied().collect(),
    })
}

/// Multiple regression with the statistics the ADF test needs
#[derive(Debug, Clone)]
pub(crate) struct Regression {
    pub params: DVector<f64>,
    pub std_errors: DVector<f64>,
    pub residuals: DVector<f64>,
    /// Sum of squared residuals
    pub ssr: f64,
    pub nobs: usize,
}

impl Regression {
    /// Fit `y = X β + ε`; needs more rows than regressors
    pub fn fit(design: &DMatrix<f64>, y: &DVector<f64>) -> Result<Self> {
        let (nobs, k) = design.shape();
        if nobs <= k {
            return Err(Error::InsufficientObservations {
                required: k + 1,
                available: nobs,
            });
        }

        let xtx = design.transpose() * design;
        let xtx_inv = xtx.try_inverse().ok_or(Error::SingularDesign)?;
        let params = &xtx_inv * (design.transpose() * y);

        let residuals = y - design * &params;
        let ssr = residuals.norm_squared();
        let sigma2 = ssr / (nobs - k) as f64;
        let std_errors = DVector::from_fn(k, |j, _| (sigma2 * xtx_inv[(j, j)]).sqrt());

        Ok(Self {
            params,
            std_errors,
            residuals,
            ssr,
            nobs,
        })
    }

    pub fn n_params(&self) -> usize {
        self.params.len()
    }

    /// t statistic of coefficient `j`
    pub fn t_value(&self, j: usize) -> f64 {
        self.params[j] / self.std_errors[j]
    }

    /// Gaussian log-likelihood at the ML variance estimate
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -n / 2.0 * ((2.0 * PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.n_params() as f64
    }

    pub fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood() + (self.nobs as f64).ln() * self.n_params() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 + 0.5 * v).collect();

        let fit = ols(&y, &x).unwrap();
        assert_relative_eq!(fit.intercept, 3.0, epsilon = 1e-9);
        assert_relative_eq!(fit.slope, 0.5, epsilon = 1e-9);
        assert!(fit.residuals.iter().all(|r| r.abs() < 1e-9));
    }

    #[test]
    fn test_residuals_sum_to_zero() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 5.0, 4.0];

        let fit = ols(&y, &x).unwrap();
        assert_relative_eq!(fit.slope, 0.7, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.residuals.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_regressor_is_singular() {
        let x = [2.0; 6];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(ols(&y, &x), Err(Error::SingularDesign));
    }

    #[test]
    fn test_length_mismatch() {
        let err = ols(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::Misaligned { x_len: 2, y_len: 3, .. }));
    }

    #[test]
    fn test_too_few_rows() {
        let err = ols(&[1.0, 2.0], &[1.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientObservations {
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_standard_errors() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 5.0, 4.0];
        let design = DMatrix::from_fn(4, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
        let fit = Regression::fit(&design, &DVector::from_column_slice(&y)).unwrap();

        // residuals: -0.7, 0.6, 0.9, -0.8 → ssr = 2.3, sigma² = 1.15
        assert_relative_eq!(fit.ssr, 2.3, epsilon = 1e-9);
        // Var(slope) = sigma² / Σ(x - x̄)² = 1.15 / 5
        assert_relative_eq!(fit.std_errors[1], 0.23f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(fit.t_value(1), 0.7 / 0.23f64.sqrt(), epsilon = 1e-9);
    }
}
