//! Regime determination
//!
//! Combines two predictors into one regime reading over the full return
//! history. Predictor 1 is read one step behind predictor 2: its
//! second-to-last label is paired with predictor 2's last label, matching
//! the lead/lag alignment of the series the two models were fitted on.

use crate::error::{Error, Result};
use ndarray::{ArrayView2, Axis, aview1};
use regime_core::{Regime, RegimeLabel};
use regime_ports::RegimePredictor;

/// Minimum number of returns before a regime can be read
pub const MIN_HISTORY: usize = 2;

/// Labels read from both predictors for one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeReading {
    /// Predictor 1, second-to-last observation
    pub label_1: RegimeLabel,
    /// Predictor 2, last observation
    pub label_2: RegimeLabel,
}

impl RegimeReading {
    /// Desirable only when both labels are desirable
    pub fn regime(&self) -> Regime {
        Regime::combine(self.label_1, self.label_2)
    }

    /// Raw state indices `(label_1, label_2)`
    pub fn indices(&self) -> (usize, usize) {
        (self.label_1.index(), self.label_2.index())
    }
}

/// Run both predictors over the full history and read the offset labels
///
/// Fails with [`Error::InsufficientHistory`] before querying either
/// predictor when fewer than [`MIN_HISTORY`] returns are available.
pub fn determine_regime(
    primary: &dyn RegimePredictor,
    secondary: &dyn RegimePredictor,
    returns: &[f64],
) -> Result<RegimeReading> {
    let n = returns.len();
    if n < MIN_HISTORY {
        return Err(Error::InsufficientHistory {
            required: MIN_HISTORY,
            available: n,
        });
    }

    // Single-column view over the whole history
    let matrix = aview1(returns).insert_axis(Axis(1));

    let label_1 = label_at(primary, matrix, n - 2)?;
    let label_2 = label_at(secondary, matrix, n - 1)?;

    Ok(RegimeReading { label_1, label_2 })
}

/// Predict over the whole matrix and take the label at `index`
fn label_at(
    predictor: &dyn RegimePredictor,
    matrix: ArrayView2<'_, f64>,
    index: usize,
) -> Result<RegimeLabel> {
    let labels = predictor
        .predict(matrix)
        .map_err(|source| Error::Predictor {
            predictor: predictor.name().to_string(),
            source,
        })?;

    let expected = matrix.nrows();
    if labels.len() != expected {
        return Err(Error::LabelCountMismatch {
            predictor: predictor.name().to_string(),
            expected,
            actual: labels.len(),
        });
    }

    Ok(RegimeLabel::try_from(labels[index])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ConstantLabel, FixedLabels};
    use regime_core::CoreError;

    #[test]
    fn test_reads_second_to_last_and_last() {
        let p1 = FixedLabels::new(vec![0, 0, 1, 0, 1]);
        let p2 = FixedLabels::new(vec![0, 1, 0, 1, 0]);
        let returns = [0.01, -0.02, 0.003, 0.004, -0.001];

        let reading = determine_regime(&p1, &p2, &returns).unwrap();
        assert_eq!(reading.indices(), (0, 0));
        assert_eq!(reading.regime(), Regime::Desirable);
    }

    #[test]
    fn test_offset_is_not_symmetric() {
        // Swapping the predictors reads different positions
        let p1 = FixedLabels::new(vec![0, 1, 0, 1, 0]);
        let p2 = FixedLabels::new(vec![0, 0, 1, 0, 1]);
        let returns = [0.0; 5];

        let reading = determine_regime(&p1, &p2, &returns).unwrap();
        assert_eq!(reading.indices(), (1, 1));
        assert_eq!(reading.regime(), Regime::Undesirable);
    }

    #[test]
    fn test_insufficient_history() {
        for returns in [&[][..], &[0.01][..]] {
            let err = determine_regime(&ConstantLabel(0), &ConstantLabel(0), returns).unwrap_err();
            assert!(matches!(
                err,
                Error::InsufficientHistory {
                    required: 2,
                    available
                } if available == returns.len()
            ));
        }
    }

    #[test]
    fn test_two_observations_is_enough() {
        let reading =
            determine_regime(&ConstantLabel(1), &ConstantLabel(0), &[0.01, 0.02]).unwrap();
        assert_eq!(reading.indices(), (1, 0));
    }

    #[test]
    fn test_short_label_vector_is_an_error() {
        let p1 = FixedLabels::new(vec![0, 0]);
        let err = determine_regime(&p1, &ConstantLabel(0), &[0.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            Error::LabelCountMismatch {
                expected: 4,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_label_outside_two_states() {
        let err = determine_regime(&ConstantLabel(0), &ConstantLabel(2), &[0.0; 3]).unwrap_err();
        assert!(matches!(err, Error::Core(CoreError::InvalidRegimeLabel(2))));
    }

    struct Unavailable;

    impl RegimePredictor for Unavailable {
        fn predict(&self, _returns: ArrayView2<'_, f64>) -> regime_ports::PredictorResult<Vec<usize>> {
            Err(regime_ports::PredictorError::Failed("model offline".to_string()))
        }

        fn name(&self) -> &str {
            "upro-hmm"
        }
    }

    #[test]
    fn test_predictor_failure_names_predictor() {
        let err = determine_regime(&ConstantLabel(0), &Unavailable, &[0.0; 3]).unwrap_err();
        match err {
            Error::Predictor { predictor, .. } => assert_eq!(predictor, "upro-hmm"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
