use crate::error::PredictorResult;
use ndarray::ArrayView2;

/// Port for regime classification
///
/// A predictor is fitted once, offline, and then only ever asked to label
/// series. Implementations:
/// - A frozen Gaussian HMM loaded from a model artifact
/// - Fixed label sequences for deterministic tests
pub trait RegimePredictor: Send + Sync {
    /// Most likely hidden state for every row of `returns`
    ///
    /// `returns` is a single-column matrix holding the full return history.
    /// Must produce exactly one label per row and be deterministic for a
    /// fixed model.
    fn predict(&self, returns: ArrayView2<'_, f64>) -> PredictorResult<Vec<usize>>;

    /// Get the predictor's name/identifier for debugging
    fn name(&self) -> &str {
        "RegimePredictor"
    }
}
