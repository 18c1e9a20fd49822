use regime_core::ReturnSeries;

/// Port for read-only access to the return history of the current session
///
/// Implemented by whatever owns the price context (portfolio, price
/// handler). Consumers take a fresh snapshot on every call.
pub trait ReturnSource {
    /// All returns observed so far, oldest first
    fn returns(&self) -> &[f64];
}

impl ReturnSource for ReturnSeries {
    fn returns(&self) -> &[f64] {
        self.as_slice()
    }
}
