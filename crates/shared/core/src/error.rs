use thiserror::Error;

/// Validation errors for core domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid order action: {0:?} (expected BOT or SLD)")]
    InvalidAction(String),

    #[error("Order quantity must be positive")]
    InvalidQuantity,

    #[error("Invalid regime label: {0} (expected 0 or 1)")]
    InvalidRegimeLabel(usize),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
