use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Hidden state label produced by one regime predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegimeLabel {
    /// State 0
    Desirable,
    /// State 1
    Undesirable,
}

impl RegimeLabel {
    /// Raw state index
    pub fn index(&self) -> usize {
        match self {
            RegimeLabel::Desirable => 0,
            RegimeLabel::Undesirable => 1,
        }
    }
}

impl TryFrom<usize> for RegimeLabel {
    type Error = CoreError;

    fn try_from(state: usize) -> Result<Self, Self::Error> {
        match state {
            0 => Ok(RegimeLabel::Desirable),
            1 => Ok(RegimeLabel::Undesirable),
            other => Err(CoreError::InvalidRegimeLabel(other)),
        }
    }
}

/// Combined market regime across both predictors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    Desirable,
    Undesirable,
}

impl Regime {
    /// Desirable only when both labels are desirable
    pub fn combine(first: RegimeLabel, second: RegimeLabel) -> Self {
        match (first, second) {
            (RegimeLabel::Desirable, RegimeLabel::Desirable) => Regime::Desirable,
            _ => Regime::Undesirable,
        }
    }

    pub fn is_desirable(&self) -> bool {
        matches!(self, Regime::Desirable)
    }

    /// Numeric regime as used in diagnostics ("Regime 0" / "Regime 1")
    pub fn index(&self) -> usize {
        match self {
            Regime::Desirable => 0,
            Regime::Undesirable => 1,
        }
    }
}
