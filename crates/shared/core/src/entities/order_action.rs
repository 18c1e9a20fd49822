use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order action as emitted by the strategy layer
///
/// Whether an action opens or closes a position is not a property of the
/// action itself: the risk manager decides that from its invested flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderAction {
    /// Bought
    #[serde(rename = "BOT")]
    Bot,
    /// Sold
    #[serde(rename = "SLD")]
    Sld,
}

impl OrderAction {
    /// Wire code ("BOT" / "SLD")
    pub fn code(&self) -> &'static str {
        match self {
            OrderAction::Bot => "BOT",
            OrderAction::Sld => "SLD",
        }
    }
}

impl FromStr for OrderAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "BOT" => Ok(OrderAction::Bot),
            "SLD" => Ok(OrderAction::Sld),
            other => Err(CoreError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
