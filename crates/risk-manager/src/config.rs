//! Risk manager configuration

use serde::{Deserialize, Serialize};

/// How approved orders update the invested flag while already invested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagPolicy {
    /// Decision table as written: a BOT approved while invested leaves the
    /// flag set, in either regime
    #[default]
    Literal,
    /// Every order approved while invested is a close and clears the flag
    ClearOnClose,
}

/// Configuration for the regime-gated risk manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskManagerConfig {
    /// Invested-flag transition policy
    #[serde(default)]
    pub flag_policy: FlagPolicy,
}

impl RiskManagerConfig {
    pub fn with_flag_policy(flag_policy: FlagPolicy) -> Self {
        Self { flag_policy }
    }
}
