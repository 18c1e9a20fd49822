//! Regime-Gated Risk Manager
//!
//! A stateful filter between a strategy's sized orders and execution. On
//! every proposed order it asks two independently fitted regime predictors
//! to label the full return history, combines their labels into a market
//! regime, and decides whether the order is emitted or suppressed.
//!
//! ## Architecture
//!
//! ```text
//! Strategy ──► OrderIntent ──► ┌──────────────────────────────────────┐
//!                              │        RegimeRiskManager             │
//!                              │                                      │
//!  Portfolio ──► returns ────► │  determine_regime                    │
//!                              │    predictor 1 ─► label[len-2]       │
//!                              │    predictor 2 ─► label[len-1]       │
//!                              │           │                          │
//!                              │           ▼                          │
//!                              │  regime × invested × action          │
//!                              │    ─► approve / suppress             │
//!                              │    ─► update invested flag           │
//!                              └──────────────┬───────────────────────┘
//!                                             │ 0 or 1 orders
//!                                             ▼
//!                                         Execution
//! ```
//!
//! ## Decision table
//!
//! | regime      | invested | BOT                      | SLD                       |
//! |-------------|----------|--------------------------|---------------------------|
//! | desirable   | false    | approve, stay flat       | approve, invested         |
//! | desirable   | true     | approve, stay invested*  | approve, flat             |
//! | undesirable | false    | suppress                 | suppress                  |
//! | undesirable | true     | approve, stay invested*  | approve, flat             |
//!
//! `*` Under [`FlagPolicy::ClearOnClose`] these branches clear the flag too.
//!
//! The invested flag is the manager's own belief, updated only by its own
//! decisions, and resets only when a new manager is constructed.

pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
pub mod manager;
pub mod pass_through;
pub mod regime;

// Re-export main types
pub use config::{FlagPolicy, RiskManagerConfig};
pub use error::{Error, Result};
pub use manager::{Branch, Decision, RegimeRiskManager};
pub use pass_through::PassThroughRiskManager;
pub use regime::{MIN_HISTORY, RegimeReading, determine_regime};
