//! Regime Runner - backtest sessions over a regime-gated risk manager
//!
//! - **Config**: JSON runner configuration (risk policy, error policy, model paths)
//! - **Bootstrap**: Loads the two model artifacts and builds the risk manager
//! - **Session**: Feeds bars and proposed orders through one risk manager
//!
//! ## Architecture
//!
//! ```text
//!   runner.json ──► RunnerConfig ──► bootstrap ──► RegimeRiskManager
//!                                    (load HMMs)          │
//!                                                         ▼
//!   bars / orders ─────────────────────────────► BacktestSession
//!   (timestamp order)                              │ returns so far
//!                                                  │ refine_orders
//!                                                  ▼
//!                                            SessionReport
//! ```
//!
//! A session owns its risk manager, so parallel sessions (parameter sweeps,
//! gated vs ungated comparisons) never share an invested flag.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod session;

// Re-export main types
pub use bootstrap::load_regime_risk_manager;
pub use config::{ConfigError, ErrorPolicy, ModelPaths, RunnerConfig};
pub use error::{Error, Result};
pub use session::{BacktestSession, SessionEvent, SessionReport};
