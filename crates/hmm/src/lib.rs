//! Regime HMM
//!
//! The online half of the regime detector. A Gaussian hidden Markov model is
//! fitted offline (outside this workspace) and persisted as a JSON model
//! artifact; this crate loads the frozen parameters, validates them, and
//! labels return series with their most likely hidden states.
//!
//! ## Lifecycle
//!
//! ```text
//!  offline fit ──► model artifact (JSON) ──► GaussianHmm::from_file
//!                                                   │ validate (load-time errors)
//!                                                   ▼
//!                                           HmmRegimePredictor
//!                                                   │ predict (Viterbi)
//!                                                   ▼
//!                                          one label per return
//! ```
//!
//! Training failure modes (non-convergence, degenerate covariance) never
//! reach the decision path: a predictor only exists once its artifact has
//! passed validation.

pub mod algorithms;
pub mod error;
pub mod model;
pub mod predictor;

pub use error::{ModelError, Result};
pub use model::GaussianHmm;
pub use predictor::HmmRegimePredictor;
