//! Backtest session integration test
//!
//! Tests the full decision path:
//! 1. Bars extend the return history in timestamp order
//! 2. Proposed orders go through the risk manager against that history
//! 3. Gated and ungated sessions over the same events diverge only where
//!    the regime turns bad
//! 4. Model artifacts are loaded and validated at bootstrap

use regime_core::{OrderAction, OrderIntent, TradeDate};
use regime_hmm::ModelError;
use regime_ports::RiskManager;
use regime_risk_manager::fixtures::VolatilityThreshold;
use regime_risk_manager::{PassThroughRiskManager, RegimeRiskManager};
use regime_runner::{
    BacktestSession, Error, ErrorPolicy, ModelPaths, RunnerConfig, SessionEvent,
    load_regime_risk_manager,
};
use std::path::PathBuf;
use std::sync::Arc;

fn date(d: u32) -> TradeDate {
    TradeDate::from_ymd_opt(2021, 4, d).unwrap()
}

fn bar(d: u32, adj_close: f64) -> SessionEvent {
    SessionEvent::Bar {
        date: date(d),
        adj_close,
    }
}

fn order(action: OrderAction, quantity: u64) -> OrderIntent {
    OrderIntent::new("UPRO", action, quantity).unwrap()
}

fn gated() -> RegimeRiskManager {
    let predictor = VolatilityThreshold { threshold: 0.02 };
    RegimeRiskManager::new(Arc::new(predictor), Arc::new(predictor))
}

/// Calm market, open, crash, forced close, recovery
fn crash_and_recovery() -> Vec<SessionEvent> {
    vec![
        bar(5, 100.0),
        bar(6, 101.0),
        bar(7, 100.5),
        bar(8, 101.2),
        SessionEvent::Order(order(OrderAction::Sld, 1)),
        bar(9, 95.0),
        SessionEvent::Order(order(OrderAction::Sld, 2)),
        bar(12, 96.0),
        SessionEvent::Order(order(OrderAction::Bot, 3)),
        bar(13, 96.5),
        bar(14, 97.0),
        SessionEvent::Order(order(OrderAction::Bot, 4)),
    ]
}

#[test]
fn test_gated_session_suppresses_only_in_bad_regime() {
    let _ = env_logger::try_init();

    let mut session = BacktestSession::new(gated(), ErrorPolicy::Halt);
    for event in crash_and_recovery() {
        session.process(event).unwrap();
    }
    assert!(!session.risk_manager().is_invested());

    let report = session.report();
    assert_eq!(report.bars, 8);
    assert_eq!(report.proposed, 4);
    assert_eq!(report.suppressed, 1);
    assert_eq!(report.skipped, 0);

    let quantities: Vec<u64> = report.approved.iter().map(|o| o.quantity()).collect();
    assert_eq!(quantities, vec![1, 2, 4]);
}

#[test]
fn test_pass_through_session_approves_everything() {
    let report = BacktestSession::new(PassThroughRiskManager, ErrorPolicy::Halt)
        .run(crash_and_recovery())
        .unwrap();

    assert_eq!(report.proposed, 4);
    assert_eq!(report.approved.len(), 4);
    assert_eq!(report.suppressed, 0);
}

#[test]
fn test_halt_on_insufficient_history() {
    let _ = env_logger::try_init();

    let events = vec![
        bar(5, 100.0),
        bar(6, 101.0),
        SessionEvent::Order(order(OrderAction::Bot, 1)),
    ];
    let err = BacktestSession::new(gated(), ErrorPolicy::Halt)
        .run(events)
        .unwrap_err();

    match err {
        Error::RiskManager { manager, source } => {
            assert_eq!(manager, "RegimeRiskManager");
            let cause = source
                .downcast_ref::<regime_risk_manager::Error>()
                .unwrap();
            assert!(matches!(
                cause,
                regime_risk_manager::Error::InsufficientHistory {
                    required: 2,
                    available: 1
                }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_skip_on_insufficient_history() {
    let _ = env_logger::try_init();

    let events = vec![
        SessionEvent::Order(order(OrderAction::Bot, 1)),
        bar(5, 100.0),
        bar(6, 101.0),
        SessionEvent::Order(order(OrderAction::Bot, 2)),
        bar(7, 100.5),
        SessionEvent::Order(order(OrderAction::Bot, 3)),
    ];
    let report = BacktestSession::new(gated(), ErrorPolicy::Skip)
        .run(events)
        .unwrap();

    assert_eq!(report.proposed, 3);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.approved, vec![order(OrderAction::Bot, 3)]);
}

const CALM_ARTIFACT: &str = r#"{
    "start_prob": [0.7, 0.3],
    "trans_mat": [[0.98, 0.02], [0.05, 0.95]],
    "means": [0.0008, -0.0015],
    "variances": [0.00004, 0.0006]
}"#;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "regime-runner-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_bootstrap_from_config_file() {
    let _ = env_logger::try_init();

    let primary = write_temp("upro-model", CALM_ARTIFACT);
    let secondary = write_temp("voo-model", CALM_ARTIFACT);
    let config_path = write_temp(
        "config",
        &format!(
            r#"{{"error_policy": "skip", "models": {{"primary": {:?}, "secondary": {:?}}}}}"#,
            primary.display().to_string(),
            secondary.display().to_string()
        ),
    );

    let config = RunnerConfig::from_file(&config_path).unwrap();
    let rm = load_regime_risk_manager(&config);
    for path in [&primary, &secondary, &config_path] {
        std::fs::remove_file(path).ok();
    }
    let rm = rm.unwrap();
    assert_eq!(rm.name(), "RegimeRiskManager");
    assert!(!rm.is_invested());

    let events = vec![
        bar(5, 100.0),
        bar(6, 100.2),
        bar(7, 100.1),
        bar(8, 100.3),
        bar(9, 100.25),
        SessionEvent::Order(order(OrderAction::Bot, 10)),
        bar(12, 95.0),
        SessionEvent::Order(order(OrderAction::Bot, 20)),
    ];
    let report = BacktestSession::new(rm, config.error_policy)
        .run(events)
        .unwrap();

    assert_eq!(report.approved, vec![order(OrderAction::Bot, 10)]);
    assert_eq!(report.suppressed, 1);
}

#[test]
fn test_bootstrap_reports_missing_model() {
    let config = RunnerConfig::new(ModelPaths {
        primary: PathBuf::from("/nonexistent/upro.json"),
        secondary: PathBuf::from("/nonexistent/voo.json"),
    });

    match load_regime_risk_manager(&config) {
        Err(Error::Model { path, source }) => {
            assert_eq!(path, "/nonexistent/upro.json");
            assert!(matches!(source, ModelError::Io { .. }));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("missing model should fail to load"),
    }
}

#[test]
fn test_bootstrap_rejects_truncated_model() {
    let primary = write_temp("good-model", CALM_ARTIFACT);
    let secondary = write_temp("truncated-model", r#"{"start_prob": [0.5, 0.5"#);

    let config = RunnerConfig::new(ModelPaths {
        primary: primary.clone(),
        secondary: secondary.clone(),
    });
    let result = load_regime_risk_manager(&config);
    std::fs::remove_file(&primary).ok();
    std::fs::remove_file(&secondary).ok();

    assert!(matches!(
        result,
        Err(Error::Model {
            source: ModelError::Parse(_),
            ..
        })
    ));
}
