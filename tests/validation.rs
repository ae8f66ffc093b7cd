//! Precondition checks shared by every indicator.
//!
//! Run with: cargo test --test validation

mod common;

use common::{bars, facade, RecordingEngine};
use proptest::prelude::*;
use talib_facade::{Error, MaType, Tai};

fn message(err: Error) -> String {
    match err {
        Error::InvalidParameter(msg) => msg,
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_empty_prices_rejected() {
    let tai = facade();
    assert_eq!(message(tai.sma(&[], 5).unwrap_err()), "Prices array cannot be empty");
    assert!(matches!(tai.ht_dcperiod(&[]), Err(Error::InvalidParameter(_))));
    assert!(matches!(tai.obv(&[1.0], &[]), Err(Error::InvalidParameter(_))));
    assert_eq!(tai.engine().call_count(), 0);
}

#[test]
fn test_non_positive_period_rejected() {
    let tai = facade();
    let prices = [1.0, 2.0, 3.0];
    assert_eq!(message(tai.rsi(&prices, 0).unwrap_err()), "Period must be positive");
    assert_eq!(message(tai.ema(&prices, -3).unwrap_err()), "Period must be positive");
    assert_eq!(tai.engine().call_count(), 0);
}

#[test]
fn test_period_longer_than_data_rejected() {
    let tai = facade();
    let prices = [1.0, 2.0, 3.0];
    assert_eq!(
        message(tai.sma(&prices, 10).unwrap_err()),
        "Period (10) cannot exceed data size (3)"
    );
}

#[test]
fn test_period_equal_to_data_accepted() {
    let tai = facade();
    let prices = [1.0, 2.0, 3.0];
    assert!(tai.sma(&prices, 3).is_ok());
    assert_eq!(tai.engine().call_count(), 1);
}

#[test]
fn test_every_period_argument_is_checked() {
    let tai = facade();
    let b = bars(30);
    assert!(tai.macd(&b.close, 12, 26, 9).is_ok());
    assert!(tai.macd(&b.close, 12, 31, 9).is_err());
    assert!(tai.macd(&b.close, 12, 26, 0).is_err());
    assert!(tai.stoch(&b.high, &b.low, &b.close, 5, 3, 0).is_err());
    assert!(tai
        .ultosc(&b.high, &b.low, &b.close, 7, 14, 40)
        .is_err());
    assert!(tai.adosc(&b.high, &b.low, &b.close, &b.volume, 3, 0).is_err());
    assert!(tai.ppo(&b.close, 12, 26, MaType::Ema).is_ok());
}

#[test]
fn test_period_checked_against_shortest_series() {
    let tai = facade();
    let long = [1.0; 20];
    let short = [1.0; 5];
    assert!(tai.atr(&long, &long, &short, 5).is_ok());
    assert!(tai.atr(&long, &long, &short, 6).is_err());
    assert!(tai.correl(&long, &short, 6).is_err());
}

#[test]
fn test_unavailable_checked_before_validation() {
    let tai = Tai::with_engine(RecordingEngine::unavailable());
    assert!(matches!(tai.sma(&[], 0), Err(Error::NotInstalled)));
    assert!(matches!(
        tai.cdl_doji(&[], &[], &[], &[]),
        Err(Error::NotInstalled)
    ));
    assert_eq!(tai.engine().call_count(), 0);
}

#[test]
fn test_not_installed_message_has_install_hint() {
    let tai = Tai::with_engine(RecordingEngine::unavailable());
    let err = tai.rsi(&[1.0, 2.0], 1).unwrap_err();
    assert!(err.to_string().contains("https://ta-lib.org/"));
}

#[test]
fn test_parameterless_indicators_only_check_series() {
    let tai = facade();
    let b = bars(3);
    assert!(tai.trange(&b.high, &b.low, &b.close).is_ok());
    assert!(tai.bop(&b.open, &b.high, &b.low, &b.close).is_ok());
    assert!(tai.cdl_engulfing(&b.open, &b.high, &b.low, &b.close).is_ok());
}

proptest! {
    #[test]
    fn prop_valid_periods_forward(len in 1usize..200, pick in 0.0f64..1.0) {
        let period = 1 + ((len - 1) as f64 * pick) as i32;
        let tai = facade();
        let prices = vec![1.0; len];
        let out = tai.sma(&prices, period).unwrap();
        prop_assert_eq!(out.len(), len);
        prop_assert_eq!(tai.engine().call_count(), 1);
    }

    #[test]
    fn prop_oversized_periods_rejected(len in 1usize..200, extra in 1i32..100) {
        let tai = facade();
        let prices = vec![1.0; len];
        let period = len as i32 + extra;
        prop_assert!(matches!(tai.wma(&prices, period), Err(Error::InvalidParameter(_))));
        prop_assert_eq!(tai.engine().call_count(), 0);
    }

    #[test]
    fn prop_non_positive_periods_rejected(len in 1usize..50, period in -1000i32..=0) {
        let tai = facade();
        let prices = vec![1.0; len];
        prop_assert!(matches!(tai.cmo(&prices, period), Err(Error::InvalidParameter(_))));
    }
}
