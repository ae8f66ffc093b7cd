//! Public name → native symbol and public parameter → native parameter
//! mapping, observed through the recording engine.

mod common;

use common::{bars, facade, RecordedCall, RecordingEngine};
use talib_facade::compute::COMPUTABLE;
use talib_facade::{Error, MaType, OptValue, Params, SeriesSet, Tai};

fn int(call: &RecordedCall, name: &str) -> i32 {
    match call.option(name) {
        Some(OptValue::Integer(v)) => v,
        other => panic!("{}: option {name} was {other:?}", call.function),
    }
}

fn real(call: &RecordedCall, name: &str) -> f64 {
    match call.option(name) {
        Some(OptValue::Real(v)) => v,
        other => panic!("{}: option {name} was {other:?}", call.function),
    }
}

#[test]
fn test_moving_averages_forward_time_period() {
    let tai = facade();
    let b = bars(50);
    type Run = fn(&Tai<RecordingEngine>, &[f64]) -> talib_facade::Result<Vec<f64>>;
    let cases: [(&str, Run); 7] = [
        ("SMA", |t, p| t.sma(p, 10)),
        ("EMA", |t, p| t.ema(p, 10)),
        ("WMA", |t, p| t.wma(p, 10)),
        ("DEMA", |t, p| t.dema(p, 10)),
        ("TEMA", |t, p| t.tema(p, 10)),
        ("TRIMA", |t, p| t.trima(p, 10)),
        ("KAMA", |t, p| t.kama(p, 10)),
    ];
    for (symbol, run) in cases {
        run(&tai, &b.close).unwrap();
        let call = tai.engine().last_call();
        assert_eq!(call.function, symbol);
        assert_eq!(call.input_names(), vec!["real"]);
        assert_eq!(int(&call, "optInTimePeriod"), 10);
    }
}

#[test]
fn test_ma_forwards_type_code() {
    let tai = facade();
    let b = bars(50);
    tai.ma(&b.close, 10, MaType::Kama).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "MA");
    assert_eq!(int(&call, "optInMAType"), 6);
}

#[test]
fn test_bbands_forwards_deviations() {
    let tai = facade();
    let b = bars(50);
    tai.bbands(&b.close, 20, 2.5, 1.5).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "BBANDS");
    assert_eq!(int(&call, "optInTimePeriod"), 20);
    assert_eq!(real(&call, "optInNbDevUp"), 2.5);
    assert_eq!(real(&call, "optInNbDevDn"), 1.5);
}

#[test]
fn test_t3_and_mama_forward_reals() {
    let tai = facade();
    let b = bars(50);
    tai.t3(&b.close, 5, 0.7).unwrap();
    assert_eq!(real(&tai.engine().last_call(), "optInVFactor"), 0.7);

    tai.mama(&b.close, 0.5, 0.05).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(real(&call, "optInFastLimit"), 0.5);
    assert_eq!(real(&call, "optInSlowLimit"), 0.05);
}

#[test]
fn test_sarext_applies_acceleration_to_both_sides() {
    let tai = facade();
    let b = bars(50);
    tai.sarext(&b.high, &b.low, 0.0, 0.0, 0.02, 0.03, 0.25).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "SAREXT");
    assert_eq!(real(&call, "optInAccelerationInitLong"), 0.02);
    assert_eq!(real(&call, "optInAccelerationInitShort"), 0.02);
    assert_eq!(real(&call, "optInAccelerationLong"), 0.03);
    assert_eq!(real(&call, "optInAccelerationShort"), 0.03);
    assert_eq!(real(&call, "optInAccelerationMaxLong"), 0.25);
    assert_eq!(real(&call, "optInAccelerationMaxShort"), 0.25);
}

#[test]
fn test_mavp_forwards_periods_series() {
    let tai = facade();
    let b = bars(30);
    let periods = vec![5.0; 30];
    tai.mavp(&b.close, &periods, MaType::Ema).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "MAVP");
    assert_eq!(call.input_names(), vec!["real", "periods"]);
    assert_eq!(int(&call, "optInMAType"), 1);
}

#[test]
fn test_macdext_forwards_every_leg() {
    let tai = facade();
    let b = bars(60);
    tai.macdext(&b.close, 8, MaType::Ema, 21, MaType::Wma, 5, MaType::Dema)
        .unwrap();
    let call = tai.engine().last_call();
    assert_eq!(int(&call, "optInFastPeriod"), 8);
    assert_eq!(int(&call, "optInFastMAType"), 1);
    assert_eq!(int(&call, "optInSlowPeriod"), 21);
    assert_eq!(int(&call, "optInSlowMAType"), 2);
    assert_eq!(int(&call, "optInSignalPeriod"), 5);
    assert_eq!(int(&call, "optInSignalMAType"), 3);
}

#[test]
fn test_stoch_forwards_k_and_d_periods() {
    let tai = facade();
    let b = bars(40);
    tai.stoch(&b.high, &b.low, &b.close, 14, 3, 4).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.input_names(), vec!["high", "low", "close"]);
    assert_eq!(int(&call, "optInFastK_Period"), 14);
    assert_eq!(int(&call, "optInSlowK_Period"), 3);
    assert_eq!(int(&call, "optInSlowD_Period"), 4);
}

#[test]
fn test_ultosc_forwards_three_periods() {
    let tai = facade();
    let b = bars(40);
    tai.ultosc(&b.high, &b.low, &b.close, 7, 14, 28).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(int(&call, "optInTimePeriod1"), 7);
    assert_eq!(int(&call, "optInTimePeriod2"), 14);
    assert_eq!(int(&call, "optInTimePeriod3"), 28);
}

#[test]
fn test_volume_inputs() {
    let tai = facade();
    let b = bars(30);
    tai.obv(&b.close, &b.volume).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "OBV");
    assert_eq!(call.input_names(), vec!["real", "volume"]);

    tai.adosc(&b.high, &b.low, &b.close, &b.volume, 3, 10).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.input_names(), vec!["high", "low", "close", "volume"]);
    assert_eq!(int(&call, "optInFastPeriod"), 3);
    assert_eq!(int(&call, "optInSlowPeriod"), 10);
}

#[test]
fn test_statistics_forward_pairs_and_deviation() {
    let tai = facade();
    let a = bars(30);
    let b = bars(30);
    tai.correl(&a.close, &b.close, 10).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "CORREL");
    assert_eq!(call.input_names(), vec!["real0", "real1"]);

    tai.stddev(&a.close, 5, 2.0).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "STDDEV");
    assert_eq!(real(&call, "optInNbDev"), 2.0);
}

#[test]
fn test_candles_forward_ohlc_and_penetration() {
    let tai = facade();
    let b = bars(20);
    tai.cdl_doji(&b.open, &b.high, &b.low, &b.close).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "CDLDOJI");
    assert_eq!(call.input_names(), vec!["open", "high", "low", "close"]);
    assert!(call.options.is_empty());

    tai.cdl_darkcloudcover(&b.open, &b.high, &b.low, &b.close, 0.5)
        .unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "CDLDARKCLOUDCOVER");
    assert_eq!(real(&call, "optInPenetration"), 0.5);
}

#[test]
fn test_compute_dispatches_by_name() {
    let tai = facade();
    let mut series = SeriesSet::default();
    let b = bars(40);
    series
        .insert("open", b.open.clone())
        .insert("high", b.high.clone())
        .insert("low", b.low.clone())
        .insert("close", b.close.clone())
        .insert("volume", b.volume.clone());

    for name in COMPUTABLE {
        let value = tai
            .compute(name, &series, &Params::with_period(10))
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(value.is_array() || value.is_object(), "{name}");
    }
    assert_eq!(tai.engine().call_count(), COMPUTABLE.len());

    let value = tai.compute("bbands", &series, &Params::default()).unwrap();
    assert_eq!(value["upper_band"][0], 3.0);
    assert_eq!(value["lower_band"][0], 1.0);
}

#[test]
fn test_compute_unknown_name_and_missing_series() {
    let tai = facade();
    let series = SeriesSet::from_json(&serde_json::json!([1.0, 2.0, 3.0])).unwrap();
    assert!(matches!(
        tai.compute("hma", &series, &Params::default()),
        Err(Error::UnknownIndicator(_))
    ));
    assert!(matches!(
        tai.compute("atr", &series, &Params::with_period(2)),
        Err(Error::InvalidParameter(_))
    ));
    assert_eq!(tai.engine().call_count(), 0);
}

#[test]
fn test_compute_stddev_uses_nbdev_not_band_width() {
    let tai = facade();
    let series = SeriesSet::from_json(&serde_json::json!([1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
    let params = Params {
        period: Some(3),
        nbdev: Some(1.5),
        nbdev_up: Some(3.0),
        ..Params::default()
    };
    tai.compute("stddev", &series, &params).unwrap();
    let call = tai.engine().last_call();
    assert_eq!(call.function, "STDDEV");
    assert_eq!(int(&call, "optInTimePeriod"), 3);
    assert_eq!(real(&call, "optInNbDev"), 1.5);

    tai.compute("stddev", &series, &Params::with_period(3)).unwrap();
    assert_eq!(real(&tai.engine().last_call(), "optInNbDev"), 1.0);
}
