//! Name-based dispatch for the JSON surfaces
//!
//! The CLI and the HTTP server receive an indicator name, a bag of named
//! series and a bag of optional parameters. [`Tai::compute`] maps the common
//! indicators onto the typed facade methods and renders the result as JSON:
//! single outputs as an array, multi outputs as an object keyed by output
//! name. `NaN` lookback slots serialize as `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::common::series_from_json;
use crate::error::{Error, Result};
use crate::native::Engine;
use crate::overlap::MaType;
use crate::Tai;

/// Indicators reachable through [`Tai::compute`].
pub const COMPUTABLE: &[&str] = &[
    "ma", "sma", "ema", "wma", "dema", "tema", "trima", "kama", "t3", "bbands", "midpoint",
    "rsi", "mom", "roc", "cmo", "trix", "macd", "stoch", "stochrsi", "cci", "willr", "adx",
    "aroon", "mfi", "atr", "natr", "trange", "obv", "ad", "adosc", "typprice", "medprice",
    "ht_trendmode", "linearreg_slope", "stddev", "cdl_doji", "cdl_engulfing", "cdl_hammer",
];

/// Named input series. A bare JSON array is taken as `close`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    series: BTreeMap<String, Vec<f64>>,
}

impl SeriesSet {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut series = BTreeMap::new();
        match value {
            Value::Array(_) => {
                series.insert("close".to_string(), series_from_json(value, "close")?);
            }
            Value::Object(map) => {
                for (name, values) in map {
                    series.insert(name.to_lowercase(), series_from_json(values, name)?);
                }
            }
            Value::Null => return Err(Error::InvalidParameter("Prices array cannot be nil".into())),
            _ => return Err(Error::InvalidParameter("Prices must be an array".into())),
        }
        Ok(Self { series })
    }

    pub fn insert(&mut self, name: &str, values: Vec<f64>) -> &mut Self {
        self.series.insert(name.to_string(), values);
        self
    }

    /// A series that must be present; missing reads as nil.
    pub fn require(&self, name: &str) -> Result<&[f64]> {
        self.series
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::InvalidParameter(format!("{name} array cannot be nil")))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

/// Optional parameters; anything left `None` takes the indicator default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub period: Option<i32>,
    pub fast_period: Option<i32>,
    pub slow_period: Option<i32>,
    pub signal_period: Option<i32>,
    pub nbdev_up: Option<f64>,
    pub nbdev_down: Option<f64>,
    pub nbdev: Option<f64>,
    pub ma_type: Option<MaType>,
}

impl Params {
    pub fn with_period(period: i32) -> Self {
        Self {
            period: Some(period),
            ..Self::default()
        }
    }

    fn period(&self, default: i32) -> i32 {
        self.period.unwrap_or(default)
    }
}

fn real(values: Vec<f64>) -> Value {
    json!(values)
}

impl<E: Engine> Tai<E> {
    /// Compute `function` by name.
    ///
    /// Unknown names fail with [`Error::UnknownIndicator`]; missing series
    /// with [`Error::InvalidParameter`].
    pub fn compute(&self, function: &str, series: &SeriesSet, params: &Params) -> Result<Value> {
        let key = function.to_lowercase();
        tracing::debug!(function = %key, "compute by name");
        self.check_available()?;
        let p = params;
        let value = match key.as_str() {
            "ma" => real(self.ma(
                series.require("close")?,
                p.period(30),
                p.ma_type.unwrap_or_default(),
            )?),
            "sma" => real(self.sma(series.require("close")?, p.period(30))?),
            "ema" => real(self.ema(series.require("close")?, p.period(30))?),
            "wma" => real(self.wma(series.require("close")?, p.period(30))?),
            "dema" => real(self.dema(series.require("close")?, p.period(30))?),
            "tema" => real(self.tema(series.require("close")?, p.period(30))?),
            "trima" => real(self.trima(series.require("close")?, p.period(30))?),
            "kama" => real(self.kama(series.require("close")?, p.period(30))?),
            "t3" => real(self.t3(series.require("close")?, p.period(5), 0.7)?),
            "midpoint" => real(self.midpoint(series.require("close")?, p.period(14))?),
            "bbands" => {
                let (upper, middle, lower) = self.bbands(
                    series.require("close")?,
                    p.period(5),
                    p.nbdev_up.unwrap_or(2.0),
                    p.nbdev_down.unwrap_or(2.0),
                )?;
                json!({ "upper_band": upper, "middle_band": middle, "lower_band": lower })
            }
            "rsi" => real(self.rsi(series.require("close")?, p.period(14))?),
            "mom" => real(self.mom(series.require("close")?, p.period(10))?),
            "roc" => real(self.roc(series.require("close")?, p.period(10))?),
            "cmo" => real(self.cmo(series.require("close")?, p.period(14))?),
            "trix" => real(self.trix(series.require("close")?, p.period(30))?),
            "macd" => {
                let (line, signal, histogram) = self.macd(
                    series.require("close")?,
                    p.fast_period.unwrap_or(12),
                    p.slow_period.unwrap_or(26),
                    p.signal_period.unwrap_or(9),
                )?;
                json!({ "macd": line, "macd_signal": signal, "macd_hist": histogram })
            }
            "stoch" => {
                let (slow_k, slow_d) = self.stoch(
                    series.require("high")?,
                    series.require("low")?,
                    series.require("close")?,
                    p.fast_period.unwrap_or(5),
                    3,
                    3,
                )?;
                json!({ "slow_k": slow_k, "slow_d": slow_d })
            }
            "stochrsi" => {
                let (fast_k, fast_d) = self.stochrsi(
                    series.require("close")?,
                    p.period(14),
                    p.fast_period.unwrap_or(5),
                    3,
                )?;
                json!({ "fast_k": fast_k, "fast_d": fast_d })
            }
            "cci" => real(self.cci(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                p.period(14),
            )?),
            "willr" => real(self.willr(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                p.period(14),
            )?),
            "adx" => real(self.adx(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                p.period(14),
            )?),
            "aroon" => {
                let (down, up) =
                    self.aroon(series.require("high")?, series.require("low")?, p.period(14))?;
                json!({ "aroon_down": down, "aroon_up": up })
            }
            "mfi" => real(self.mfi(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                series.require("volume")?,
                p.period(14),
            )?),
            "atr" => real(self.atr(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                p.period(14),
            )?),
            "natr" => real(self.natr(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                p.period(14),
            )?),
            "trange" => real(self.trange(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
            )?),
            "obv" => real(self.obv(series.require("close")?, series.require("volume")?)?),
            "ad" => real(self.ad(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                series.require("volume")?,
            )?),
            "adosc" => real(self.adosc(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
                series.require("volume")?,
                p.fast_period.unwrap_or(3),
                p.slow_period.unwrap_or(10),
            )?),
            "typprice" => real(self.typprice(
                series.require("high")?,
                series.require("low")?,
                series.require("close")?,
            )?),
            "medprice" => real(self.medprice(series.require("high")?, series.require("low")?)?),
            "ht_trendmode" => json!(self.ht_trendmode(series.require("close")?)?),
            "linearreg_slope" => real(self.linearreg_slope(
                series.require("close")?,
                p.period(14),
            )?),
            "stddev" => real(self.stddev(
                series.require("close")?,
                p.period(5),
                p.nbdev.unwrap_or(1.0),
            )?),
            "cdl_doji" | "cdl_engulfing" | "cdl_hammer" => {
                let (open, high, low, close) = (
                    series.require("open")?,
                    series.require("high")?,
                    series.require("low")?,
                    series.require("close")?,
                );
                let signals = match key.as_str() {
                    "cdl_doji" => self.cdl_doji(open, high, low, close)?,
                    "cdl_engulfing" => self.cdl_engulfing(open, high, low, close)?,
                    _ => self.cdl_hammer(open, high, low, close)?,
                };
                json!(signals)
            }
            _ => return Err(Error::UnknownIndicator(function.to_string())),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::TaLib;

    #[test]
    fn test_bare_array_is_close() {
        let set = SeriesSet::from_json(&json!([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(set.require("close").unwrap(), &[1.0, 2.0, 3.0]);
        assert!(set.require("high").is_err());
    }

    #[test]
    fn test_object_keys_are_lowercased() {
        let set = SeriesSet::from_json(&json!({"High": [2.0], "low": [1.0]})).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["high", "low"]);
    }

    #[test]
    fn test_rejects_nil_and_scalars() {
        assert!(SeriesSet::from_json(&Value::Null).is_err());
        assert!(SeriesSet::from_json(&json!("close")).is_err());
        assert!(SeriesSet::from_json(&json!({"close": null})).is_err());
        assert!(SeriesSet::from_json(&json!({"close": []})).is_err());
    }

    #[test]
    fn test_params_deserialize_partial() {
        let params: Params =
            serde_json::from_value(json!({"period": 7, "ma_type": "ema"})).unwrap();
        assert_eq!(params.period, Some(7));
        assert_eq!(params.ma_type, Some(MaType::Ema));
        assert_eq!(params.fast_period, None);
    }

    #[test]
    fn test_unavailable_engine_reports_not_installed() {
        let tai = Tai::with_engine(TaLib::unavailable());
        let set = SeriesSet::from_json(&json!([1.0, 2.0, 3.0])).unwrap();
        assert!(matches!(
            tai.compute("sma", &set, &Params::with_period(2)),
            Err(Error::NotInstalled)
        ));
    }

    #[test]
    fn test_unavailable_engine_checked_before_series_lookup() {
        let tai = Tai::with_engine(TaLib::unavailable());
        let set = SeriesSet::from_json(&json!([1.0, 2.0, 3.0])).unwrap();
        assert!(matches!(
            tai.compute("atr", &set, &Params::with_period(2)),
            Err(Error::NotInstalled)
        ));
    }

    #[test]
    fn test_nbdev_is_separate_from_band_widths() {
        let params: Params =
            serde_json::from_value(json!({"nbdev": 1.5, "nbdev_up": 3.0})).unwrap();
        assert_eq!(params.nbdev, Some(1.5));
        assert_eq!(params.nbdev_up, Some(3.0));
        assert_eq!(params.nbdev_down, None);
    }

    #[test]
    fn test_computable_list_has_no_duplicates() {
        let mut names = COMPUTABLE.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMPUTABLE.len());
    }
}
