//! Overlap studies
//!
//! Moving averages, bands and trailing-stop style studies that plot on the
//! same scale as price.

use serde::{Deserialize, Serialize};

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

/// Moving average kind understood by TA-Lib (`optInMAType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum MaType {
    #[default]
    Sma = 0,
    Ema = 1,
    Wma = 2,
    Dema = 3,
    Tema = 4,
    Trima = 5,
    Kama = 6,
    Mama = 7,
    T3 = 8,
}

impl MaType {
    /// Native integer code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for MaType {
    type Error = crate::Error;

    fn try_from(code: i32) -> Result<Self> {
        Ok(match code {
            0 => Self::Sma,
            1 => Self::Ema,
            2 => Self::Wma,
            3 => Self::Dema,
            4 => Self::Tema,
            5 => Self::Trima,
            6 => Self::Kama,
            7 => Self::Mama,
            8 => Self::T3,
            other => {
                return Err(crate::Error::InvalidParameter(format!(
                    "MA type must be between 0 and 8, got {other}"
                )))
            }
        })
    }
}

impl std::str::FromStr for MaType {
    type Err = crate::Error;

    /// Accepts a lowercase name (`ema`) or a numeric code (`1`).
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(code) = s.trim().parse::<i32>() {
            return Self::try_from(code);
        }
        serde_json::from_value(serde_json::Value::String(s.trim().to_lowercase()))
            .map_err(|_| crate::Error::InvalidParameter(format!("unknown MA type: {s}")))
    }
}

impl<E: Engine> Tai<E> {
    pub(crate) fn single_period(
        &self,
        function: &'static str,
        prices: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new(function)
            .input("real", prices)
            .integer("time_period", period);
        self.forward(call, &[prices], &[period])?.into_real()
    }

    /// Moving Average of a selectable kind.
    ///
    /// Defaults: `period` 30, `ma_type` [`MaType::Sma`].
    pub fn ma(&self, prices: &[f64], period: i32, ma_type: MaType) -> Result<Vec<f64>> {
        let call = NativeCall::new("MA")
            .input("real", prices)
            .integer("time_period", period)
            .integer("ma_type", ma_type.code());
        self.forward(call, &[prices], &[period])?.into_real()
    }

    /// Simple Moving Average. Default `period` 30.
    pub fn sma(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("SMA", prices, period)
    }

    /// Exponential Moving Average. Default `period` 30.
    pub fn ema(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("EMA", prices, period)
    }

    /// Weighted Moving Average. Default `period` 30.
    pub fn wma(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("WMA", prices, period)
    }

    /// Double Exponential Moving Average. Default `period` 30.
    pub fn dema(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("DEMA", prices, period)
    }

    /// Triple Exponential Moving Average. Default `period` 30.
    pub fn tema(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("TEMA", prices, period)
    }

    /// Triangular Moving Average. Default `period` 30.
    pub fn trima(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("TRIMA", prices, period)
    }

    /// Kaufman Adaptive Moving Average. Default `period` 30.
    pub fn kama(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("KAMA", prices, period)
    }

    /// Tillson T3.
    ///
    /// Defaults: `period` 5, `vfactor` 0.7.
    pub fn t3(&self, prices: &[f64], period: i32, vfactor: f64) -> Result<Vec<f64>> {
        let call = NativeCall::new("T3")
            .input("real", prices)
            .integer("time_period", period)
            .real("vfactor", vfactor);
        self.forward(call, &[prices], &[period])?.into_real()
    }

    /// Bollinger Bands
    ///
    /// Returns (upper_band, middle_band, lower_band)
    ///
    /// Defaults: `period` 5, `nbdev_up` 2.0, `nbdev_down` 2.0.
    pub fn bbands(
        &self,
        prices: &[f64],
        period: i32,
        nbdev_up: f64,
        nbdev_down: f64,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("BBANDS")
            .input("real", prices)
            .integer("time_period", period)
            .real("nbdev_up", nbdev_up)
            .real("nbdev_dn", nbdev_down);
        let mut out = self.forward(call, &[prices], &[period])?;
        Ok((
            out.take_real("upper_band")?,
            out.take_real("middle_band")?,
            out.take_real("lower_band")?,
        ))
    }

    /// Acceleration Bands
    ///
    /// Returns (upper_band, middle_band, lower_band). Default `period` 20.
    pub fn accbands(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        period: i32,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("ACCBANDS")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .integer("time_period", period);
        let mut out = self.forward(call, &[high, low, close], &[period])?;
        Ok((
            out.take_real("upper_band")?,
            out.take_real("middle_band")?,
            out.take_real("lower_band")?,
        ))
    }

    /// Hilbert Transform - Instantaneous Trendline
    pub fn ht_trendline(&self, prices: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("HT_TRENDLINE").input("real", prices);
        self.forward(call, &[prices], &[])?.into_real()
    }

    /// MESA Adaptive Moving Average
    ///
    /// Returns (mama, fama)
    ///
    /// Defaults: `fast_limit` 0.5, `slow_limit` 0.05.
    pub fn mama(
        &self,
        prices: &[f64],
        fast_limit: f64,
        slow_limit: f64,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("MAMA")
            .input("real", prices)
            .real("fastlimit", fast_limit)
            .real("slowlimit", slow_limit);
        let mut out = self.forward(call, &[prices], &[])?;
        Ok((out.take_real("mama")?, out.take_real("fama")?))
    }

    /// Moving Average with a per-point period taken from `periods`.
    ///
    /// Default `ma_type` [`MaType::Sma`].
    pub fn mavp(&self, prices: &[f64], periods: &[f64], ma_type: MaType) -> Result<Vec<f64>> {
        let call = NativeCall::new("MAVP")
            .input("real", prices)
            .input("periods", periods)
            .integer("ma_type", ma_type.code());
        self.forward(call, &[prices, periods], &[])?.into_real()
    }

    /// Midpoint over period. Default `period` 14.
    pub fn midpoint(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("MIDPOINT", prices, period)
    }

    /// Midpoint Price over period. Default `period` 14.
    pub fn midprice(&self, high: &[f64], low: &[f64], period: i32) -> Result<Vec<f64>> {
        let call = NativeCall::new("MIDPRICE")
            .input("high", high)
            .input("low", low)
            .integer("time_period", period);
        self.forward(call, &[high, low], &[period])?.into_real()
    }

    /// Parabolic SAR
    ///
    /// Defaults: `acceleration` 0.02, `maximum` 0.20.
    pub fn sar(
        &self,
        high: &[f64],
        low: &[f64],
        acceleration: f64,
        maximum: f64,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("SAR")
            .input("high", high)
            .input("low", low)
            .real("acceleration", acceleration)
            .real("maximum", maximum);
        self.forward(call, &[high, low], &[])?.into_real()
    }

    /// Parabolic SAR - Extended
    ///
    /// The acceleration settings apply to both long and short positions.
    ///
    /// Defaults: `start_value` 0.0, `offset_on_reverse` 0.0,
    /// `acceleration_init` 0.02, `acceleration_step` 0.02, `acceleration_max` 0.20.
    #[allow(clippy::too_many_arguments)]
    pub fn sarext(
        &self,
        high: &[f64],
        low: &[f64],
        start_value: f64,
        offset_on_reverse: f64,
        acceleration_init: f64,
        acceleration_step: f64,
        acceleration_max: f64,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("SAREXT")
            .input("high", high)
            .input("low", low)
            .real("start_value", start_value)
            .real("offset_on_reverse", offset_on_reverse)
            .real("acceleration_init_long", acceleration_init)
            .real("acceleration_long", acceleration_step)
            .real("acceleration_max_long", acceleration_max)
            .real("acceleration_init_short", acceleration_init)
            .real("acceleration_short", acceleration_step)
            .real("acceleration_max_short", acceleration_max);
        self.forward(call, &[high, low], &[])?.into_real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ma_type_codes() {
        assert_eq!(MaType::Sma.code(), 0);
        assert_eq!(MaType::T3.code(), 8);
        assert_eq!(MaType::default(), MaType::Sma);
    }

    #[test]
    fn test_ma_type_try_from() {
        assert_eq!(MaType::try_from(1).unwrap(), MaType::Ema);
        assert_eq!(MaType::try_from(7).unwrap(), MaType::Mama);
        assert!(MaType::try_from(9).is_err());
        assert!(MaType::try_from(-1).is_err());
    }

    #[test]
    fn test_ma_type_serde() {
        let parsed: MaType = serde_json::from_str("\"kama\"").unwrap();
        assert_eq!(parsed, MaType::Kama);
    }

    #[test]
    fn test_ma_type_from_str() {
        assert_eq!("EMA".parse::<MaType>().unwrap(), MaType::Ema);
        assert_eq!("8".parse::<MaType>().unwrap(), MaType::T3);
        assert!("hull".parse::<MaType>().is_err());
    }
}
