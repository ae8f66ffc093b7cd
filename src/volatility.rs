//! Volatility indicators
//!
//! Range-based measures of how far price travels per bar.

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    /// ATR - Average True Range. Default `period` 14.
    pub fn atr(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("ATR", high, low, close, period)
    }

    /// Normalized Average True Range, ATR as a percentage of close.
    /// Default `period` 14.
    pub fn natr(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("NATR", high, low, close, period)
    }

    /// True Range
    ///
    /// Formula: max(high - low, |high - prev_close|, |low - prev_close|)
    pub fn trange(&self, high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("TRANGE")
            .input("high", high)
            .input("low", low)
            .input("close", close);
        self.forward(call, &[high, low, close], &[])?.into_real()
    }
}
