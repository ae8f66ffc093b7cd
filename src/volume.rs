//! Volume indicators
//!
//! Indicators that weigh price movement by traded volume.

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    /// OBV - On Balance Volume
    pub fn obv(&self, close: &[f64], volume: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("OBV")
            .input("real", close)
            .input("volume", volume);
        self.forward(call, &[close, volume], &[])?.into_real()
    }

    /// Chaikin A/D Line
    pub fn ad(&self, high: &[f64], low: &[f64], close: &[f64], volume: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("AD")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .input("volume", volume);
        self.forward(call, &[high, low, close, volume], &[])?.into_real()
    }

    /// Chaikin A/D Oscillator
    ///
    /// Defaults: `fast_period` 3, `slow_period` 10.
    pub fn adosc(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        volume: &[f64],
        fast_period: i32,
        slow_period: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("ADOSC")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .input("volume", volume)
            .integer("fast_period", fast_period)
            .integer("slow_period", slow_period);
        self.forward(call, &[high, low, close, volume], &[fast_period, slow_period])?
            .into_real()
    }
}
