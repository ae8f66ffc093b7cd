//! Price transforms
//!
//! Per-bar combinations of open/high/low/close into a single price.

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    fn hlc_transform(
        &self,
        function: &'static str,
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new(function)
            .input("high", high)
            .input("low", low)
            .input("close", close);
        self.forward(call, &[high, low, close], &[])?.into_real()
    }

    /// Average Price, (open + high + low + close) / 4
    pub fn avgprice(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("AVGPRICE")
            .input("open", open)
            .input("high", high)
            .input("low", low)
            .input("close", close);
        self.forward(call, &[open, high, low, close], &[])?.into_real()
    }

    /// Median Price, (high + low) / 2
    pub fn medprice(&self, high: &[f64], low: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("MEDPRICE").input("high", high).input("low", low);
        self.forward(call, &[high, low], &[])?.into_real()
    }

    /// Typical Price, (high + low + close) / 3
    pub fn typprice(&self, high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
        self.hlc_transform("TYPPRICE", high, low, close)
    }

    /// Weighted Close Price, (high + low + 2 * close) / 4
    pub fn wclprice(&self, high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
        self.hlc_transform("WCLPRICE", high, low, close)
    }
}
