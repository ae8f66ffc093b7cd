//! Statistical functions
//!
//! Rolling correlation, dispersion and linear regression.

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    fn pair_period(
        &self,
        function: &'static str,
        prices1: &[f64],
        prices2: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new(function)
            .input("real0", prices1)
            .input("real1", prices2)
            .integer("time_period", period);
        self.forward(call, &[prices1, prices2], &[period])?.into_real()
    }

    fn deviation(
        &self,
        function: &'static str,
        prices: &[f64],
        period: i32,
        nbdev: f64,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new(function)
            .input("real", prices)
            .integer("time_period", period)
            .real("nbdev", nbdev);
        self.forward(call, &[prices], &[period])?.into_real()
    }

    /// Pearson's Correlation Coefficient. Default `period` 30.
    pub fn correl(&self, prices1: &[f64], prices2: &[f64], period: i32) -> Result<Vec<f64>> {
        self.pair_period("CORREL", prices1, prices2, period)
    }

    /// Beta of `prices1` against `prices2`. Default `period` 5.
    pub fn beta(&self, prices1: &[f64], prices2: &[f64], period: i32) -> Result<Vec<f64>> {
        self.pair_period("BETA", prices1, prices2, period)
    }

    /// Variance
    ///
    /// Defaults: `period` 5, `nbdev` 1.0.
    pub fn var(&self, prices: &[f64], period: i32, nbdev: f64) -> Result<Vec<f64>> {
        self.deviation("VAR", prices, period, nbdev)
    }

    /// Standard Deviation
    ///
    /// Defaults: `period` 5, `nbdev` 1.0.
    pub fn stddev(&self, prices: &[f64], period: i32, nbdev: f64) -> Result<Vec<f64>> {
        self.deviation("STDDEV", prices, period, nbdev)
    }

    /// Linear Regression. Default `period` 14.
    pub fn linearreg(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("LINEARREG", prices, period)
    }

    /// Linear Regression Angle, in degrees. Default `period` 14.
    pub fn linearreg_angle(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("LINEARREG_ANGLE", prices, period)
    }

    /// Linear Regression Intercept. Default `period` 14.
    pub fn linearreg_intercept(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("LINEARREG_INTERCEPT", prices, period)
    }

    /// Linear Regression Slope. Default `period` 14.
    pub fn linearreg_slope(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("LINEARREG_SLOPE", prices, period)
    }

    /// Time Series Forecast. Default `period` 14.
    pub fn tsf(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("TSF", prices, period)
    }
}
