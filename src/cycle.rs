//! Cycle indicators
//!
//! Hilbert transform based measures of the dominant market cycle.

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    /// Hilbert Transform - Dominant Cycle Period
    pub fn ht_dcperiod(&self, prices: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("HT_DCPERIOD").input("real", prices);
        self.forward(call, &[prices], &[])?.into_real()
    }

    /// Hilbert Transform - Dominant Cycle Phase
    pub fn ht_dcphase(&self, prices: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("HT_DCPHASE").input("real", prices);
        self.forward(call, &[prices], &[])?.into_real()
    }

    /// Hilbert Transform - Phasor Components
    ///
    /// Returns (in_phase, quadrature)
    pub fn ht_phasor(&self, prices: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("HT_PHASOR").input("real", prices);
        let mut out = self.forward(call, &[prices], &[])?;
        Ok((out.take_real("in_phase")?, out.take_real("quadrature")?))
    }

    /// Hilbert Transform - SineWave
    ///
    /// Returns (sine, lead_sine)
    pub fn ht_sine(&self, prices: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("HT_SINE").input("real", prices);
        let mut out = self.forward(call, &[prices], &[])?;
        Ok((out.take_real("sine")?, out.take_real("lead_sine")?))
    }

    /// Hilbert Transform - Trend vs Cycle Mode: 1 in a trend, 0 in a cycle.
    pub fn ht_trendmode(&self, prices: &[f64]) -> Result<Vec<i32>> {
        let call = NativeCall::new("HT_TRENDMODE").input("real", prices);
        self.forward(call, &[prices], &[])?.into_integer()
    }
}
