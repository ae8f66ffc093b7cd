//! Momentum indicators
//!
//! Indicators that measure the rate of change or strength of price movements.

use crate::native::{Engine, NativeCall};
use crate::overlap::MaType;
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    pub(crate) fn hlc_period(
        &self,
        function: &'static str,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new(function)
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .integer("time_period", period);
        self.forward(call, &[high, low, close], &[period])?.into_real()
    }

    fn hl_period(
        &self,
        function: &'static str,
        high: &[f64],
        low: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new(function)
            .input("high", high)
            .input("low", low)
            .integer("time_period", period);
        self.forward(call, &[high, low], &[period])?.into_real()
    }

    /// RSI - Relative Strength Index. Default `period` 14.
    pub fn rsi(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("RSI", prices, period)
    }

    /// Intraday Momentum Index. Default `period` 14.
    pub fn imi(&self, open: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        let call = NativeCall::new("IMI")
            .input("open", open)
            .input("close", close)
            .integer("time_period", period);
        self.forward(call, &[open, close], &[period])?.into_real()
    }

    /// MACD - Moving Average Convergence Divergence
    ///
    /// Returns (macd_line, signal_line, histogram)
    ///
    /// Defaults: `fast_period` 12, `slow_period` 26, `signal_period` 9.
    pub fn macd(
        &self,
        prices: &[f64],
        fast_period: i32,
        slow_period: i32,
        signal_period: i32,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("MACD")
            .input("real", prices)
            .integer("fast_period", fast_period)
            .integer("slow_period", slow_period)
            .integer("signal_period", signal_period);
        let mut out = self.forward(call, &[prices], &[fast_period, slow_period, signal_period])?;
        Ok((
            out.take_real("macd")?,
            out.take_real("macd_signal")?,
            out.take_real("macd_hist")?,
        ))
    }

    /// MACD with a selectable moving average for each leg
    ///
    /// Returns (macd_line, signal_line, histogram)
    ///
    /// Defaults: periods 12/26/9, every MA type [`MaType::Sma`].
    #[allow(clippy::too_many_arguments)]
    pub fn macdext(
        &self,
        prices: &[f64],
        fast_period: i32,
        fast_ma_type: MaType,
        slow_period: i32,
        slow_ma_type: MaType,
        signal_period: i32,
        signal_ma_type: MaType,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("MACDEXT")
            .input("real", prices)
            .integer("fast_period", fast_period)
            .integer("fast_ma_type", fast_ma_type.code())
            .integer("slow_period", slow_period)
            .integer("slow_ma_type", slow_ma_type.code())
            .integer("signal_period", signal_period)
            .integer("signal_ma_type", signal_ma_type.code());
        let mut out = self.forward(call, &[prices], &[fast_period, slow_period, signal_period])?;
        Ok((
            out.take_real("macd")?,
            out.take_real("macd_signal")?,
            out.take_real("macd_hist")?,
        ))
    }

    /// MACD fixed at 12/26
    ///
    /// Returns (macd_line, signal_line, histogram). Default `signal_period` 9.
    pub fn macdfix(
        &self,
        prices: &[f64],
        signal_period: i32,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("MACDFIX")
            .input("real", prices)
            .integer("signal_period", signal_period);
        let mut out = self.forward(call, &[prices], &[signal_period])?;
        Ok((
            out.take_real("macd")?,
            out.take_real("macd_signal")?,
            out.take_real("macd_hist")?,
        ))
    }

    /// Stochastic Oscillator
    ///
    /// Returns (slow_k, slow_d)
    ///
    /// Defaults: `fastk_period` 5, `slowk_period` 3, `slowd_period` 3.
    pub fn stoch(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        fastk_period: i32,
        slowk_period: i32,
        slowd_period: i32,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("STOCH")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .integer("fastk_period", fastk_period)
            .integer("slowk_period", slowk_period)
            .integer("slowd_period", slowd_period);
        let mut out = self.forward(
            call,
            &[high, low, close],
            &[fastk_period, slowk_period, slowd_period],
        )?;
        Ok((out.take_real("slow_k")?, out.take_real("slow_d")?))
    }

    /// Stochastic Fast
    ///
    /// Returns (fast_k, fast_d)
    ///
    /// Defaults: `fastk_period` 5, `fastd_period` 3.
    pub fn stochf(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        fastk_period: i32,
        fastd_period: i32,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("STOCHF")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .integer("fastk_period", fastk_period)
            .integer("fastd_period", fastd_period);
        let mut out = self.forward(call, &[high, low, close], &[fastk_period, fastd_period])?;
        Ok((out.take_real("fast_k")?, out.take_real("fast_d")?))
    }

    /// Stochastic RSI
    ///
    /// Returns (fast_k, fast_d)
    ///
    /// Defaults: `period` 14, `fastk_period` 5, `fastd_period` 3.
    pub fn stochrsi(
        &self,
        prices: &[f64],
        period: i32,
        fastk_period: i32,
        fastd_period: i32,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("STOCHRSI")
            .input("real", prices)
            .integer("time_period", period)
            .integer("fastk_period", fastk_period)
            .integer("fastd_period", fastd_period);
        let mut out = self.forward(call, &[prices], &[period, fastk_period, fastd_period])?;
        Ok((out.take_real("fast_k")?, out.take_real("fast_d")?))
    }

    /// Momentum. Default `period` 10.
    pub fn mom(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("MOM", prices, period)
    }

    /// Commodity Channel Index. Default `period` 14.
    pub fn cci(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("CCI", high, low, close, period)
    }

    /// Williams' %R. Default `period` 14.
    pub fn willr(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("WILLR", high, low, close, period)
    }

    /// ROC - Rate of Change, `((price / prev) - 1) * 100`. Default `period` 10.
    pub fn roc(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("ROC", prices, period)
    }

    /// Rate of Change Percentage, `(price - prev) / prev`. Default `period` 10.
    pub fn rocp(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("ROCP", prices, period)
    }

    /// Rate of Change Ratio, `price / prev`. Default `period` 10.
    pub fn rocr(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("ROCR", prices, period)
    }

    /// Rate of Change Ratio on a 100 scale. Default `period` 10.
    pub fn rocr100(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("ROCR100", prices, period)
    }

    /// PPO - Percentage Price Oscillator
    ///
    /// Defaults: `fast_period` 12, `slow_period` 26, `ma_type` [`MaType::Sma`].
    pub fn ppo(
        &self,
        prices: &[f64],
        fast_period: i32,
        slow_period: i32,
        ma_type: MaType,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("PPO")
            .input("real", prices)
            .integer("fast_period", fast_period)
            .integer("slow_period", slow_period)
            .integer("ma_type", ma_type.code());
        self.forward(call, &[prices], &[fast_period, slow_period])?.into_real()
    }

    /// Absolute Price Oscillator
    ///
    /// Defaults: `fast_period` 12, `slow_period` 26, `ma_type` [`MaType::Sma`].
    pub fn apo(
        &self,
        prices: &[f64],
        fast_period: i32,
        slow_period: i32,
        ma_type: MaType,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("APO")
            .input("real", prices)
            .integer("fast_period", fast_period)
            .integer("slow_period", slow_period)
            .integer("ma_type", ma_type.code());
        self.forward(call, &[prices], &[fast_period, slow_period])?.into_real()
    }

    /// ADX - Average Directional Index. Default `period` 14.
    pub fn adx(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("ADX", high, low, close, period)
    }

    /// Average Directional Movement Index Rating. Default `period` 14.
    pub fn adxr(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("ADXR", high, low, close, period)
    }

    /// Directional Movement Index. Default `period` 14.
    pub fn dx(&self, high: &[f64], low: &[f64], close: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hlc_period("DX", high, low, close, period)
    }

    /// Aroon
    ///
    /// Returns (aroon_down, aroon_up). Default `period` 14.
    pub fn aroon(&self, high: &[f64], low: &[f64], period: i32) -> Result<(Vec<f64>, Vec<f64>)> {
        let call = NativeCall::new("AROON")
            .input("high", high)
            .input("low", low)
            .integer("time_period", period);
        let mut out = self.forward(call, &[high, low], &[period])?;
        Ok((out.take_real("aroon_down")?, out.take_real("aroon_up")?))
    }

    /// Aroon Oscillator. Default `period` 14.
    pub fn aroonosc(&self, high: &[f64], low: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hl_period("AROONOSC", high, low, period)
    }

    /// Balance of Power
    pub fn bop(&self, open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
        let call = NativeCall::new("BOP")
            .input("open", open)
            .input("high", high)
            .input("low", low)
            .input("close", close);
        self.forward(call, &[open, high, low, close], &[])?.into_real()
    }

    /// Chande Momentum Oscillator. Default `period` 14.
    pub fn cmo(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("CMO", prices, period)
    }

    /// Money Flow Index. Default `period` 14.
    pub fn mfi(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        volume: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("MFI")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .input("volume", volume)
            .integer("time_period", period);
        self.forward(call, &[high, low, close, volume], &[period])?.into_real()
    }

    /// Minus Directional Indicator. Default `period` 14.
    pub fn minus_di(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        self.hlc_period("MINUS_DI", high, low, close, period)
    }

    /// Minus Directional Movement. Default `period` 14.
    pub fn minus_dm(&self, high: &[f64], low: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hl_period("MINUS_DM", high, low, period)
    }

    /// Plus Directional Indicator. Default `period` 14.
    pub fn plus_di(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        period: i32,
    ) -> Result<Vec<f64>> {
        self.hlc_period("PLUS_DI", high, low, close, period)
    }

    /// Plus Directional Movement. Default `period` 14.
    pub fn plus_dm(&self, high: &[f64], low: &[f64], period: i32) -> Result<Vec<f64>> {
        self.hl_period("PLUS_DM", high, low, period)
    }

    /// 1-day Rate-Of-Change of a Triple Smooth EMA. Default `period` 30.
    pub fn trix(&self, prices: &[f64], period: i32) -> Result<Vec<f64>> {
        self.single_period("TRIX", prices, period)
    }

    /// Ultimate Oscillator
    ///
    /// Defaults: `period1` 7, `period2` 14, `period3` 28.
    pub fn ultosc(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
        period1: i32,
        period2: i32,
        period3: i32,
    ) -> Result<Vec<f64>> {
        let call = NativeCall::new("ULTOSC")
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .integer("time_period1", period1)
            .integer("time_period2", period2)
            .integer("time_period3", period3);
        self.forward(call, &[high, low, close], &[period1, period2, period3])?
            .into_real()
    }
}
