//! Pattern recognition
//!
//! TA-Lib's candlestick pattern detectors. Each returns one signal per bar:
//! positive for a bullish match, negative for a bearish match (usually
//! +/-100, +/-200 for confirmed hikkake variants) and 0 where nothing matched
//! or the lookback has not filled.

use crate::native::{Engine, NativeCall};
use crate::{Result, Tai};

impl<E: Engine> Tai<E> {
    fn candle(
        &self,
        function: &'static str,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        let call = NativeCall::new(function)
            .input("open", open)
            .input("high", high)
            .input("low", low)
            .input("close", close);
        self.forward(call, &[open, high, low, close], &[])?.into_integer()
    }

    fn candle_penetration(
        &self,
        function: &'static str,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        let call = NativeCall::new(function)
            .input("open", open)
            .input("high", high)
            .input("low", low)
            .input("close", close)
            .real("penetration", penetration);
        self.forward(call, &[open, high, low, close], &[])?.into_integer()
    }

    /// Two Crows
    pub fn cdl_2crows(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL2CROWS", open, high, low, close)
    }

    /// Three Black Crows
    pub fn cdl_3blackcrows(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL3BLACKCROWS", open, high, low, close)
    }

    /// Three Inside Up/Down
    pub fn cdl_3inside(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL3INSIDE", open, high, low, close)
    }

    /// Three-Line Strike
    pub fn cdl_3linestrike(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL3LINESTRIKE", open, high, low, close)
    }

    /// Three Outside Up/Down
    pub fn cdl_3outside(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL3OUTSIDE", open, high, low, close)
    }

    /// Three Stars In The South
    pub fn cdl_3starsinsouth(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL3STARSINSOUTH", open, high, low, close)
    }

    /// Three Advancing White Soldiers
    pub fn cdl_3whitesoldiers(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDL3WHITESOLDIERS", open, high, low, close)
    }

    /// Abandoned Baby. Default `penetration` 0.3.
    pub fn cdl_abandonedbaby(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLABANDONEDBABY", open, high, low, close, penetration)
    }

    /// Advance Block
    pub fn cdl_advanceblock(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLADVANCEBLOCK", open, high, low, close)
    }

    /// Belt-hold
    pub fn cdl_belthold(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLBELTHOLD", open, high, low, close)
    }

    /// Breakaway
    pub fn cdl_breakaway(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLBREAKAWAY", open, high, low, close)
    }

    /// Closing Marubozu
    pub fn cdl_closingmarubozu(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLCLOSINGMARUBOZU", open, high, low, close)
    }

    /// Concealing Baby Swallow
    pub fn cdl_concealbabyswall(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLCONCEALBABYSWALL", open, high, low, close)
    }

    /// Counterattack
    pub fn cdl_counterattack(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLCOUNTERATTACK", open, high, low, close)
    }

    /// Dark Cloud Cover. Default `penetration` 0.5.
    pub fn cdl_darkcloudcover(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLDARKCLOUDCOVER", open, high, low, close, penetration)
    }

    /// Doji
    pub fn cdl_doji(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLDOJI", open, high, low, close)
    }

    /// Doji Star
    pub fn cdl_dojistar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLDOJISTAR", open, high, low, close)
    }

    /// Dragonfly Doji
    pub fn cdl_dragonflydoji(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLDRAGONFLYDOJI", open, high, low, close)
    }

    /// Engulfing Pattern
    pub fn cdl_engulfing(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLENGULFING", open, high, low, close)
    }

    /// Evening Doji Star. Default `penetration` 0.3.
    pub fn cdl_eveningdojistar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLEVENINGDOJISTAR", open, high, low, close, penetration)
    }

    /// Evening Star. Default `penetration` 0.3.
    pub fn cdl_eveningstar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLEVENINGSTAR", open, high, low, close, penetration)
    }

    /// Up/Down-gap side-by-side white lines
    pub fn cdl_gapsidesidewhite(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLGAPSIDESIDEWHITE", open, high, low, close)
    }

    /// Gravestone Doji
    pub fn cdl_gravestonedoji(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLGRAVESTONEDOJI", open, high, low, close)
    }

    /// Hammer
    pub fn cdl_hammer(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHAMMER", open, high, low, close)
    }

    /// Hanging Man
    pub fn cdl_hangingman(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHANGINGMAN", open, high, low, close)
    }

    /// Harami Pattern
    pub fn cdl_harami(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHARAMI", open, high, low, close)
    }

    /// Harami Cross Pattern
    pub fn cdl_haramicross(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHARAMICROSS", open, high, low, close)
    }

    /// High-Wave Candle
    pub fn cdl_highwave(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHIGHWAVE", open, high, low, close)
    }

    /// Hikkake Pattern
    pub fn cdl_hikkake(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHIKKAKE", open, high, low, close)
    }

    /// Modified Hikkake Pattern
    pub fn cdl_hikkakemod(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHIKKAKEMOD", open, high, low, close)
    }

    /// Homing Pigeon
    pub fn cdl_homingpigeon(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLHOMINGPIGEON", open, high, low, close)
    }

    /// Identical Three Crows
    pub fn cdl_identical3crows(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLIDENTICAL3CROWS", open, high, low, close)
    }

    /// In-Neck Pattern
    pub fn cdl_inneck(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLINNECK", open, high, low, close)
    }

    /// Inverted Hammer
    pub fn cdl_invertedhammer(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLINVERTEDHAMMER", open, high, low, close)
    }

    /// Kicking
    pub fn cdl_kicking(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLKICKING", open, high, low, close)
    }

    /// Kicking - bull/bear determined by the longer marubozu
    pub fn cdl_kickingbylength(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLKICKINGBYLENGTH", open, high, low, close)
    }

    /// Ladder Bottom
    pub fn cdl_ladderbottom(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLLADDERBOTTOM", open, high, low, close)
    }

    /// Long Legged Doji
    pub fn cdl_longleggeddoji(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLLONGLEGGEDDOJI", open, high, low, close)
    }

    /// Long Line Candle
    pub fn cdl_longline(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLLONGLINE", open, high, low, close)
    }

    /// Marubozu
    pub fn cdl_marubozu(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLMARUBOZU", open, high, low, close)
    }

    /// Matching Low
    pub fn cdl_matchinglow(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLMATCHINGLOW", open, high, low, close)
    }

    /// Mat Hold. Default `penetration` 0.5.
    pub fn cdl_mathold(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLMATHOLD", open, high, low, close, penetration)
    }

    /// Morning Doji Star. Default `penetration` 0.3.
    pub fn cdl_morningdojistar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLMORNINGDOJISTAR", open, high, low, close, penetration)
    }

    /// Morning Star. Default `penetration` 0.3.
    pub fn cdl_morningstar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        penetration: f64,
    ) -> Result<Vec<i32>> {
        self.candle_penetration("CDLMORNINGSTAR", open, high, low, close, penetration)
    }

    /// On-Neck Pattern
    pub fn cdl_onneck(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLONNECK", open, high, low, close)
    }

    /// Piercing Pattern
    pub fn cdl_piercing(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLPIERCING", open, high, low, close)
    }

    /// Rickshaw Man
    pub fn cdl_rickshawman(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLRICKSHAWMAN", open, high, low, close)
    }

    /// Rising/Falling Three Methods
    pub fn cdl_risefall3methods(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLRISEFALL3METHODS", open, high, low, close)
    }

    /// Separating Lines
    pub fn cdl_separatinglines(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLSEPARATINGLINES", open, high, low, close)
    }

    /// Shooting Star
    pub fn cdl_shootingstar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLSHOOTINGSTAR", open, high, low, close)
    }

    /// Short Line Candle
    pub fn cdl_shortline(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLSHORTLINE", open, high, low, close)
    }

    /// Spinning Top
    pub fn cdl_spinningtop(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLSPINNINGTOP", open, high, low, close)
    }

    /// Stalled Pattern
    pub fn cdl_stalledpattern(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLSTALLEDPATTERN", open, high, low, close)
    }

    /// Stick Sandwich
    pub fn cdl_sticksandwich(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLSTICKSANDWICH", open, high, low, close)
    }

    /// Takuri (Dragonfly Doji with very long lower shadow)
    pub fn cdl_takuri(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLTAKURI", open, high, low, close)
    }

    /// Tasuki Gap
    pub fn cdl_tasukigap(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLTASUKIGAP", open, high, low, close)
    }

    /// Thrusting Pattern
    pub fn cdl_thrusting(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLTHRUSTING", open, high, low, close)
    }

    /// Tristar Pattern
    pub fn cdl_tristar(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLTRISTAR", open, high, low, close)
    }

    /// Unique 3 River
    pub fn cdl_unique3river(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLUNIQUE3RIVER", open, high, low, close)
    }

    /// Upside Gap Two Crows
    pub fn cdl_upsidegap2crows(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLUPSIDEGAP2CROWS", open, high, low, close)
    }

    /// Upside/Downside Gap Three Methods
    pub fn cdl_xsidegap3methods(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Result<Vec<i32>> {
        self.candle("CDLXSIDEGAP3METHODS", open, high, low, close)
    }
}
