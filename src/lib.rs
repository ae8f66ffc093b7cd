//! # talib-facade
//!
//! Validated, uniformly shaped access to the TA-Lib technical analysis
//! library.
//!
//! ## Features
//! - 134 TA-Lib functions across 8 groups (overlap studies, momentum,
//!   volatility, volume, price transform, cycle, statistics, candlestick
//!   patterns)
//! - Every call checks that TA-Lib is loaded and validates series and periods
//!   before crossing the native boundary
//! - Multi-output indicators always return fixed-order tuples
//! - Bundled help catalog with category filter, search and documentation URLs
//!
//! ## Example
//! ```no_run
//! use talib_facade::Tai;
//!
//! let tai = Tai::new();
//! let prices = vec![44.0, 44.5, 45.0, 44.5, 45.5, 46.0, 45.5, 46.5];
//!
//! if tai.available() {
//!     let sma_values = tai.sma(&prices, 3)?;
//!     let (upper, middle, lower) = tai.bbands(&prices, 5, 2.0, 2.0)?;
//! }
//! # Ok::<(), talib_facade::Error>(())
//! ```
//!
//! Real-valued outputs have the length of the shortest input, with `NaN` in
//! the lookback positions. Integer outputs (candlestick patterns,
//! [`Tai::ht_trendmode`]) use `0` there.

pub mod common;
pub mod compute;
pub mod error;
pub mod help;
pub mod native;

pub mod cycle;
pub mod momentum;
pub mod overlap;
pub mod patterns;
pub mod price_transform;
pub mod statistics;
pub mod volatility;
pub mod volume;

pub use compute::{Params, SeriesSet};
pub use error::{Error, Result, INSTALL_HINT};
pub use help::{Category, HelpCatalog, HelpFormat, HelpOutput, HelpRequest, HelpSummary, Resource};
pub use native::{Engine, NativeCall, NativeOutputs, OptValue, OutputValues, TaLib, TaLibConfig};
pub use overlap::MaType;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Indicator facade.
///
/// Every indicator is an inherent method, grouped by module (see
/// [`overlap`], [`momentum`], [`volatility`], [`volume`],
/// [`price_transform`], [`cycle`], [`statistics`], [`patterns`]).
/// The engine is injectable; [`Tai::new`] uses the TA-Lib shared library.
#[derive(Debug)]
pub struct Tai<E = TaLib> {
    engine: E,
}

impl Tai<TaLib> {
    /// Facade over TA-Lib located through [`TaLibConfig::from_env`].
    pub fn new() -> Self {
        Self::with_engine(TaLib::load())
    }
}

impl Default for Tai<TaLib> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Tai<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Whether the native library is loaded. Never fails.
    pub fn available(&self) -> bool {
        self.engine.is_available()
    }

    /// Fail with [`Error::NotInstalled`] unless [`Tai::available`].
    pub fn check_available(&self) -> Result<()> {
        if self.available() {
            Ok(())
        } else {
            Err(Error::NotInstalled)
        }
    }

    /// Guard, validate, then hand the call to the engine.
    pub(crate) fn forward(
        &self,
        call: NativeCall<'_>,
        series: &[&[f64]],
        periods: &[i32],
    ) -> Result<NativeOutputs> {
        self.check_available()?;
        common::validate_all(series, periods)?;
        tracing::debug!(function = call.function(), len = call.len(), "forwarding to engine");
        self.engine.call(&call)
    }
}
