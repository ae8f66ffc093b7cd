//! Error types for the TA-Lib facade.
//!
//! Caller misuse (bad series, bad periods, unknown help keys) and a missing
//! native library are reported through the same [`Error`] enum as failures
//! coming back across the native boundary.

use thiserror::Error;

/// Install hint carried by [`Error::NotInstalled`].
pub const INSTALL_HINT: &str =
    "TA-Lib C library is not installed. Please install it from https://ta-lib.org/";

/// The main error type for facade operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The TA-Lib shared library could not be loaded.
    #[error("{}", INSTALL_HINT)]
    NotInstalled,

    /// A series or period argument failed validation.
    ///
    /// Raised for nil, empty or non-array series, non-positive periods and
    /// periods longer than the data.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The help table has no entry for the requested key.
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    /// TA-Lib returned a non-success code.
    #[error("TA-Lib call {function} failed with code {code}")]
    Native {
        /// Native function symbol, e.g. `SMA`.
        function: String,
        /// Raw `TA_RetCode`.
        code: i32,
    },

    /// A parameter name was forwarded that the native function does not declare.
    #[error("TA-Lib function {function} has no parameter named {name}")]
    UnknownNativeParameter {
        /// Native function symbol.
        function: String,
        /// The unmatched parameter name.
        name: String,
    },

    /// A named output was missing or had the wrong element type.
    #[error("TA-Lib function {function} did not produce expected output {output}")]
    UnexpectedOutput {
        /// Native function symbol.
        function: String,
        /// The output that was looked for.
        output: String,
    },

    /// Help table or request body could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Help table file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A documentation URL did not parse.
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    /// Fetching documentation over the network failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub(crate) fn unexpected_output(function: &str, output: &str) -> Self {
        Self::UnexpectedOutput {
            function: function.to_string(),
            output: output.to_string(),
        }
    }
}

/// Convenience type alias for Results using the facade Error type.
pub type Result<T> = std::result::Result<T, Error>;
