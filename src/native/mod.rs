//! Native boundary
//!
//! Everything numeric is forwarded across this boundary. A [`NativeCall`]
//! names the TA-Lib function, its input series and its optional parameters
//! using TA-Lib's own vocabulary; an [`Engine`] executes it and hands back
//! named [`NativeOutputs`] aligned with the inputs.

mod talib;

pub use talib::{TaLib, TaLibConfig, LIBRARY_PATH_ENV};

use crate::error::{Error, Result};

/// Executes native indicator calls.
pub trait Engine {
    /// True when the native library is loaded and usable.
    fn is_available(&self) -> bool;

    /// Run one native function. Outputs must be aligned to the shortest input.
    fn call(&self, call: &NativeCall<'_>) -> Result<NativeOutputs>;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn call(&self, call: &NativeCall<'_>) -> Result<NativeOutputs> {
        (**self).call(call)
    }
}

impl<E: Engine + ?Sized> Engine for std::sync::Arc<E> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn call(&self, call: &NativeCall<'_>) -> Result<NativeOutputs> {
        (**self).call(call)
    }
}

/// Value of an optional native parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptValue {
    Integer(i32),
    Real(f64),
}

/// A fully described native call.
#[derive(Debug, Clone)]
pub struct NativeCall<'a> {
    function: &'static str,
    inputs: Vec<(&'static str, &'a [f64])>,
    options: Vec<(&'static str, OptValue)>,
}

impl<'a> NativeCall<'a> {
    pub fn new(function: &'static str) -> Self {
        Self {
            function,
            inputs: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Attach an input series under its native name
    /// (`open`, `high`, `low`, `close`, `volume`, `real`, `real0`, `real1`, `periods`).
    pub fn input(mut self, name: &'static str, series: &'a [f64]) -> Self {
        self.inputs.push((name, series));
        self
    }

    pub fn integer(mut self, name: &'static str, value: i32) -> Self {
        self.options.push((name, OptValue::Integer(value)));
        self
    }

    pub fn real(mut self, name: &'static str, value: f64) -> Self {
        self.options.push((name, OptValue::Real(value)));
        self
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn inputs(&self) -> &[(&'static str, &'a [f64])] {
        &self.inputs
    }

    pub fn options(&self) -> &[(&'static str, OptValue)] {
        &self.options
    }

    /// Find an input by normalized name.
    pub fn find_input(&self, name: &str) -> Option<&'a [f64]> {
        let wanted = normalize_name(name);
        self.inputs
            .iter()
            .find(|(n, _)| normalize_name(n) == wanted)
            .map(|(_, s)| *s)
    }

    /// Find an option by normalized name.
    pub fn find_option(&self, name: &str) -> Option<OptValue> {
        let wanted = normalize_name(name);
        self.options
            .iter()
            .find(|(n, _)| normalize_name(n) == wanted)
            .map(|(_, v)| *v)
    }

    /// Number of points processed: the shortest input.
    pub fn len(&self) -> usize {
        self.inputs.iter().map(|(_, s)| s.len()).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named output column.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValues {
    Real(Vec<f64>),
    Integer(Vec<i32>),
}

/// Named outputs returned by an engine, in whatever order it produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeOutputs {
    function: String,
    outputs: Vec<(String, OutputValues)>,
}

impl NativeOutputs {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            outputs: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, values: OutputValues) {
        self.outputs.push((name.into(), values));
    }

    pub fn with(mut self, name: impl Into<String>, values: OutputValues) -> Self {
        self.push(name, values);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    fn take(&mut self, name: &str) -> Option<OutputValues> {
        let wanted = normalize_name(name);
        let idx = self
            .outputs
            .iter()
            .position(|(n, _)| normalize_name(n) == wanted)?;
        Some(self.outputs.swap_remove(idx).1)
    }

    /// Remove and return a real-valued output by name.
    pub fn take_real(&mut self, name: &str) -> Result<Vec<f64>> {
        match self.take(name) {
            Some(OutputValues::Real(values)) => Ok(values),
            _ => Err(Error::unexpected_output(&self.function, name)),
        }
    }

    /// Remove and return an integer-valued output by name.
    pub fn take_integer(&mut self, name: &str) -> Result<Vec<i32>> {
        match self.take(name) {
            Some(OutputValues::Integer(values)) => Ok(values),
            _ => Err(Error::unexpected_output(&self.function, name)),
        }
    }

    /// The sole output of a single-output real function.
    pub fn into_real(self) -> Result<Vec<f64>> {
        match self.outputs.into_iter().next() {
            Some((_, OutputValues::Real(values))) => Ok(values),
            _ => Err(Error::unexpected_output(&self.function, "real")),
        }
    }

    /// The sole output of a single-output integer function.
    pub fn into_integer(self) -> Result<Vec<i32>> {
        match self.outputs.into_iter().next() {
            Some((_, OutputValues::Integer(values))) => Ok(values),
            _ => Err(Error::unexpected_output(&self.function, "integer")),
        }
    }
}

/// Canonical form of a TA-Lib parameter name.
///
/// `optInTimePeriod`, `time_period` and `TimePeriod` all become `timeperiod`;
/// `outRealUpperBand` and `upper_band` become `upperband`; `inReal0` becomes `real0`.
pub fn normalize_name(name: &str) -> String {
    let lower: String = name
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect();
    let stripped = if let Some(rest) = lower.strip_prefix("optin") {
        rest
    } else if let Some(rest) = lower.strip_prefix("out") {
        match rest.strip_prefix("real") {
            Some(tail) if !tail.is_empty() => tail,
            _ => rest,
        }
    } else if let Some(rest) = lower.strip_prefix("in") {
        // Keep plain words such as "integer" intact.
        if rest.starts_with("real") || rest.starts_with("periods") || rest.starts_with("price") {
            rest
        } else {
            lower.as_str()
        }
    } else {
        lower.as_str()
    };
    stripped.to_string()
}
