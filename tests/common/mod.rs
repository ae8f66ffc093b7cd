//! Shared test engine: records every call and answers with synthetic,
//! shuffled named outputs.

#![allow(dead_code)]

use std::sync::Mutex;

use talib_facade::native::normalize_name;
use talib_facade::{Engine, NativeCall, NativeOutputs, OptValue, OutputValues, Result, Tai};

/// What the engine saw for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub function: String,
    pub inputs: Vec<(String, usize)>,
    pub options: Vec<(String, OptValue)>,
}

impl RecordedCall {
    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn option(&self, name: &str) -> Option<OptValue> {
        let wanted = normalize_name(name);
        self.options
            .iter()
            .find(|(n, _)| normalize_name(n) == wanted)
            .map(|(_, v)| *v)
    }
}

/// Output columns returned for a function, in the order this engine emits
/// them. Multi-output functions are deliberately listed out of tuple order.
/// Each real column is filled with its listed marker value.
fn output_table(function: &str) -> Vec<(&'static str, f64)> {
    match function {
        "BBANDS" | "ACCBANDS" => vec![
            ("outRealLowerBand", 1.0),
            ("outRealUpperBand", 3.0),
            ("outRealMiddleBand", 2.0),
        ],
        "MACD" | "MACDEXT" | "MACDFIX" => vec![
            ("outMACDHist", 3.0),
            ("outMACDSignal", 2.0),
            ("outMACD", 1.0),
        ],
        "STOCH" => vec![("outSlowD", 2.0), ("outSlowK", 1.0)],
        "STOCHF" | "STOCHRSI" => vec![("outFastD", 2.0), ("outFastK", 1.0)],
        "AROON" => vec![("outAroonUp", 2.0), ("outAroonDown", 1.0)],
        "MAMA" => vec![("outFAMA", 2.0), ("outMAMA", 1.0)],
        "HT_PHASOR" => vec![("outQuadrature", 2.0), ("outInPhase", 1.0)],
        "HT_SINE" => vec![("outLeadSine", 2.0), ("outSine", 1.0)],
        _ => vec![("outReal", 1.0)],
    }
}

fn is_integer_function(function: &str) -> bool {
    function.starts_with("CDL") || function == "HT_TRENDMODE"
}

/// Mock [`Engine`] for exercising the facade without TA-Lib.
pub struct RecordingEngine {
    available: bool,
    calls: Mutex<Vec<RecordedCall>>,
    drop_output: Option<&'static str>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            available: true,
            calls: Mutex::new(Vec::new()),
            drop_output: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Leave one named output out of every response.
    pub fn dropping(output: &'static str) -> Self {
        Self {
            drop_output: Some(output),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("engine was never called")
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Engine for RecordingEngine {
    fn is_available(&self) -> bool {
        self.available
    }

    fn call(&self, call: &NativeCall<'_>) -> Result<NativeOutputs> {
        self.calls.lock().unwrap().push(RecordedCall {
            function: call.function().to_string(),
            inputs: call
                .inputs()
                .iter()
                .map(|(n, s)| (n.to_string(), s.len()))
                .collect(),
            options: call
                .options()
                .iter()
                .map(|(n, v)| (n.to_string(), *v))
                .collect(),
        });

        let len = call.len();
        let mut outputs = NativeOutputs::new(call.function());
        if is_integer_function(call.function()) {
            let mut values = vec![0; len];
            if let Some(last) = values.last_mut() {
                *last = 100;
            }
            outputs.push("outInteger", OutputValues::Integer(values));
            return Ok(outputs);
        }
        for (name, marker) in output_table(call.function()) {
            if self
                .drop_output
                .is_some_and(|d| normalize_name(d) == normalize_name(name))
            {
                continue;
            }
            outputs.push(name, OutputValues::Real(vec![marker; len]));
        }
        Ok(outputs)
    }
}

pub fn facade() -> Tai<RecordingEngine> {
    Tai::with_engine(RecordingEngine::new())
}

/// Deterministic OHLCV bars with high >= open/close >= low.
pub struct Bars {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

pub fn bars(len: usize) -> Bars {
    let close: Vec<f64> = (0..len)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1)
        .collect();
    let open: Vec<f64> = close
        .iter()
        .enumerate()
        .map(|(i, c)| if i == 0 { *c } else { close[i - 1] })
        .collect();
    let high = open
        .iter()
        .zip(&close)
        .map(|(o, c)| o.max(*c) + 1.0)
        .collect();
    let low = open
        .iter()
        .zip(&close)
        .map(|(o, c)| o.min(*c) - 1.0)
        .collect();
    let volume = (0..len).map(|i| 1_000.0 + (i % 7) as f64 * 150.0).collect();
    Bars {
        open,
        high,
        low,
        close,
        volume,
    }
}
