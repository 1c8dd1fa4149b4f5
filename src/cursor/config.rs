//! Per-invocation cursor configuration
//!
//! Supplied fresh on every call; the cursor never owns it.
//! Setters clamp into the input ranges the host node declares:
//! - `start` ∈ [0, 100]
//! - `end` ∈ [1, 100]
//! - `step` ∈ [1, 10]

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::CursorError;

/// Accepted range for `start`
pub const START_LIMITS: RangeInclusive<i64> = 0..=100;

/// Accepted range for `end`
pub const END_LIMITS: RangeInclusive<i64> = 1..=100;

/// Accepted range for `step`
pub const STEP_LIMITS: RangeInclusive<i64> = 1..=10;

fn clamp_into(value: i64, limits: &RangeInclusive<i64>) -> i64 {
    value.clamp(*limits.start(), *limits.end())
}

/// Traversal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Wrap back to the lower bound after passing the upper bound
    #[default]
    Cycle,

    /// Reverse direction at each bound
    Bounce,

    /// Advance to the upper bound and hold there
    Once,
}

impl Mode {
    /// Lowercase name as used by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cycle => "cycle",
            Mode::Bounce => "bounce",
            Mode::Once => "once",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cycle" => Ok(Mode::Cycle),
            "bounce" => Ok(Mode::Bounce),
            "once" => Ok(Mode::Once),
            other => Err(CursorError::UnknownMode(other.to_string())),
        }
    }
}

/// A number produced by the cursor.
///
/// Whole numbers are kept as integers so that a list like `1, 1.5, 2`
/// yields `1`, `1.5`, `2` rather than `1.0`, `1.5`, `2.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Integral value
    Int(i64),

    /// Value with a fractional part
    Float(f64),
}

impl Value {
    /// Normalize a float, collapsing a zero fractional part to `Int`.
    ///
    /// Non-finite input and magnitudes outside `i64` stay `Float`.
    pub fn from_f64(x: f64) -> Self {
        if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
            Value::Int(x as i64)
        } else {
            Value::Float(x)
        }
    }

    /// Widen to `f64`
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(i) => i as f64,
            Value::Float(x) => x,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::from_f64(x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Configuration for a single `advance` call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawCursorConfig"))]
pub struct CursorConfig {
    start: i64,
    end: i64,
    step: i64,
    mode: Mode,
    custom_values: String,
    value_list: Option<Vec<Value>>,
    reset_requested: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 10,
            step: 1,
            mode: Mode::Cycle,
            custom_values: String::new(),
            value_list: None,
            reset_requested: false,
        }
    }
}

/// Wire form of [`CursorConfig`]; every field goes back through the setters
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawCursorConfig {
    start: i64,
    end: i64,
    step: i64,
    mode: Mode,
    custom_values: String,
    value_list: Option<Vec<Value>>,
    reset_requested: bool,
}

#[cfg(feature = "serde")]
impl Default for RawCursorConfig {
    fn default() -> Self {
        let defaults = CursorConfig::default();
        Self {
            start: defaults.start,
            end: defaults.end,
            step: defaults.step,
            mode: defaults.mode,
            custom_values: defaults.custom_values,
            value_list: defaults.value_list,
            reset_requested: defaults.reset_requested,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawCursorConfig> for CursorConfig {
    fn from(raw: RawCursorConfig) -> Self {
        let config = CursorConfig::range(raw.start, raw.end, raw.step, raw.mode)
            .with_custom_values(raw.custom_values)
            .with_reset(raw.reset_requested);
        match raw.value_list {
            Some(values) => config.with_value_list(values),
            None => config,
        }
    }
}

impl CursorConfig {
    /// Host defaults: `0..=10`, step 1, cycle mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Range configuration in one call
    pub fn range(start: i64, end: i64, step: i64, mode: Mode) -> Self {
        Self::new()
            .with_start(start)
            .with_end(end)
            .with_step(step)
            .with_mode(mode)
    }

    /// Set the lower range bound (clamped into [`START_LIMITS`])
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = clamp_into(start, &START_LIMITS);
        self
    }

    /// Set the upper range bound (clamped into [`END_LIMITS`])
    pub fn with_end(mut self, end: i64) -> Self {
        self.end = clamp_into(end, &END_LIMITS);
        self
    }

    /// Set the step magnitude (clamped into [`STEP_LIMITS`])
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = clamp_into(step, &STEP_LIMITS);
        self
    }

    /// Set the traversal mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the comma-separated custom value text
    pub fn with_custom_values(mut self, text: impl Into<String>) -> Self {
        self.custom_values = text.into();
        self
    }

    /// Supply an explicit value list
    pub fn with_value_list(mut self, values: Vec<Value>) -> Self {
        self.value_list = Some(values);
        self
    }

    /// Force the cursor back to `start` on this call
    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset_requested = reset;
        self
    }

    /// Lower range bound
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Upper range bound as configured (before any custom-list override)
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Step magnitude
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Traversal mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Raw custom value text
    pub fn custom_values(&self) -> &str {
        &self.custom_values
    }

    /// Supplied value list, if any
    pub fn value_list(&self) -> Option<&[Value]> {
        self.value_list.as_deref()
    }

    /// Whether a reset was requested
    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }
}
