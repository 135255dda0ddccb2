//! Request model shared by every front-end.

use serde::{Deserialize, Serialize};

use crate::color::ColorFormat;

/// Mode-specific parameters.
///
/// A tagged union over the six request kinds, exhaustively matched by the
/// engine, so adding a mode is a compile-time-checked change. Serde defaults
/// mirror the CLI defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    Number {
        #[serde(default = "default_int_min")]
        min: i64,
        #[serde(default = "default_int_max")]
        max: i64,
        #[serde(default)]
        exclude: Vec<i64>,
    },
    Float {
        #[serde(default)]
        min: f64,
        #[serde(default = "default_float_max")]
        max: f64,
        #[serde(default = "default_decimals")]
        decimals: usize,
    },
    Color {
        #[serde(default)]
        format: ColorFormat,
    },
    String {
        #[serde(default = "default_length")]
        length: usize,
        #[serde(default = "default_pattern")]
        pattern: String,
        #[serde(default)]
        exclude_chars: Vec<char>,
    },
    Custom {
        template: String,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        unique: bool,
    },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Number { .. } => "number",
            Mode::Float { .. } => "float",
            Mode::Color { .. } => "color",
            Mode::String { .. } => "string",
            Mode::Custom { .. } => "custom",
            Mode::List { .. } => "list",
        }
    }
}

/// One generation invocation: a mode plus how many values to produce.
/// Immutable once constructed; created per call and discarded after use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(flatten)]
    pub mode: Mode,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_int_min() -> i64 {
    1
}

fn default_int_max() -> i64 {
    100
}

fn default_float_max() -> f64 {
    1.0
}

fn default_decimals() -> usize {
    2
}

fn default_length() -> usize {
    10
}

fn default_pattern() -> String {
    "alphanumeric".to_string()
}

fn default_count() -> usize {
    1
}
