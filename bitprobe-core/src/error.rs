//! Error types for bitprobe

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("this doesn't seem like a number: {0}")]
    InvalidInput(String),

    #[error("should have {expected} input(s), got {actual}: {args:?}")]
    Arity {
        expected: usize,
        actual: usize,
        args: Vec<String>,
    },

    #[error("{command} does not support {actual} args")]
    UnsupportedArity { command: String, actual: usize },

    #[error("couldn't parse bitfield '{spec}' ({detail})")]
    SpecParse { spec: String, detail: String },

    #[error("bit field has total width {spec_bits}, but {token} is a {value_bits}-bit number")]
    WidthMismatch {
        spec_bits: u32,
        value_bits: u32,
        token: String,
    },

    #[error("no option with name {key}; try:\n{info}")]
    UnknownOption { key: String, info: String },

    #[error("invalid value '{value}' for option {key}: {reason}")]
    InvalidOptionValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("cannot infer a bit width from {0}; set n=<bits> explicitly")]
    WidthInference(i128),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
