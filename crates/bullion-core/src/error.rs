use thiserror::Error;

/// Validation and configuration errors exposed by `bullion-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("metal code cannot be empty")]
    EmptySymbol,
    #[error("metal code length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("metal code contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
    #[error("expected a single metal code, got a list: '{value}'")]
    MultipleSymbols { value: String },

    #[error("timestamp is not a recognized date/time: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("premium band percent must be finite and within [0, 100): {value}")]
    InvalidPremiumBand { value: f64 },
    #[error("rounding increment must be finite and greater than zero: {value}")]
    InvalidRoundingIncrement { value: f64 },
    #[error("unknown price token '{value}'")]
    UnknownToken { value: String },

    #[error("api base must be an http(s) URL: '{value}'")]
    InvalidApiBase { value: String },
    #[error("environment variable {name} has an invalid value: '{value}'")]
    InvalidEnvValue { name: &'static str, value: String },
}
