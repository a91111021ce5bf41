//! Error types produced before and after a gateway exchange.
//!
//! None of these involve I/O: a [`ValidationError`] is raised before anything is
//! sent, a [`ParseError`] when a success body does not follow the `KEY: value`
//! format, and a [`DecodeError`] when a parsed response cannot be projected onto
//! a result struct.

use crate::types::PayloadField;

/// A request field failed validation. Raised before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed field {field}: {description}")]
pub struct ValidationError {
    /// Which field is malformed.
    pub field: PayloadField,
    /// Human-readable explanation of the requirement.
    pub description: &'static str,
}

impl ValidationError {
    pub fn new(field: PayloadField, description: &'static str) -> Self {
        ValidationError { field, description }
    }
}

/// Why a single line of a response body was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line doesn't split into exactly two parts on `": "`.
    #[error("wrong line format: \"{line}\"")]
    Format { line: String },

    /// A known numeric field holds something other than digits.
    #[error("wrong value type in \"{line}\": expected an unsigned integer")]
    NotAnInteger { line: String },

    /// A known numeric field holds more digits than fit in a `u64`.
    #[error("value in \"{line}\" does not fit an unsigned 64-bit integer")]
    Overflow { line: String },
}

/// A success-classified body could not be parsed.
///
/// Carries the raw body so the caller can inspect what the gateway sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse response: {source}")]
pub struct ParseError {
    /// Response body that couldn't be parsed.
    pub body: String,
    /// The offending line.
    #[source]
    pub source: LineError,
}

/// A parsed response could not be projected onto a result type.
#[derive(Debug, thiserror::Error)]
#[error("decode response: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);
