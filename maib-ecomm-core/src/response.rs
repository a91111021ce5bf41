//! Parsing of gateway responses.
//!
//! The gateway answers with `text/plain`, one `KEY: value` pair per line. The
//! body carries no type information, so the type of each value is decided by
//! its key alone: keys in [`NUMERIC_FIELDS`] hold unsigned integers, everything
//! else is text. Keys are normalized to ASCII upper case before the lookup, so
//! `fld_074` and `FLD_074` are the same field.
//!
//! ```
//! use maib_ecomm_core::{
//!     requests::RegisterTransactionResult,
//!     response::{decode_response, parse_body},
//! };
//!
//! let map = parse_body("TRANSACTION_ID: abcdefghijklmnopqrstuvwxyz1=\n").unwrap();
//! let result: RegisterTransactionResult = decode_response(&map).unwrap();
//! assert_eq!(result.transaction_id, "abcdefghijklmnopqrstuvwxyz1=");
//! ```

use std::fmt::Display;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    errors::{DecodeError, LineError, ParseError},
    types::Record,
};

/// Separator between key and value on each line.
pub const SEPARATOR: &str = ": ";

/// Fields that always hold an unsigned integer, in normalized (upper) case.
pub const NUMERIC_FIELDS: [&str; 11] = [
    "RESULT_CODE",
    "RRN",
    "APPROVAL_CODE",
    // Credit / debit transaction and reversal counters.
    "FLD_074",
    "FLD_075",
    "FLD_076",
    "FLD_077",
    // Credit / debit transaction and reversal amount totals.
    "FLD_086",
    "FLD_087",
    "FLD_088",
    "FLD_089",
];

/// A single value of a parsed response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Integer(u64),
}

impl ResponseValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            ResponseValue::Integer(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ResponseValue::Integer(i) => Some(*i),
            ResponseValue::Text(_) => None,
        }
    }
}

impl Display for ResponseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseValue::Text(s) => f.write_str(s),
            ResponseValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<u64> for ResponseValue {
    fn from(value: u64) -> Self {
        ResponseValue::Integer(value)
    }
}

/// A parsed response: normalized field name to value.
pub type ResponseMap = Record<ResponseValue>;

/// Returns whether values under `key` are integers. `key` must already be
/// normalized.
pub fn is_numeric_field(key: &str) -> bool {
    NUMERIC_FIELDS.contains(&key)
}

/// Parses a response body into a [`ResponseMap`].
///
/// Empty lines are skipped. Any line that doesn't split into exactly two parts
/// on `": "`, or with non-digit text under a numeric key, fails the whole
/// parse. If a key repeats,
/// the last value wins.
pub fn parse_body(body: &str) -> Result<ResponseMap, ParseError> {
    parse_lines(body).map_err(|source| ParseError {
        body: body.to_string(),
        source,
    })
}

fn parse_lines(body: &str) -> Result<ResponseMap, LineError> {
    let mut result = ResponseMap::new();
    for line in body.lines().filter(|l| !l.is_empty()) {
        let (key, value) = line
            .split_once(SEPARATOR)
            .filter(|(_, value)| !value.contains(SEPARATOR))
            .ok_or_else(|| LineError::Format {
                line: line.to_string(),
            })?;

        let key = key.to_ascii_uppercase();
        let value = parse_field(&key, value, line)?;

        result.insert(key, value);
    }
    Ok(result)
}

/// Types a value by its key.
fn parse_field(key: &str, value: &str, line: &str) -> Result<ResponseValue, LineError> {
    if !is_numeric_field(key) {
        return Ok(ResponseValue::Text(value.to_string()));
    }
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::NotAnInteger {
            line: line.to_string(),
        });
    }
    // Only digits: parsing can fail on overflow alone.
    value
        .parse()
        .map(ResponseValue::Integer)
        .map_err(|_| LineError::Overflow {
            line: line.to_string(),
        })
}

/// Projects a parsed response onto a result struct.
///
/// Keys the result doesn't declare are ignored and fields missing from the
/// response keep their default. Only a value of the wrong type under a declared
/// key fails decoding.
pub fn decode_response<R: DeserializeOwned>(response: &ResponseMap) -> Result<R, DecodeError> {
    let object = response
        .iter()
        .map(|(k, v)| {
            let value = match v {
                ResponseValue::Text(s) => serde_json::Value::String(s.clone()),
                ResponseValue::Integer(i) => serde_json::Value::from(*i),
            };
            (k.clone(), value)
        })
        .collect::<serde_json::Map<_, _>>();

    Ok(serde_json::from_value(serde_json::Value::Object(object))?)
}
