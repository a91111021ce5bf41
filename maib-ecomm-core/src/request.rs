//! The contract every gateway request implements.

use std::{collections::BTreeMap, fmt::Display};

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::{errors::ValidationError, types::Command};

/// Wire name of the parameter carrying the command tag.
pub const COMMAND_PARAM: &str = "command";

/// A payload that can be sent to the gateway.
///
/// Validation and encoding are one step: [`values`](Request::values) either
/// returns the complete set of wire parameters, or the first field that failed
/// validation. A request can never be encoded without being validated.
///
/// Implement this trait to send parameters the built-in requests don't cover,
/// e.g. by wrapping one of them:
///
/// ```
/// use maib_ecomm_core::{
///     errors::ValidationError,
///     request::{Request, Values},
///     requests::{RegisterTransaction, RegisterTransactionResult},
/// };
///
/// struct RegisterWithFlight {
///     inner: RegisterTransaction,
///     airline: String,
/// }
///
/// impl Request for RegisterWithFlight {
///     type Output = RegisterTransactionResult;
///
///     fn values(&self) -> Result<Values, ValidationError> {
///         let mut values = self.inner.values()?;
///         values.set("airline", &self.airline);
///         Ok(values)
///     }
/// }
/// ```
pub trait Request {
    /// Result struct the response of this request decodes into.
    type Output: DeserializeOwned;

    /// Validates the request and returns its wire parameters, always including
    /// `command`.
    fn values(&self) -> Result<Values, ValidationError>;
}

impl<R: Request + ?Sized> Request for &R {
    type Output = R::Output;

    fn values(&self) -> Result<Values, ValidationError> {
        (**self).values()
    }
}

/// Wire parameters of a request, sent as a URL querystring.
///
/// Keys are kept sorted so the encoded querystring is deterministic. Setting a
/// key twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(BTreeMap<String, String>);

impl Values {
    pub fn new() -> Self {
        Values(BTreeMap::new())
    }

    /// Starts a parameter set with the `command` tag already set.
    pub fn with_command(command: Command) -> Self {
        let mut values = Values::new();
        values.set_command(command);
        values
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Sets `key` only when `value` is present and non-empty.
    pub fn set_non_empty(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.insert(key.into(), value.to_string());
        }
        self
    }

    pub fn set_command(&mut self, command: Command) -> &mut Self {
        self.set(COMMAND_PARAM, command.tag())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL-encodes the parameters as `key=value` pairs joined by `&`, sorted
    /// by key. Spaces are encoded as `+`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (k, v) in iter {
            values.set(k, v);
        }
        values
    }
}
