//! Errors returned by the client.
//!
//! Every call fails with one [`Error`]. The first three kinds are disjoint and
//! checked in order: [`ValidationError`] before anything is sent,
//! [`GatewayError`] when the gateway reports a failure, [`ParseError`] when a
//! success body is malformed. Network failures, cancellation and timeouts are
//! reported separately so callers can tell them apart from gateway answers.

use http::StatusCode;

pub use maib_ecomm_core::errors::*;

/// Boxed error of a [`Transport`](crate::transport::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The gateway completed the exchange but reported a failure, either with a
/// non-200 status or a body starting with `error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gateway returned {status}: {body}")]
pub struct GatewayError {
    pub status: StatusCode,
    /// Body returned by the gateway, verbatim.
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validate request: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("send request: {0}")]
    Transport(#[source] BoxError),

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out")]
    Timeout,
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self, Error::Gateway(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

/// A client could not be constructed from its [`Config`](crate::config::Config).
#[cfg(feature = "http-client")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read certificate: {0}")]
    ReadCertificate(#[source] std::io::Error),

    #[error("load certificate: {0}")]
    LoadCertificate(#[source] reqwest::Error),

    #[error("read CA certificate: {0}")]
    ReadCaCertificate(#[source] std::io::Error),

    #[error("load CA certificate: {0}")]
    LoadCaCertificate(#[source] reqwest::Error),

    #[error("build HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    #[error("parse merchant handler endpoint: {0}")]
    ParseEndpoint(#[from] url::ParseError),
}
