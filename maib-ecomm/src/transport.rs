//! How requests reach the gateway.

use http::StatusCode;
use url::Url;

/// A completed HTTP exchange, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }
}

/// Sends a request URL, with the parameters already in its query string, to
/// the gateway.
///
/// [`HttpTransport`] is the production implementation. Implement this trait to
/// route requests elsewhere, e.g. through a proxy or to a test double.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn post(&self, url: Url) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;

    /// Whether `error` means the transport gave up waiting for the gateway.
    fn is_timeout(&self, _error: &Self::Error) -> bool {
        false
    }
}

#[cfg(feature = "http-client")]
pub use http_client::HttpTransport;

#[cfg(feature = "http-client")]
mod http_client {
    use reqwest::{Certificate, Identity, tls};
    use url::Url;

    use super::{RawResponse, Transport};
    use crate::{config::Config, errors::ConfigError};

    /// Mutual TLS transport over `reqwest`.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
    }

    impl HttpTransport {
        /// Builds a transport presenting the PKCS#12 identity from `config`.
        ///
        /// TLS 1.2 is the lowest accepted version.
        pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
            let pfx = std::fs::read(&config.pfx_path).map_err(ConfigError::ReadCertificate)?;
            let identity = Identity::from_pkcs12_der(&pfx, &config.passphrase)
                .map_err(ConfigError::LoadCertificate)?;

            let mut builder = reqwest::Client::builder()
                .use_native_tls()
                .identity(identity)
                .min_tls_version(tls::Version::TLS_1_2);

            if let Some(path) = &config.ca_certificate_path {
                let pem = std::fs::read(path).map_err(ConfigError::ReadCaCertificate)?;
                let ca = Certificate::from_pem(&pem).map_err(ConfigError::LoadCaCertificate)?;
                builder = builder.add_root_certificate(ca);
            }
            if let Some(timeout) = config.timeout {
                builder = builder.timeout(timeout);
            }

            let client = builder.build().map_err(ConfigError::BuildClient)?;
            Ok(HttpTransport { client })
        }

        /// Wraps an already configured `reqwest` client.
        pub fn from_client(client: reqwest::Client) -> Self {
            HttpTransport { client }
        }
    }

    impl Transport for HttpTransport {
        type Error = reqwest::Error;

        async fn post(&self, url: Url) -> Result<RawResponse, Self::Error> {
            let response = self.client.post(url).send().await?;
            let status = response.status();
            let body = response.text().await?;

            Ok(RawResponse { status, body })
        }

        fn is_timeout(&self, error: &Self::Error) -> bool {
            error.is_timeout()
        }
    }
}
