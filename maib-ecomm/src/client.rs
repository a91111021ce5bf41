use std::time::Duration;

use http::StatusCode;
use tokio_util::sync::CancellationToken;
use url::Url;

use maib_ecomm_core::{
    request::{Request, Values},
    response::{ResponseMap, decode_response, parse_body},
};

use crate::{
    errors::{Error, GatewayError},
    transport::{RawResponse, Transport},
};

#[cfg(feature = "tracing")]
use maib_ecomm_core::request::COMMAND_PARAM;

#[cfg(feature = "http-client")]
use crate::{config::Config, errors::ConfigError, transport::HttpTransport};

/// Prefix of a body reporting a gateway-level failure.
const ERROR_PREFIX: &str = "error";

/// Sends requests to the merchant handler.
///
/// A client holds no state besides its endpoint and transport, and can be
/// shared between tasks.
#[derive(Debug, Clone)]
pub struct Client<T> {
    endpoint: Url,
    transport: T,
}

#[cfg(feature = "http-client")]
impl Client<HttpTransport> {
    /// Creates a client with the mutual TLS transport described by `config`.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.merchant_handler_endpoint)?;
        let transport = HttpTransport::from_config(&config)?;

        Ok(Client::with_transport(endpoint, transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(endpoint: Url, transport: T) -> Self {
        Client {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validates `request`, sends it and parses the response.
    ///
    /// Nothing is sent if validation fails. A non-200 status or a body
    /// starting with `error` is a [`GatewayError`]; any other body must parse.
    pub async fn send<R>(&self, request: &R) -> Result<ResponseMap, Error>
    where
        R: Request + ?Sized,
    {
        let values = request.values()?;
        self.exchange(values).await
    }

    /// Like [`send`](Client::send), but gives up with [`Error::Cancelled`]
    /// once `cancel` is triggered.
    pub async fn send_with_cancel<R>(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> Result<ResponseMap, Error>
    where
        R: Request + ?Sized,
    {
        let values = request.values()?;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Request to gateway cancelled");

                Err(Error::Cancelled)
            }
            result = self.exchange(values) => result,
        }
    }

    /// Like [`send`](Client::send), but gives up with [`Error::Timeout`] after
    /// `timeout`.
    pub async fn send_with_timeout<R>(
        &self,
        request: &R,
        timeout: Duration,
    ) -> Result<ResponseMap, Error>
    where
        R: Request + ?Sized,
    {
        let values = request.values()?;

        tokio::time::timeout(timeout, self.exchange(values))
            .await
            .map_err(|_| Error::Timeout)?
    }

    /// Sends `request` and decodes the response into its result struct.
    pub async fn execute<R>(&self, request: &R) -> Result<R::Output, Error>
    where
        R: Request + ?Sized,
    {
        let response = self.send(request).await?;
        Ok(decode_response(&response)?)
    }

    async fn exchange(&self, values: Values) -> Result<ResponseMap, Error> {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&values.encode()));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Sending command '{}' to gateway",
            values.get(COMMAND_PARAM).unwrap_or_default()
        );

        let response = self.transport.post(url).await.map_err(|err| {
            if self.transport.is_timeout(&err) {
                Error::Timeout
            } else {
                Error::Transport(Box::new(err))
            }
        })?;

        classify(response)
    }
}

/// Turns a completed exchange into a parsed response or an error.
fn classify(response: RawResponse) -> Result<ResponseMap, Error> {
    let RawResponse { status, body } = response;

    if status != StatusCode::OK || body.starts_with(ERROR_PREFIX) {
        #[cfg(feature = "tracing")]
        tracing::warn!("Gateway returned an error: status={status}, body='{body}'");

        return Err(GatewayError { status, body }.into());
    }

    let parsed = parse_body(&body);

    #[cfg(feature = "tracing")]
    match &parsed {
        Ok(map) => tracing::debug!("Gateway responded: status={status}, fields={}", map.len()),
        Err(err) => tracing::warn!("Failed to parse gateway response: {err}"),
    }

    Ok(parsed?)
}
