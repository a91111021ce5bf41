use std::{path::PathBuf, time::Duration};

use bon::Builder;

/// Settings of a [`Client`](crate::client::Client) using the HTTP transport.
///
/// ```
/// use std::time::Duration;
///
/// use maib_ecomm::config::Config;
///
/// let config = Config::builder()
///     .pfx_path("certificate.pfx")
///     .passphrase("secret")
///     .merchant_handler_endpoint("https://ecomm.maib.md:4499/ecomm2/MerchantHandler")
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert!(config.ca_certificate_path.is_none());
/// ```
#[derive(Builder, Clone)]
pub struct Config {
    /// Path to the PKCS#12 bundle with the merchant's key, certificate and the
    /// gateway CA chain.
    #[builder(into)]
    pub pfx_path: PathBuf,
    /// Passphrase of the bundle.
    #[builder(into)]
    pub passphrase: String,
    /// URL of the merchant handler, e.g.
    /// `https://maib.ecommerce.md:11440/ecomm01/MerchantHandler`.
    #[builder(into)]
    pub merchant_handler_endpoint: String,
    /// Additional PEM root certificate to trust.
    #[builder(into)]
    pub ca_certificate_path: Option<PathBuf>,
    /// Deadline for a whole request, from connecting to reading the body.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("pfx_path", &self.pfx_path)
            .field("passphrase", &"***")
            .field("merchant_handler_endpoint", &self.merchant_handler_endpoint)
            .field("ca_certificate_path", &self.ca_certificate_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_passphrase() {
        let config = Config::builder()
            .pfx_path("cert.pfx")
            .passphrase("hunter2")
            .merchant_handler_endpoint("https://localhost/ecomm")
            .build();

        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("cert.pfx"));
    }
}
