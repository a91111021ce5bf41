//! # MAIB ECommerce
//!
//! A client for the MAIB ECommerce payment gateway.
//!
//! The gateway takes the parameters of every command as a query string over
//! mutual TLS, and answers with `text/plain` lines of `KEY: value`. This crate
//! validates and encodes requests, sends them and parses the answers into
//! typed results.
//!
//! ## Crate Layout
//!
//! - **[`client`]**: The [`Client`] sending requests, with cancellation and
//!   timeout support.
//! - **[`config`]**: Certificate and endpoint settings of the HTTP client.
//! - **[`transport`]**: The [`Transport`](transport::Transport) trait and its
//!   mutual TLS implementation.
//! - **[`requests`]**: Every gateway command and its result struct.
//! - **[`request`]**: The [`Request`](request::Request) trait, to send
//!   parameters the built-in requests don't cover.
//! - **[`response`]**: The response parser and the result decoder.
//! - **[`errors`]**: Errors returned by the client.
//!
//! ## Registering a Transaction
//!
//! ```no_run
//! use maib_ecomm::{
//!     Client, Config,
//!     requests::{RegisterTransaction, TransactionStatus},
//!     types::{Currency, Language},
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     Config::builder()
//!         .pfx_path("certificate.pfx")
//!         .passphrase("secret")
//!         .merchant_handler_endpoint("https://maib.ecommerce.md:11440/ecomm01/MerchantHandler")
//!         .build(),
//! )?;
//!
//! let registered = client
//!     .execute(
//!         &RegisterTransaction::builder()
//!             .amount(1000)
//!             .currency(Currency::EUR)
//!             .client_ip_address("127.0.0.1")
//!             .description("10 EUR will be charged")
//!             .language(Language::ENGLISH)
//!             .build(),
//!     )
//!     .await?;
//!
//! // Redirect the client to the client handler with `registered.transaction_id`,
//! // then check the outcome.
//! let status = client
//!     .execute(
//!         &TransactionStatus::builder()
//!             .transaction_id(registered.transaction_id)
//!             .client_ip_address("127.0.0.1")
//!             .build(),
//!     )
//!     .await?;
//!
//! println!("{:?}", status.result);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Requests
//!
//! Sending a command or parameter this crate doesn't know about only takes a
//! [`Request`](request::Request) implementation. The raw response is returned
//! by [`Client::send`]:
//!
//! ```no_run
//! use maib_ecomm::{
//!     Client,
//!     errors::ValidationError,
//!     request::{Request, Values},
//!     requests::CloseDayResult,
//!     transport::HttpTransport,
//!     types::Command,
//! };
//!
//! struct CloseDayTagged;
//!
//! impl Request for CloseDayTagged {
//!     type Output = CloseDayResult;
//!
//!     fn values(&self) -> Result<Values, ValidationError> {
//!         let mut values = Values::with_command(Command::CloseDay);
//!         values.set("terminal", "T1");
//!         Ok(values)
//!     }
//! }
//!
//! # async fn run(client: Client<HttpTransport>) -> Result<(), maib_ecomm::errors::Error> {
//! let response = client.send(&CloseDayTagged).await?;
//! println!("{:?}", response.get("RESULT"));
//! # Ok(())
//! # }
//! ```

pub mod request {
    pub use maib_ecomm_core::request::*;
}

pub mod requests {
    pub use maib_ecomm_core::requests::*;
}

pub mod response {
    pub use maib_ecomm_core::response::*;
}

pub mod types {
    pub use maib_ecomm_core::types::*;
}

pub mod validators {
    pub use maib_ecomm_core::validators::*;
}

pub mod client;
pub mod config;
pub mod errors;
pub mod transport;

pub use client::Client;
pub use config::Config;
