//! MAIB ECommerce core library.
//!
//! This library provides the I/O-free part of the MAIB ECommerce protocol:
//! request validation and encoding, the catalogue of gateway commands, and
//! parsing of the `KEY: value` responses. The HTTP client lives in the
//! `maib-ecomm` crate.

pub mod errors;
pub mod request;
pub mod requests;
pub mod response;
pub mod types;
pub mod validators;
