//! Field validators.
//!
//! Each function checks one field in isolation and returns a
//! [`ValidationError`] naming that field. Requests chain them with `?` in the
//! order their fields are declared, so the first failing field is the one
//! reported.

use std::net::IpAddr;

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};

use crate::{
    errors::ValidationError,
    types::{Currency, Language, PayloadField},
};

/// Largest amount accepted by the gateway: 12 digits in minor units.
pub const MAX_AMOUNT: u64 = 999_999_999_999;

pub const TRANSACTION_ID_LEN: usize = 28;
pub const MAX_DESCRIPTION_LEN: usize = 125;
pub const MAX_LANGUAGE_LEN: usize = 32;
pub const MAX_BILLER_CLIENT_ID_LEN: usize = 49;

/// Standard base64 that tolerates non-zero trailing bits, as gateway-issued
/// transaction ids may carry them.
const TRANSACTION_ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Verifies that a resolved command tag is exactly one character.
pub fn command(tag: &str) -> Result<(), ValidationError> {
    if tag.chars().count() != 1 {
        return Err(ValidationError::new(
            PayloadField::Command,
            "not 1 character",
        ));
    }
    Ok(())
}

/// Verifies that a transaction id is 28 characters of standard base64.
pub fn transaction_id(transaction_id: &str) -> Result<(), ValidationError> {
    if transaction_id.chars().count() != TRANSACTION_ID_LEN {
        return Err(ValidationError::new(
            PayloadField::TransactionId,
            "not 28 characters",
        ));
    }
    if TRANSACTION_ID_ENGINE.decode(transaction_id).is_err() {
        return Err(ValidationError::new(
            PayloadField::TransactionId,
            "not in base64",
        ));
    }
    Ok(())
}

/// Verifies that an amount has at most 12 digits; not 0, if required.
pub fn amount(amount: u64, required: bool) -> Result<(), ValidationError> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::new(
            PayloadField::Amount,
            "more than 12 digits",
        ));
    }
    if required && amount == 0 {
        return Err(ValidationError::new(
            PayloadField::Amount,
            "not a positive number",
        ));
    }
    Ok(())
}

/// Verifies that a currency is a 3 digit ISO 4217 numeric code.
pub fn currency(currency: Currency) -> Result<(), ValidationError> {
    if currency.0 > 999 {
        return Err(ValidationError::new(
            PayloadField::Currency,
            "invalid ISO 4217 3-number code",
        ));
    }
    Ok(())
}

/// Verifies that the address is an IPv4 or IPv6 literal.
pub fn client_ip_address(address: &str) -> Result<(), ValidationError> {
    address.parse::<IpAddr>().map(|_| ()).map_err(|_| {
        ValidationError::new(PayloadField::ClientIpAddress, "invalid IP address")
    })
}

/// Verifies that a description has at most 125 characters.
pub fn description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::new(
            PayloadField::Description,
            "more than 125 characters",
        ));
    }
    Ok(())
}

/// Verifies that a language is between 1 and 32 characters.
pub fn language(language: &Language) -> Result<(), ValidationError> {
    let len = language.as_str().chars().count();
    if len < 1 || len > MAX_LANGUAGE_LEN {
        return Err(ValidationError::new(
            PayloadField::Language,
            "not between 1 and 32 characters",
        ));
    }
    Ok(())
}

/// Verifies that a biller client id has at most 49 characters; not empty, if
/// required.
pub fn biller_client_id(biller_client_id: &str, required: bool) -> Result<(), ValidationError> {
    if biller_client_id.chars().count() > MAX_BILLER_CLIENT_ID_LEN {
        return Err(ValidationError::new(
            PayloadField::BillerClientId,
            "more than 49 characters",
        ));
    }
    if required && biller_client_id.is_empty() {
        return Err(ValidationError::new(
            PayloadField::BillerClientId,
            "empty string",
        ));
    }
    Ok(())
}

/// Verifies that an expiry is 4 digits in the form `MMYY`, with a month
/// between 1 and 12.
pub fn perspayee_expiry(expiry: &str) -> Result<(), ValidationError> {
    if expiry.len() != 4 || !expiry.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            PayloadField::PerspayeeExpiry,
            "not 4 digits",
        ));
    }
    // Four ASCII digits: both halves parse.
    let month: u8 = expiry[0..2].parse().unwrap_or_default();
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new(
            PayloadField::PerspayeeExpiry,
            "not a valid month",
        ));
    }
    Ok(())
}
