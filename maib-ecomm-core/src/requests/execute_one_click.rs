use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, Currency, PayloadField, TransactionResult},
    validators,
};

use super::params;

/// Executes a oneClick payment registered with
/// [`RegisterOneClick`](super::RegisterOneClick) (`-f`).
///
/// The client must then be redirected to the client handler to confirm the
/// payment.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ExecuteOneClick {
    pub amount: u64,
    #[builder(into)]
    pub currency: Currency,
    #[builder(into)]
    pub client_ip_address: String,
    #[builder(into)]
    pub description: Option<String>,
    /// Identifier of the oneClick payment.
    #[builder(into)]
    pub biller_client_id: String,
}

/// Response to an [`ExecuteOneClick`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecuteOneClickResult {
    #[serde(rename = "TRANSACTION_ID")]
    pub transaction_id: String,
    #[serde(rename = "RESULT")]
    pub result: Option<TransactionResult>,
    #[serde(rename = "RESULT_CODE")]
    pub result_code: u64,
    #[serde(rename = "RRN")]
    pub rrn: u64,
    #[serde(rename = "APPROVAL_CODE")]
    pub approval_code: u64,
}

impl Request for ExecuteOneClick {
    type Output = ExecuteOneClickResult;

    fn values(&self) -> Result<Values, ValidationError> {
        let description = self.description.as_deref();

        validators::amount(self.amount, true)?;
        validators::currency(self.currency)?;
        validators::client_ip_address(&self.client_ip_address)?;
        validators::description(description.unwrap_or_default())?;
        validators::biller_client_id(&self.biller_client_id, true)?;

        let mut values = Values::with_command(Command::ExecuteOneClick);
        values
            .set(PayloadField::Amount.as_str(), self.amount)
            .set(PayloadField::Currency.as_str(), self.currency)
            .set(PayloadField::ClientIpAddress.as_str(), &self.client_ip_address)
            .set_non_empty(PayloadField::Description.as_str(), description)
            .set(PayloadField::BillerClientId.as_str(), &self.biller_client_id)
            .set(params::ONE_CLICK, "Y");
        Ok(values)
    }
}
