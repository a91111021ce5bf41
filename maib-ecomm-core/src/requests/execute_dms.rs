use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, Currency, PayloadField, TransactionResult},
    validators,
};

/// Executes a DMS transaction (`-t`) after it was registered with
/// [`RegisterTransaction`](super::RegisterTransaction) (`-a`) and checked with
/// [`TransactionStatus`](super::TransactionStatus) (`-c`).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ExecuteDms {
    /// ID of the transaction. 28 characters in base64.
    #[builder(into)]
    pub transaction_id: String,
    /// Payment amount in minor units.
    pub amount: u64,
    #[builder(into)]
    pub currency: Currency,
    #[builder(into)]
    pub client_ip_address: String,
    #[builder(into)]
    pub description: Option<String>,
}

/// Response to an [`ExecuteDms`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecuteDmsResult {
    #[serde(rename = "RESULT")]
    pub result: Option<TransactionResult>,
    #[serde(rename = "RESULT_CODE")]
    pub result_code: u64,
    #[serde(rename = "RRN")]
    pub rrn: u64,
    #[serde(rename = "APPROVAL_CODE")]
    pub approval_code: u64,
    #[serde(rename = "CARD_NUMBER")]
    pub card_number: String,
}

impl Request for ExecuteDms {
    type Output = ExecuteDmsResult;

    fn values(&self) -> Result<Values, ValidationError> {
        let description = self.description.as_deref();

        validators::transaction_id(&self.transaction_id)?;
        validators::amount(self.amount, true)?;
        validators::currency(self.currency)?;
        validators::client_ip_address(&self.client_ip_address)?;
        validators::description(description.unwrap_or_default())?;

        let mut values = Values::with_command(Command::ExecuteDms);
        values
            .set(PayloadField::TransactionId.as_str(), &self.transaction_id)
            .set(PayloadField::Amount.as_str(), self.amount)
            .set(PayloadField::Currency.as_str(), self.currency)
            .set(PayloadField::ClientIpAddress.as_str(), &self.client_ip_address)
            .set_non_empty(PayloadField::Description.as_str(), description);
        Ok(values)
    }
}
