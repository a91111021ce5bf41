use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, PayloadField, PaymentServerResult, TransactionResult},
    validators,
};

/// Returns the status of a transaction (`-c`).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct TransactionStatus {
    /// ID of the transaction. 28 characters in base64.
    #[builder(into)]
    pub transaction_id: String,
    /// Client's IP address, like `"127.0.0.1"`.
    #[builder(into)]
    pub client_ip_address: String,
}

/// Response to a [`TransactionStatus`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionStatusResult {
    #[serde(rename = "RESULT")]
    pub result: Option<TransactionResult>,
    #[serde(rename = "RESULT_PS")]
    pub result_ps: Option<PaymentServerResult>,
    /// Result code returned from Card Suite FO (3 digits).
    #[serde(rename = "RESULT_CODE")]
    pub result_code: u64,
    /// 3D Secure status.
    #[serde(rename = "3DSECURE")]
    pub three_d_secure: String,
    #[serde(rename = "3DSECURE_REASON")]
    pub three_d_secure_reason: String,
    /// Retrieval reference number returned from Card Suite FO.
    #[serde(rename = "RRN")]
    pub rrn: u64,
    /// Approval code returned from Card Suite FO (max 6 digits).
    #[serde(rename = "APPROVAL_CODE")]
    pub approval_code: u64,
    /// Masked card number.
    #[serde(rename = "CARD_NUMBER")]
    pub card_number: String,
    #[serde(rename = "AAV")]
    pub aav: String,
    /// PAR value identifying an account.
    #[serde(rename = "PAYMENT_ACCOUNT_REFERENCE")]
    pub payment_account_reference: String,
    /// Recurring payment id. Set only for recurring and oneClick transactions.
    #[serde(rename = "RECC_PMNT_ID")]
    pub recurring_payment_id: String,
    /// Recurring payment expiry, `MMYY`. Set only for recurring and oneClick
    /// transactions.
    #[serde(rename = "RECC_PMNT_EXPIRY")]
    pub recurring_payment_expiry: String,
}

impl Request for TransactionStatus {
    type Output = TransactionStatusResult;

    fn values(&self) -> Result<Values, ValidationError> {
        validators::transaction_id(&self.transaction_id)?;
        validators::client_ip_address(&self.client_ip_address)?;

        let mut values = Values::with_command(Command::TransactionStatus);
        values
            .set(PayloadField::TransactionId.as_str(), &self.transaction_id)
            .set(PayloadField::ClientIpAddress.as_str(), &self.client_ip_address);
        Ok(values)
    }
}
