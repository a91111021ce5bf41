use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, PayloadField, TransactionResult},
    validators,
};

use super::params;

/// Reverses a transaction and returns all or part of the funds to the client
/// (`-r`).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ReverseTransaction {
    /// ID of the transaction. 28 characters in base64.
    #[builder(into)]
    pub transaction_id: String,
    /// Reversal amount in minor units.
    ///
    /// DMS authorizations can only be reversed in full. Other transactions may
    /// be reversed partially.
    pub amount: u64,
    /// Marks the reversal as caused by suspected fraud. Only full reversals
    /// are allowed with this flag.
    #[builder(default)]
    pub suspected_fraud: bool,
}

/// Response to a [`ReverseTransaction`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReverseTransactionResult {
    #[serde(rename = "RESULT")]
    pub result: Option<TransactionResult>,
    #[serde(rename = "RESULT_CODE")]
    pub result_code: u64,
}

impl Request for ReverseTransaction {
    type Output = ReverseTransactionResult;

    fn values(&self) -> Result<Values, ValidationError> {
        validators::transaction_id(&self.transaction_id)?;
        validators::amount(self.amount, true)?;

        let mut values = Values::with_command(Command::Reverse);
        values
            .set(PayloadField::TransactionId.as_str(), &self.transaction_id)
            .set(PayloadField::Amount.as_str(), self.amount);
        if self.suspected_fraud {
            values.set(params::SUSPECTED_FRAUD, "yes");
        }
        Ok(values)
    }
}
