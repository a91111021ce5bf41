use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, PayloadField, TransactionResult},
    validators,
};

/// Deletes a recurring payment (`-x`).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecurring {
    /// Identifier of the recurring payment.
    #[builder(into)]
    pub biller_client_id: String,
}

/// Response to a [`DeleteRecurring`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteRecurringResult {
    #[serde(rename = "RESULT")]
    pub result: Option<TransactionResult>,
}

impl Request for DeleteRecurring {
    type Output = DeleteRecurringResult;

    fn values(&self) -> Result<Values, ValidationError> {
        validators::biller_client_id(&self.biller_client_id, true)?;

        let mut values = Values::with_command(Command::DeleteRecurring);
        values.set(PayloadField::BillerClientId.as_str(), &self.biller_client_id);
        Ok(values)
    }
}
