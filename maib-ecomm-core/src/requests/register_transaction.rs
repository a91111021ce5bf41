use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, Currency, Language, PayloadField},
    validators,
};

/// Type of a transaction created with [`RegisterTransaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegisterTransactionType {
    /// Single Message System (`-v`). Executed immediately, should be confirmed
    /// with [`TransactionStatus`](super::TransactionStatus).
    #[default]
    Sms,
    /// Dual Message System (`-a`). Should be confirmed with
    /// [`TransactionStatus`](super::TransactionStatus) and executed with
    /// [`ExecuteDms`](super::ExecuteDms).
    Dms,
}

impl RegisterTransactionType {
    pub fn command(self) -> Command {
        match self {
            RegisterTransactionType::Sms => Command::RegisterSms,
            RegisterTransactionType::Dms => Command::RegisterDms,
        }
    }
}

/// Creates a new SMS (`-v`) or DMS (`-a`) transaction.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct RegisterTransaction {
    /// Transaction type. Defaults to SMS.
    #[builder(default)]
    pub transaction_type: RegisterTransactionType,
    /// Payment amount in minor units, e.g. `199` with [`Currency::USD`] is $1.99.
    pub amount: u64,
    #[builder(into)]
    pub currency: Currency,
    /// Client's IP address, like `"127.0.0.1"`.
    #[builder(into)]
    pub client_ip_address: String,
    /// Transaction details. Optional.
    #[builder(into)]
    pub description: Option<String>,
    /// Language of the bank payment page.
    #[builder(into)]
    pub language: Language,
}

/// Response to a [`RegisterTransaction`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterTransactionResult {
    /// ID of the created transaction. 28 characters in base64.
    #[serde(rename = "TRANSACTION_ID")]
    pub transaction_id: String,
}

impl Request for RegisterTransaction {
    type Output = RegisterTransactionResult;

    fn values(&self) -> Result<Values, ValidationError> {
        let command = self.transaction_type.command();
        let description = self.description.as_deref();

        validators::command(command.tag())?;
        validators::amount(self.amount, true)?;
        validators::currency(self.currency)?;
        validators::client_ip_address(&self.client_ip_address)?;
        validators::description(description.unwrap_or_default())?;
        validators::language(&self.language)?;

        let mut values = Values::with_command(command);
        values
            .set(PayloadField::Amount.as_str(), self.amount)
            .set(PayloadField::Currency.as_str(), self.currency)
            .set(PayloadField::ClientIpAddress.as_str(), &self.client_ip_address)
            .set_non_empty(PayloadField::Description.as_str(), description)
            .set(PayloadField::Language.as_str(), &self.language);
        Ok(values)
    }
}
