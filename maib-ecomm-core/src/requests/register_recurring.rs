use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, Currency, Language, PayloadField},
    validators,
};

use super::params;

/// Transaction used to register a recurring payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegisterRecurringType {
    /// Registers with an SMS transaction (`-z`).
    #[default]
    Sms,
    /// Registers with a DMS transaction (`-d`), to be executed with
    /// [`ExecuteDms`](super::ExecuteDms).
    Dms,
}

/// Resolves the command of a recurring registration.
///
/// A zero amount always registers without a first payment (`-p`), whatever
/// the declared type.
pub fn resolve_command(transaction_type: RegisterRecurringType, amount: u64) -> Command {
    if amount == 0 {
        return Command::RegisterPerspayeeWithoutPayment;
    }
    match transaction_type {
        RegisterRecurringType::Sms => Command::RegisterPerspayeeSms,
        RegisterRecurringType::Dms => Command::RegisterPerspayeeDms,
    }
}

/// Creates a new recurring payment.
///
/// With a non-zero amount the first payment is made right away and should be
/// confirmed with [`TransactionStatus`](super::TransactionStatus). With a zero
/// amount only the card is registered.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct RegisterRecurring {
    /// Transaction type. Defaults to SMS. Ignored when `amount` is 0.
    #[builder(default)]
    pub transaction_type: RegisterRecurringType,
    /// Payment amount in minor units. 0 registers without a first payment.
    #[builder(default)]
    pub amount: u64,
    #[builder(into)]
    pub currency: Currency,
    #[builder(into)]
    pub client_ip_address: String,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub language: Language,
    /// Identifier of the recurring payment. If not set, the resulting
    /// `TRANSACTION_ID` becomes the identifier.
    #[builder(into)]
    pub biller_client_id: Option<String>,
    /// Validity limit of the recurring payment, `MMYY`.
    #[builder(into)]
    pub perspayee_expiry: String,
    /// Update the recurring payment registered under `biller_client_id`
    /// instead of creating a new one.
    #[builder(default)]
    pub overwrite_existing: bool,
}

/// Response to a [`RegisterRecurring`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterRecurringResult {
    #[serde(rename = "TRANSACTION_ID")]
    pub transaction_id: String,
}

impl Request for RegisterRecurring {
    type Output = RegisterRecurringResult;

    fn values(&self) -> Result<Values, ValidationError> {
        let command = resolve_command(self.transaction_type, self.amount);
        let with_payment = command != Command::RegisterPerspayeeWithoutPayment;
        let description = self.description.as_deref();
        let biller_client_id = self.biller_client_id.as_deref();

        validators::command(command.tag())?;
        validators::amount(self.amount, with_payment)?;
        validators::currency(self.currency)?;
        validators::client_ip_address(&self.client_ip_address)?;
        validators::description(description.unwrap_or_default())?;
        validators::language(&self.language)?;
        validators::biller_client_id(biller_client_id.unwrap_or_default(), false)?;
        validators::perspayee_expiry(&self.perspayee_expiry)?;

        let mut values = Values::with_command(command);
        values
            .set(PayloadField::Currency.as_str(), self.currency)
            .set(PayloadField::ClientIpAddress.as_str(), &self.client_ip_address)
            .set_non_empty(PayloadField::Description.as_str(), description)
            .set(PayloadField::Language.as_str(), &self.language)
            .set_non_empty(PayloadField::BillerClientId.as_str(), biller_client_id)
            .set(PayloadField::PerspayeeExpiry.as_str(), &self.perspayee_expiry);
        if with_payment {
            values.set(PayloadField::Amount.as_str(), self.amount);
        }
        if self.overwrite_existing {
            values.set(params::PERSPAYEE_OVERWRITE, 1);
        } else {
            values.set(params::PERSPAYEE_GEN, 1);
        }
        Ok(values)
    }
}
