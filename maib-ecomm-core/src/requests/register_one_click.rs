use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, Currency, Language, PayloadField},
    validators,
};

use super::params;

/// Transaction used to register a oneClick payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegisterOneClickType {
    /// Registers with an SMS transaction (`-z`), to be confirmed with
    /// [`TransactionStatus`](super::TransactionStatus).
    #[default]
    Sms,
    /// Registers the card without a transaction (`-p`).
    WithoutPayment,
}

impl RegisterOneClickType {
    pub fn command(self) -> Command {
        match self {
            RegisterOneClickType::Sms => Command::RegisterPerspayeeSms,
            RegisterOneClickType::WithoutPayment => Command::RegisterPerspayeeWithoutPayment,
        }
    }
}

/// Creates a new oneClick payment.
///
/// Like a recurring payment, this saves the client's card. Unlike one, a
/// oneClick payment can't be executed without the client: they have to be
/// redirected to the client handler to confirm every payment.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct RegisterOneClick {
    #[builder(default)]
    pub transaction_type: RegisterOneClickType,
    /// Payment amount in minor units. Ignored without payment.
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
    /// Identifier of the oneClick payment. If not set, the resulting
    /// `TRANSACTION_ID` becomes the identifier.
    #[builder(into)]
    pub biller_client_id: Option<String>,
    /// Validity limit of the oneClick payment, `MMYY`.
    #[builder(into)]
    pub perspayee_expiry: String,
    /// Update the oneClick payment registered under `biller_client_id`
    /// instead of creating a new one.
    #[builder(default)]
    pub overwrite_existing: bool,
    /// Show a checkbox on the client handler. The card is saved only if the
    /// client checks it.
    #[builder(default)]
    pub ask_save_card_data: bool,
}

/// Response to a [`RegisterOneClick`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterOneClickResult {
    #[serde(rename = "TRANSACTION_ID")]
    pub transaction_id: String,
}

impl Request for RegisterOneClick {
    type Output = RegisterOneClickResult;

    fn values(&self) -> Result<Values, ValidationError> {
        let command = self.transaction_type.command();
        let with_payment = self.transaction_type != RegisterOneClickType::WithoutPayment;
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
            .set(PayloadField::PerspayeeExpiry.as_str(), &self.perspayee_expiry)
            .set(params::ONE_CLICK, "Y");
        if with_payment {
            values.set(PayloadField::Amount.as_str(), self.amount);
        }
        if self.ask_save_card_data {
            values.set(params::ASK_SAVE_CARD_DATA, "True");
        }
        if self.overwrite_existing {
            values.set(params::PERSPAYEE_OVERWRITE, 1);
        } else {
            values.set(params::PERSPAYEE_GEN, 1);
        }
        Ok(values)
    }
}
