use bon::Builder;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, Currency, PayloadField, TransactionResult},
    validators,
};

/// Executes a recurring payment registered with
/// [`RegisterRecurring`](super::RegisterRecurring) (`-e`).
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ExecuteRecurring {
    pub amount: u64,
    #[builder(into)]
    pub currency: Currency,
    #[builder(into)]
    pub client_ip_address: String,
    #[builder(into)]
    pub description: Option<String>,
    /// Identifier of the recurring payment.
    #[builder(into)]
    pub biller_client_id: String,
}

/// Response to an [`ExecuteRecurring`] request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExecuteRecurringResult {
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

impl Request for ExecuteRecurring {
    type Output = ExecuteRecurringResult;

    fn values(&self) -> Result<Values, ValidationError> {
        let description = self.description.as_deref();

        validators::amount(self.amount, true)?;
        validators::currency(self.currency)?;
        validators::client_ip_address(&self.client_ip_address)?;
        validators::description(description.unwrap_or_default())?;
        validators::biller_client_id(&self.biller_client_id, true)?;

        let mut values = Values::with_command(Command::ExecuteRecurring);
        values
            .set(PayloadField::Amount.as_str(), self.amount)
            .set(PayloadField::Currency.as_str(), self.currency)
            .set(PayloadField::ClientIpAddress.as_str(), &self.client_ip_address)
            .set_non_empty(PayloadField::Description.as_str(), description)
            .set(PayloadField::BillerClientId.as_str(), &self.biller_client_id);
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        requests::fixtures::CLIENT_IP,
        response::{decode_response, parse_body},
    };

    fn valid() -> ExecuteRecurring {
        ExecuteRecurring::builder()
            .amount(1234)
            .currency(Currency::MDL)
            .client_ip_address(CLIENT_IP)
            .biller_client_id("biller")
            .build()
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            valid().values().unwrap().encode(),
            "amount=1234&biller_client_id=biller&client_ip_addr=127.0.0.1&command=e&currency=498"
        );
    }

    #[test]
    fn test_biller_client_id_required() {
        let request = ExecuteRecurring {
            biller_client_id: String::new(),
            ..valid()
        };
        let err = request.values().unwrap_err();

        assert_eq!(err.field, PayloadField::BillerClientId);
        assert_eq!(err.description, "empty string");
    }

    #[test]
    fn test_decode_result() {
        let body = "TRANSACTION_ID: abcdefghijklmnopqrstuvwxyz1=\nRESULT: DECLINED\nRESULT_CODE: 116\nRRN: 1\nAPPROVAL_CODE: 000123\n";
        let result: ExecuteRecurringResult = decode_response(&parse_body(body).unwrap()).unwrap();

        assert_eq!(result.transaction_id, "abcdefghijklmnopqrstuvwxyz1=");
        assert_eq!(result.result, Some(TransactionResult::Declined));
        assert_eq!(result.result_code, 116);
        assert_eq!(result.rrn, 1);
        assert_eq!(result.approval_code, 123);
    }
}
