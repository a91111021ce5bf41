//! Status values reported in the `RESULT` and `RESULT_PS` response fields.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Value of the `RESULT` field.
///
/// Values not listed here are preserved in [`TransactionResult::Other`] so that a
/// new gateway status never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionResult {
    /// The transaction has successfully completed.
    Ok,
    /// The transaction has failed.
    Failed,
    /// The transaction is registered, the client didn't enter card data yet.
    Created,
    /// The transaction is not complete yet.
    Pending,
    /// The transaction was declined.
    Declined,
    /// The transaction was reversed.
    Reversed,
    /// The transaction was reversed by autoreversal.
    AutoReversed,
    /// The transaction has timed out.
    Timeout,
    Other(String),
}

impl TransactionResult {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionResult::Ok => "OK",
            TransactionResult::Failed => "FAILED",
            TransactionResult::Created => "CREATED",
            TransactionResult::Pending => "PENDING",
            TransactionResult::Declined => "DECLINED",
            TransactionResult::Reversed => "REVERSED",
            TransactionResult::AutoReversed => "AUTOREVERSED",
            TransactionResult::Timeout => "TIMEOUT",
            TransactionResult::Other(s) => s,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, TransactionResult::Ok)
    }
}

impl From<String> for TransactionResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OK" => TransactionResult::Ok,
            "FAILED" => TransactionResult::Failed,
            "CREATED" => TransactionResult::Created,
            "PENDING" => TransactionResult::Pending,
            "DECLINED" => TransactionResult::Declined,
            "REVERSED" => TransactionResult::Reversed,
            "AUTOREVERSED" => TransactionResult::AutoReversed,
            "TIMEOUT" => TransactionResult::Timeout,
            _ => TransactionResult::Other(value),
        }
    }
}

impl From<TransactionResult> for String {
    fn from(value: TransactionResult) -> Self {
        match value {
            TransactionResult::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for TransactionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `RESULT_PS` field, the Payment Server interpretation of a
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentServerResult {
    /// Registered, payment not completed yet.
    Active,
    /// Payment completed successfully.
    Finished,
    /// Payment was cancelled.
    Cancelled,
    /// Payment was returned.
    Returned,
    Other(String),
}

impl PaymentServerResult {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentServerResult::Active => "ACTIVE",
            PaymentServerResult::Finished => "FINISHED",
            PaymentServerResult::Cancelled => "CANCELLED",
            PaymentServerResult::Returned => "RETURNED",
            PaymentServerResult::Other(s) => s,
        }
    }
}

impl From<String> for PaymentServerResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACTIVE" => PaymentServerResult::Active,
            "FINISHED" => PaymentServerResult::Finished,
            "CANCELLED" => PaymentServerResult::Cancelled,
            "RETURNED" => PaymentServerResult::Returned,
            _ => PaymentServerResult::Other(value),
        }
    }
}

impl From<PaymentServerResult> for String {
    fn from(value: PaymentServerResult) -> Self {
        match value {
            PaymentServerResult::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for PaymentServerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_known_and_unknown_results() {
        let ok: TransactionResult = serde_json::from_value(json!("OK")).unwrap();
        assert!(ok.is_ok());

        let auto: TransactionResult = serde_json::from_value(json!("AUTOREVERSED")).unwrap();
        assert_eq!(auto, TransactionResult::AutoReversed);

        let other: TransactionResult = serde_json::from_value(json!("SOMETHING_NEW")).unwrap();
        assert_eq!(other, TransactionResult::Other("SOMETHING_NEW".to_string()));
        assert_eq!(other.to_string(), "SOMETHING_NEW");
    }

    #[test]
    fn test_payment_server_result_serializes_as_wire_value() {
        let value = serde_json::to_value(PaymentServerResult::Finished).unwrap();
        assert_eq!(value, json!("FINISHED"));
    }
}
