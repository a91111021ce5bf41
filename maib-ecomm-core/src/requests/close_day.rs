use serde::Deserialize;

use crate::{
    errors::ValidationError,
    request::{Request, Values},
    types::{Command, TransactionResult},
};

/// Closes the business day (`-b`).
///
/// Must be run once a day; the recommended time is 23:59:00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseDay;

/// Response to a [`CloseDay`] request.
///
/// The counters and totals are available only when the result code begins
/// with 5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CloseDayResult {
    #[serde(rename = "RESULT")]
    pub result: Option<TransactionResult>,
    #[serde(rename = "RESULT_CODE")]
    pub result_code: u64,
    /// Number of credit transactions (max 10 digits).
    #[serde(rename = "FLD_074")]
    pub credit_transaction_number: u64,
    /// Number of credit reversals (max 10 digits).
    #[serde(rename = "FLD_075")]
    pub credit_reversal_number: u64,
    /// Number of debit transactions (max 10 digits).
    #[serde(rename = "FLD_076")]
    pub debit_transaction_number: u64,
    /// Number of debit reversals (max 10 digits).
    #[serde(rename = "FLD_077")]
    pub debit_reversal_number: u64,
    /// Total amount of credit transactions (max 16 digits).
    #[serde(rename = "FLD_086")]
    pub credit_transaction_amount: u64,
    /// Total amount of credit reversals (max 16 digits).
    #[serde(rename = "FLD_087")]
    pub credit_reversal_amount: u64,
    /// Total amount of debit transactions (max 16 digits).
    #[serde(rename = "FLD_088")]
    pub debit_transaction_amount: u64,
    /// Total amount of debit reversals (max 16 digits).
    #[serde(rename = "FLD_089")]
    pub debit_reversal_amount: u64,
}

impl Request for CloseDay {
    type Output = CloseDayResult;

    fn values(&self) -> Result<Values, ValidationError> {
        Ok(Values::with_command(Command::CloseDay))
    }
}
