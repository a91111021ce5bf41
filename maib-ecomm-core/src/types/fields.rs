//! Names of request fields and gateway commands, as they appear on the wire.

use std::fmt::Display;

/// Wire name of a validated request field. Reported in
/// [`ValidationError`](crate::errors::ValidationError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadField {
    TransactionId,
    Amount,
    Currency,
    ClientIpAddress,
    Description,
    Language,
    BillerClientId,
    PerspayeeExpiry,
    Command,
}

impl PayloadField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PayloadField::TransactionId => "trans_id",
            PayloadField::Amount => "amount",
            PayloadField::Currency => "currency",
            PayloadField::ClientIpAddress => "client_ip_addr",
            PayloadField::Description => "description",
            PayloadField::Language => "language",
            PayloadField::BillerClientId => "biller_client_id",
            PayloadField::PerspayeeExpiry => "perspayee_expiry",
            PayloadField::Command => "command",
        }
    }
}

impl Display for PayloadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every command understood by the gateway, with its single-letter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `-v`: register an SMS transaction.
    RegisterSms,
    /// `-a`: register a DMS authorization.
    RegisterDms,
    /// `-c`: query transaction status.
    TransactionStatus,
    /// `-t`: execute a DMS transaction.
    ExecuteDms,
    /// `-r`: reverse a transaction.
    Reverse,
    /// `-b`: close the business day.
    CloseDay,
    /// `-z`: register a recurring or oneClick payment with an SMS transaction.
    RegisterPerspayeeSms,
    /// `-d`: register a recurring payment with a DMS transaction.
    RegisterPerspayeeDms,
    /// `-p`: register a recurring or oneClick payment without a first payment.
    RegisterPerspayeeWithoutPayment,
    /// `-e`: execute a recurring payment.
    ExecuteRecurring,
    /// `-x`: delete a recurring payment.
    DeleteRecurring,
    /// `-f`: execute a oneClick payment.
    ExecuteOneClick,
}

impl Command {
    /// The value sent as the `command` wire parameter.
    pub const fn tag(&self) -> &'static str {
        match self {
            Command::RegisterSms => "v",
            Command::RegisterDms => "a",
            Command::TransactionStatus => "c",
            Command::ExecuteDms => "t",
            Command::Reverse => "r",
            Command::CloseDay => "b",
            Command::RegisterPerspayeeSms => "z",
            Command::RegisterPerspayeeDms => "d",
            Command::RegisterPerspayeeWithoutPayment => "p",
            Command::ExecuteRecurring => "e",
            Command::DeleteRecurring => "x",
            Command::ExecuteOneClick => "f",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
