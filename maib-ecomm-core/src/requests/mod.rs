//! Requests for each command available in the gateway.
//!
//! Every request implements [`Request`](crate::request::Request) and is paired
//! with a result struct, e.g. [`CloseDay`] with [`CloseDayResult`]. Parsed
//! responses are projected onto result structs with
//! [`decode_response`](crate::response::decode_response).
//!
//! Result fields missing from a response keep their default value.

mod close_day;
mod delete_recurring;
mod execute_dms;
mod execute_one_click;
mod execute_recurring;
mod register_one_click;
mod register_recurring;
mod register_transaction;
mod reverse_transaction;
mod transaction_status;

pub use close_day::*;
pub use delete_recurring::*;
pub use execute_dms::*;
pub use execute_one_click::*;
pub use execute_recurring::*;
pub use register_one_click::*;
pub use register_recurring::*;
pub use register_transaction::*;
pub use reverse_transaction::*;
pub use transaction_status::*;

/// Wire parameters that are not validated fields.
pub(crate) mod params {
    pub const ONE_CLICK: &str = "oneclick";
    pub const ASK_SAVE_CARD_DATA: &str = "ask_save_card_data";
    pub const PERSPAYEE_GEN: &str = "perspayee_gen";
    pub const PERSPAYEE_OVERWRITE: &str = "perspayee_overwrite";
    pub const SUSPECTED_FRAUD: &str = "suspected_fraud";
}
