//! Types shared by every request and result.

mod common;
mod fields;
mod results;

pub use common::*;
pub use fields::*;
pub use results::*;
