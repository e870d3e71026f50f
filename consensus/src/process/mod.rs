//! Currency rules
//!
//! Each submodule adds one family of rules to [`Currency`](crate::Currency): emission and
//! coinbase construction, deposit interest and fees, fusion classification, and the amount
//! text format.

pub mod amount_format;
pub mod coinbase;
pub mod deposits;
pub mod fusion;
pub mod input_count;
pub mod reward;

pub use amount_format::{format_amount, format_signed_amount, parse_amount};
pub use input_count::approximate_maximum_input_count;
pub use reward::{get_penalized_amount, BlockReward};
