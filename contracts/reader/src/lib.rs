//! Ethernal Reader - batched views over the bridge
//!
//! Front ends ask one contract for everything needed to render a transfer
//! form: balances and bridge allowances for a list of tokens, and the
//! limits that apply to one token's vault (and yield token, if wrapped).

pub mod contract;
pub mod msg;
mod query;
