//! Execute handlers for the Ethernal bridge contract.
//!
//! - `outgoing` - Send and SendNative
//! - `incoming` - ReceiveMessage and the faucet subsidy
//! - `refund` - AdminRefund
//! - `config` - allow-list, pair, endpoint and ownership management

mod config;
mod incoming;
mod outgoing;
mod refund;

pub use config::*;
pub use incoming::*;
pub use outgoing::*;
pub use refund::*;
