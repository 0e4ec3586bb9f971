//! Bridge Vault - Custody of One Asset on Behalf of the Bridge
//!
//! A vault is bound to a single token index. The bridge (its controller)
//! moves user funds into the vault and calls `Deposit`, and calls
//! `Withdraw` to release funds for an incoming transfer or a refund.
//!
//! How the asset is held is decided by the configured [`strategy::Strategy`]:
//! - `mint_burn` - burns on deposit, mints on withdraw
//! - `lock_unlock` - plain custody
//! - `external_lending` - supplies deposits to a lending custodian
//! - `wrapped_yield` - unwraps a yield token and burns its underlying
//! - `native` - bank-denom custody, optionally supplied to a custodian

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
pub mod strategy;

pub use crate::error::ContractError;
