//! Bridge Token - CW20 with Controller-Gated Supply
//!
//! Balances, allowances and the transfer surface come from `cw20-base`.
//! On top of that the owner appoints controllers (vaults, yield tokens)
//! that may mint to any account and burn from any account without an
//! allowance.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
