//! Yield Token - Rebasing Wrapper over a Bridge Token
//!
//! Holders own shares. The value of a share in underlying grows block by
//! block at the configured annual rate; a worker periodically calls
//! `Compound`, which moves the exchange rate forward and mints the accrued
//! underlying into the reserve so every balance stays redeemable.
//!
//! All amounts crossing the message boundary are in underlying units.

pub mod contract;
pub mod error;
pub mod math;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
