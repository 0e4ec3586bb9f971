//! Common - Shared Types for the Ethernal Bridge Contracts
//!
//! Every contract in the workspace talks to its neighbours through the
//! message and response types defined here, so a vault, courier or
//! custodian can be swapped without the bridge knowing its concrete code.

pub mod asset;
pub mod courier;
pub mod custodian;
pub mod faucet;
pub mod token;
pub mod vault;
pub mod yield_token;

pub use asset::{Asset, AssetInfo};
