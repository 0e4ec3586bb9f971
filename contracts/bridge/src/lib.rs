//! Ethernal Bridge - Cross-Chain Transfer Ledger
//!
//! The bridge records every transfer leaving or entering this chain and
//! drives the vault that custodies each bridged token.
//!
//! # Outgoing Flow
//! 1. User approves the bridge and calls `Send` (or `SendNative`) with the
//!    courier fee attached
//! 2. Tokens move into the token's vault, which takes custody
//! 3. A fresh uid is assigned, the transfer is recorded and a 256-byte
//!    payload is dispatched through the courier to the remote endpoint
//!
//! # Incoming Flow
//! 1. The courier calls `ReceiveMessage` with a payload from a remote bridge
//! 2. `(src_chain_id, uid)` is checked against the incoming records so a
//!    message can only ever be applied once
//! 3. The destination token's vault releases the amount to the receiver
//! 4. Receivers without gas get a best-effort subsidy from the faucet
//!
//! # Refunds
//! The owner may refund an outgoing transfer exactly once through the
//! source token's vault.

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod payload;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::payload::{keccak256, TransferPayload};
