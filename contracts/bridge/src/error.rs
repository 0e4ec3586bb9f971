//! Error types for the bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not allowed to perform this action")]
    Unauthorized,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid chain: {chain_id}")]
    InvalidChain { chain_id: u64 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid receiver: {reason}")]
    InvalidReceiver { reason: String },

    #[error("Invalid token: {token}")]
    InvalidToken { token: String },

    #[error("Invalid uid: uid 0 is never assigned")]
    InvalidUid,

    #[error("Uid space exhausted at {uid}")]
    UidExhausted { uid: u64 },

    #[error("Invalid endpoint: no endpoint for chain {chain_id}")]
    InvalidEndpoint { chain_id: u64 },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("Insufficient fee: required {required}, provided {provided}")]
    InsufficientFee { required: Uint128, provided: Uint128 },

    // ========================================================================
    // Configuration State Errors
    // ========================================================================

    #[error("Already exists: {what}")]
    AlreadyExists { what: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    // ========================================================================
    // Business Rule Errors
    // ========================================================================

    #[error("Token not allowed: {token}")]
    TokenNotAllowed { token: String },

    #[error("Destination token not allowed: chain {chain_id} token index {token_index}")]
    DstTokenNotAllowed { chain_id: u64, token_index: u32 },

    #[error("Pair not allowed: {src_token_index} -> {dst_token_index}")]
    PairNotAllowed {
        src_token_index: u32,
        dst_token_index: u32,
    },

    #[error("Token index not allowed: {token_index}")]
    TokenIndexNotAllowed { token_index: u32 },

    // ========================================================================
    // Idempotence Errors
    // ========================================================================

    #[error("Already received: src_chain_id {src_chain_id} uid {uid}")]
    AlreadyReceived { src_chain_id: u64, uid: u64 },

    #[error("Already refunded: uid {uid}")]
    AlreadyRefunded { uid: u64 },

    #[error("Uid not found: {uid}")]
    UidNotFound { uid: u64 },
}
