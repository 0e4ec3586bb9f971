//! State definitions for the bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use common::asset::AssetInfo;

pub const CONTRACT_NAME: &str = "crates.io:ethernal-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the best-effort faucet subsidy submessage
pub const FAUCET_REPLY_ID: u64 = 1;

// ============================================================================
// Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Identifier of this chain inside the bridge network
    pub chain_id: u64,
    /// Bank denom of the native gas currency; courier fees are paid in it
    pub native_denom: String,
    /// Bech32 prefix used to render incoming receivers
    pub address_prefix: String,
    /// Messaging contract; the only caller of `ReceiveMessage`
    pub courier: Option<Addr>,
    /// Gas subsidy pool for fresh receivers
    pub faucet: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Last assigned outgoing uid
pub const UID: Item<u64> = Item::new("uid");

// ============================================================================
// Tables
// ============================================================================

/// An allow-listed token bound to its vault
#[cw_serde]
pub struct AllowedToken {
    /// CW20 address or native denom
    pub token: String,
    pub asset: AssetInfo,
    pub vault: Addr,
    pub token_index: u32,
}

/// token (CW20 address or native denom) => allow-list entry
pub const ALLOWED_TOKENS: Map<&str, AllowedToken> = Map::new("allowed_tokens");

/// token_index => allow-list entry; kept in step with ALLOWED_TOKENS
pub const VAULT_BY_INDEX: Map<u32, AllowedToken> = Map::new("vault_by_index");

/// (src_token_index, dst_token_index) => allowed
pub const PAIRS: Map<(u32, u32), bool> = Map::new("pairs");

/// chain_id => remote bridge endpoint
pub const ENDPOINTS: Map<u64, String> = Map::new("endpoints");

/// (chain_id, token_index) => supported as a destination
pub const DST_TOKEN_SUPPORT: Map<(u64, u32), bool> = Map::new("dst_token_support");

// ============================================================================
// Transfer Records
// ============================================================================

#[cw_serde]
pub enum Direction {
    Outgoing,
    Incoming,
}

#[cw_serde]
pub struct TransferRecord {
    pub uid: u64,
    pub direction: Direction,
    pub src_chain_id: u64,
    pub dst_chain_id: u64,
    pub src_token_index: u32,
    pub dst_token_index: u32,
    /// Local senders in bech32, remote senders as 0x-hex
    pub sender: String,
    /// Local receivers in bech32, remote receivers as 0x-hex
    pub receiver: String,
    pub amount: Uint128,
    pub refunded: bool,
    /// keccak256 of the encoded payload, 0x-hex
    pub payload_hash: String,
    pub created_at: Timestamp,
}

/// uid => outgoing record
pub const OUTGOING: Map<u64, TransferRecord> = Map::new("outgoing");

/// (src_chain_id, uid) => incoming record; written once
pub const INCOMING: Map<(u64, u64), TransferRecord> = Map::new("incoming");

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_outgoing: u64,
    pub total_incoming: u64,
    pub total_refunded: u64,
}

pub const STATS: Item<Stats> = Item::new("stats");
