//! Message types for the Ethernal bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{AllowedToken, Stats, TransferRecord};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating account
    pub owner: Option<String>,
    /// Identifier of this chain inside the bridge network
    pub chain_id: u64,
    /// Bank denom for courier fees and native transfers (e.g. "uluna")
    pub native_denom: String,
    /// Bech32 prefix of local accounts (e.g. "terra")
    pub address_prefix: String,
    pub courier: Option<String>,
    pub faucet: Option<String>,
    /// The first outgoing transfer gets `initial_uid + 1`
    pub initial_uid: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Bridge a CW20 token. The caller must have approved the bridge for
    /// `amount` and attach the courier fee in the native denom.
    Send {
        token: String,
        amount: Uint128,
        dst_chain_id: u64,
        dst_token_index: u32,
        /// 0x-prefixed EVM address, 32-byte hex word or bech32 account
        receiver: String,
    },

    /// Bridge the native denom. Everything attached above the courier fee
    /// is transferred.
    SendNative {
        dst_chain_id: u64,
        dst_token_index: u32,
        receiver: String,
    },

    /// Courier callback delivering a payload from a remote bridge
    ReceiveMessage { payload: Binary },

    /// Return the funds of an outgoing transfer to its sender (owner only)
    AdminRefund { uid: u64 },

    // ========================================================================
    // Configuration (owner only)
    // ========================================================================
    AddAllowToken { token: String, vault: String },
    RemoveAllowToken { token: String },
    AddPairTokenIndex { src: u32, dst: u32 },
    RemovePairTokenIndex { src: u32, dst: u32 },
    SetEndpoint { chain_id: u64, endpoint: String },
    RemoveEndpoint { chain_id: u64 },
    SetSupportDstTokenIndex {
        chain_id: u64,
        token_index: u32,
        supported: bool,
    },
    /// `None` disables the gas subsidy
    SetFaucetFund { faucet: Option<String> },
    SetCourier { courier: String },
    UpdateOwner { owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Last assigned outgoing uid
    #[returns(CurrentUidResponse)]
    CurrentUid {},

    #[returns(Option<TransferRecord>)]
    Outgoing { uid: u64 },

    #[returns(TransfersResponse)]
    Outgoings {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Option<TransferRecord>)]
    Incoming { src_chain_id: u64, uid: u64 },

    #[returns(IsReceivedResponse)]
    IsReceived { src_chain_id: u64, uid: u64 },

    #[returns(Option<AllowedToken>)]
    AllowedToken { token: String },

    #[returns(AllowedTokensResponse)]
    AllowedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Option<AllowedToken>)]
    VaultByIndex { token_index: u32 },

    #[returns(IsPairAllowedResponse)]
    IsPairAllowed { src: u32, dst: u32 },

    #[returns(PairsResponse)]
    Pairs {
        start_after: Option<(u32, u32)>,
        limit: Option<u32>,
    },

    #[returns(Option<EndpointResponse>)]
    Endpoint { chain_id: u64 },

    #[returns(EndpointsResponse)]
    Endpoints {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(IsDstTokenSupportedResponse)]
    IsDstTokenSupported { chain_id: u64, token_index: u32 },

    #[returns(Stats)]
    Stats {},

    /// Canonical payload bytes and hash for the given transfer
    #[returns(EncodePayloadResponse)]
    EncodePayload {
        uid: u64,
        src_token_index: u32,
        dst_token_index: u32,
        amount: Uint128,
        src_chain_id: u64,
        dst_chain_id: u64,
        from: String,
        receiver: String,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub chain_id: u64,
    pub native_denom: String,
    pub address_prefix: String,
    pub courier: Option<Addr>,
    pub faucet: Option<Addr>,
}

#[cw_serde]
pub struct CurrentUidResponse {
    pub uid: u64,
}

#[cw_serde]
pub struct TransfersResponse {
    pub transfers: Vec<TransferRecord>,
}

#[cw_serde]
pub struct IsReceivedResponse {
    pub received: bool,
}

#[cw_serde]
pub struct AllowedTokensResponse {
    pub tokens: Vec<AllowedToken>,
}

#[cw_serde]
pub struct IsPairAllowedResponse {
    pub allowed: bool,
}

#[cw_serde]
pub struct PairsResponse {
    pub pairs: Vec<(u32, u32)>,
}

#[cw_serde]
pub struct EndpointResponse {
    pub chain_id: u64,
    pub endpoint: String,
}

#[cw_serde]
pub struct EndpointsResponse {
    pub endpoints: Vec<EndpointResponse>,
}

#[cw_serde]
pub struct IsDstTokenSupportedResponse {
    pub supported: bool,
}

#[cw_serde]
pub struct EncodePayloadResponse {
    pub payload: Binary,
    /// keccak256 of `payload`, 0x-hex
    pub payload_hash: String,
}
