//! Query handlers for the Ethernal bridge contract.

use cosmwasm_std::{Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::address_codec::parse_receiver;
use crate::msg::{
    AllowedTokensResponse, ConfigResponse, CurrentUidResponse, EncodePayloadResponse,
    EndpointResponse, EndpointsResponse, IsDstTokenSupportedResponse, IsPairAllowedResponse,
    IsReceivedResponse, PairsResponse, TransfersResponse,
};
use crate::payload::{bytes32_to_hex, TransferPayload};
use crate::state::{
    AllowedToken, Stats, TransferRecord, ALLOWED_TOKENS, CONFIG, DST_TOKEN_SUPPORT, ENDPOINTS,
    INCOMING, OUTGOING, PAIRS, STATS, UID, VAULT_BY_INDEX,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn page_size(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        chain_id: config.chain_id,
        native_denom: config.native_denom,
        address_prefix: config.address_prefix,
        courier: config.courier,
        faucet: config.faucet,
    })
}

pub fn query_current_uid(deps: Deps) -> StdResult<CurrentUidResponse> {
    Ok(CurrentUidResponse {
        uid: UID.load(deps.storage)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}

// ============================================================================
// Transfer Records
// ============================================================================

pub fn query_outgoing(deps: Deps, uid: u64) -> StdResult<Option<TransferRecord>> {
    OUTGOING.may_load(deps.storage, uid)
}

/// Outgoing records in ascending uid order
pub fn query_outgoings(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TransfersResponse> {
    let start = start_after.map(Bound::exclusive);
    let transfers = OUTGOING
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(TransfersResponse { transfers })
}

pub fn query_incoming(
    deps: Deps,
    src_chain_id: u64,
    uid: u64,
) -> StdResult<Option<TransferRecord>> {
    INCOMING.may_load(deps.storage, (src_chain_id, uid))
}

pub fn query_is_received(
    deps: Deps,
    src_chain_id: u64,
    uid: u64,
) -> StdResult<IsReceivedResponse> {
    Ok(IsReceivedResponse {
        received: INCOMING.has(deps.storage, (src_chain_id, uid)),
    })
}

// ============================================================================
// Routing Tables
// ============================================================================

pub fn query_allowed_token(deps: Deps, token: String) -> StdResult<Option<AllowedToken>> {
    ALLOWED_TOKENS.may_load(deps.storage, &token)
}

pub fn query_allowed_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllowedTokensResponse> {
    let start = start_after.as_deref().map(Bound::exclusive);
    let tokens = ALLOWED_TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(_, entry)| entry))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(AllowedTokensResponse { tokens })
}

pub fn query_vault_by_index(deps: Deps, token_index: u32) -> StdResult<Option<AllowedToken>> {
    VAULT_BY_INDEX.may_load(deps.storage, token_index)
}

pub fn query_is_pair_allowed(deps: Deps, src: u32, dst: u32) -> StdResult<IsPairAllowedResponse> {
    Ok(IsPairAllowedResponse {
        allowed: PAIRS.has(deps.storage, (src, dst)),
    })
}

pub fn query_pairs(
    deps: Deps,
    start_after: Option<(u32, u32)>,
    limit: Option<u32>,
) -> StdResult<PairsResponse> {
    let start = start_after.map(Bound::exclusive);
    let pairs = PAIRS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(PairsResponse { pairs })
}

pub fn query_endpoint(deps: Deps, chain_id: u64) -> StdResult<Option<EndpointResponse>> {
    Ok(ENDPOINTS
        .may_load(deps.storage, chain_id)?
        .map(|endpoint| EndpointResponse { chain_id, endpoint }))
}

pub fn query_endpoints(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<EndpointsResponse> {
    let start = start_after.map(Bound::exclusive);
    let endpoints = ENDPOINTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(chain_id, endpoint)| EndpointResponse { chain_id, endpoint }))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(EndpointsResponse { endpoints })
}

pub fn query_is_dst_token_supported(
    deps: Deps,
    chain_id: u64,
    token_index: u32,
) -> StdResult<IsDstTokenSupportedResponse> {
    Ok(IsDstTokenSupportedResponse {
        supported: DST_TOKEN_SUPPORT.has(deps.storage, (chain_id, token_index)),
    })
}

// ============================================================================
// Payload Helper
// ============================================================================

/// Encode a transfer tuple exactly as it would be dispatched.
///
/// `from` and `receiver` accept the same forms as a send receiver.
#[allow(clippy::too_many_arguments)]
pub fn query_encode_payload(
    uid: u64,
    src_token_index: u32,
    dst_token_index: u32,
    amount: Uint128,
    src_chain_id: u64,
    dst_chain_id: u64,
    from: String,
    receiver: String,
) -> StdResult<EncodePayloadResponse> {
    let payload = TransferPayload {
        uid,
        src_token_index,
        dst_token_index,
        amount,
        src_chain_id,
        dst_chain_id,
        from: parse_receiver(&from)?,
        receiver: parse_receiver(&receiver)?,
    };
    Ok(EncodePayloadResponse {
        payload_hash: bytes32_to_hex(&payload.hash()),
        payload: payload.encode().into(),
    })
}
