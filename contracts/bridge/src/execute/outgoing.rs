//! Outgoing transfer handlers (Send and SendNative).
//!
//! Funds move into the token's vault, a uid is assigned and the payload is
//! handed to the courier together with its fee.

use cosmwasm_std::{
    coins, to_json_binary, Addr, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::asset::AssetInfo;
use common::courier::{CourierExecuteMsg, CourierQueryMsg, QuoteFeeResponse};
use common::vault::VaultExecuteMsg;

use crate::address_codec::{encode_evm_address, local_address_bytes, parse_receiver, ADDRESS_LEN};
use crate::error::ContractError;
use crate::payload::{bytes32_to_hex, TransferPayload};
use crate::state::{
    AllowedToken, Config, Direction, TransferRecord, ALLOWED_TOKENS, CONFIG, DST_TOKEN_SUPPORT,
    ENDPOINTS, OUTGOING, PAIRS, STATS, UID,
};

/// Execute handler for bridging an approved CW20 token
#[allow(clippy::too_many_arguments)]
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    dst_chain_id: u64,
    dst_token_index: u32,
    receiver: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if token.is_empty() {
        return Err(ContractError::InvalidToken { token });
    }
    let receiver = validate_destination(&config, dst_chain_id, &receiver)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let courier = courier(&config)?;
    let fee = quote_fee(deps.as_ref(), &courier, dst_chain_id)?;
    let provided = attached(&info, &config.native_denom)?;
    if provided < fee {
        return Err(ContractError::InsufficientFee {
            required: fee,
            provided,
        });
    }

    let route = resolve_route(deps.as_ref(), dst_chain_id, dst_token_index, &token)?;
    if !matches!(route.allowed.asset, AssetInfo::Cw20 { .. }) {
        return Err(ContractError::InvalidToken { token });
    }

    let mut messages: Vec<CosmosMsg> = vec![
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: route.allowed.token.clone(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: route.allowed.vault.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
        vault_deposit(&route.allowed.vault, &info.sender, amount, vec![])?,
    ];

    let dispatch = record_and_dispatch(
        deps,
        &env,
        &config,
        &courier,
        &info.sender,
        receiver,
        amount,
        &route,
        dst_chain_id,
        dst_token_index,
        provided,
    )?;
    messages.push(dispatch.message);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "send")
        .add_attribute("uid", dispatch.uid.to_string())
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("receiver", encode_evm_address(&receiver))
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string())
        .add_attribute("src_token_index", route.allowed.token_index.to_string())
        .add_attribute("dst_token_index", dst_token_index.to_string())
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("fee", provided.to_string())
        .add_attribute("payload_hash", dispatch.payload_hash))
}

/// Execute handler for bridging the native denom
///
/// Everything attached above the courier fee is the transfer amount.
pub fn execute_send_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dst_chain_id: u64,
    dst_token_index: u32,
    receiver: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let receiver = validate_destination(&config, dst_chain_id, &receiver)?;

    let courier = courier(&config)?;
    let fee = quote_fee(deps.as_ref(), &courier, dst_chain_id)?;
    let provided = attached(&info, &config.native_denom)?;
    if provided < fee {
        return Err(ContractError::InsufficientFee {
            required: fee,
            provided,
        });
    }
    let amount = provided - fee;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Nothing attached above the courier fee".to_string(),
        });
    }

    let route = resolve_route(
        deps.as_ref(),
        dst_chain_id,
        dst_token_index,
        &config.native_denom,
    )?;

    let deposit = vault_deposit(
        &route.allowed.vault,
        &info.sender,
        amount,
        coins(amount.u128(), &config.native_denom),
    )?;

    let dispatch = record_and_dispatch(
        deps,
        &env,
        &config,
        &courier,
        &info.sender,
        receiver,
        amount,
        &route,
        dst_chain_id,
        dst_token_index,
        fee,
    )?;

    Ok(Response::new()
        .add_message(deposit)
        .add_message(dispatch.message)
        .add_attribute("action", "send_native")
        .add_attribute("uid", dispatch.uid.to_string())
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("receiver", encode_evm_address(&receiver))
        .add_attribute("token", config.native_denom)
        .add_attribute("amount", amount.to_string())
        .add_attribute("src_token_index", route.allowed.token_index.to_string())
        .add_attribute("dst_token_index", dst_token_index.to_string())
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("payload_hash", dispatch.payload_hash))
}

// ============================================================================
// Helpers
// ============================================================================

/// Allow-list entry and endpoint a transfer is routed through
struct Route {
    allowed: AllowedToken,
    endpoint: String,
}

struct Dispatch {
    uid: u64,
    payload_hash: String,
    message: CosmosMsg,
}

fn validate_destination(
    config: &Config,
    dst_chain_id: u64,
    receiver: &str,
) -> Result<[u8; ADDRESS_LEN], ContractError> {
    if dst_chain_id == config.chain_id {
        return Err(ContractError::InvalidChain {
            chain_id: dst_chain_id,
        });
    }

    let receiver = parse_receiver(receiver).map_err(|e| ContractError::InvalidReceiver {
        reason: e.to_string(),
    })?;
    if receiver == [0u8; ADDRESS_LEN] {
        return Err(ContractError::InvalidReceiver {
            reason: "Receiver is the zero address".to_string(),
        });
    }
    Ok(receiver)
}

fn courier(config: &Config) -> Result<Addr, ContractError> {
    config
        .courier
        .clone()
        .ok_or_else(|| ContractError::InvalidAddress {
            reason: "Courier not configured".to_string(),
        })
}

fn quote_fee(deps: Deps, courier: &Addr, dst_chain_id: u64) -> Result<Uint128, ContractError> {
    let res: QuoteFeeResponse = deps
        .querier
        .query_wasm_smart(courier, &CourierQueryMsg::QuoteFee { dst_chain_id })?;
    Ok(res.fee)
}

/// Sum of the attached `denom`; any other denom would be stranded in the bridge.
fn attached(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    if let Some(coin) = info.funds.iter().find(|c| c.denom != denom) {
        return Err(ContractError::InvalidToken {
            token: coin.denom.clone(),
        });
    }
    Ok(info.funds.iter().map(|c| c.amount).sum())
}

fn resolve_route(
    deps: Deps,
    dst_chain_id: u64,
    dst_token_index: u32,
    token: &str,
) -> Result<Route, ContractError> {
    let endpoint = ENDPOINTS
        .may_load(deps.storage, dst_chain_id)?
        .ok_or(ContractError::InvalidEndpoint {
            chain_id: dst_chain_id,
        })?;

    let allowed = ALLOWED_TOKENS
        .may_load(deps.storage, token)?
        .ok_or_else(|| ContractError::TokenNotAllowed {
            token: token.to_string(),
        })?;

    if !DST_TOKEN_SUPPORT.has(deps.storage, (dst_chain_id, dst_token_index)) {
        return Err(ContractError::DstTokenNotAllowed {
            chain_id: dst_chain_id,
            token_index: dst_token_index,
        });
    }

    if !PAIRS.has(deps.storage, (allowed.token_index, dst_token_index)) {
        return Err(ContractError::PairNotAllowed {
            src_token_index: allowed.token_index,
            dst_token_index,
        });
    }

    Ok(Route { allowed, endpoint })
}

fn vault_deposit(
    vault: &Addr,
    sender: &Addr,
    amount: Uint128,
    funds: Vec<Coin>,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Deposit {
            receiver: sender.to_string(),
            amount,
        })?,
        funds,
    }))
}

/// Assign the next uid, store the outgoing record and build the courier dispatch.
#[allow(clippy::too_many_arguments)]
fn record_and_dispatch(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    courier: &Addr,
    sender: &Addr,
    receiver: [u8; ADDRESS_LEN],
    amount: Uint128,
    route: &Route,
    dst_chain_id: u64,
    dst_token_index: u32,
    fee: Uint128,
) -> Result<Dispatch, ContractError> {
    let from = local_address_bytes(sender).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })?;

    let current = UID.load(deps.storage)?;
    let uid = current
        .checked_add(1)
        .ok_or(ContractError::UidExhausted { uid: current })?;
    UID.save(deps.storage, &uid)?;

    let payload = TransferPayload {
        uid,
        src_token_index: route.allowed.token_index,
        dst_token_index,
        amount,
        src_chain_id: config.chain_id,
        dst_chain_id,
        from,
        receiver,
    };
    let payload_hash = bytes32_to_hex(&payload.hash());

    let record = TransferRecord {
        uid,
        direction: Direction::Outgoing,
        src_chain_id: config.chain_id,
        dst_chain_id,
        src_token_index: route.allowed.token_index,
        dst_token_index,
        sender: sender.to_string(),
        receiver: encode_evm_address(&receiver),
        amount,
        refunded: false,
        payload_hash: payload_hash.clone(),
        created_at: env.block.time,
    };
    OUTGOING.save(deps.storage, uid, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_outgoing += 1;
    STATS.save(deps.storage, &stats)?;

    let funds = if fee.is_zero() {
        vec![]
    } else {
        coins(fee.u128(), &config.native_denom)
    };
    let message = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: courier.to_string(),
        msg: to_json_binary(&CourierExecuteMsg::Dispatch {
            dst_chain_id,
            endpoint: route.endpoint.clone(),
            payload: payload.encode().into(),
        })?,
        funds,
    });

    Ok(Dispatch {
        uid,
        payload_hash,
        message,
    })
}
