//! Incoming transfer handler (courier callback).

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, SubMsg, WasmMsg,
};

use common::faucet::FaucetExecuteMsg;
use common::vault::VaultExecuteMsg;

use crate::address_codec::{encode_evm_address, local_address, ADDRESS_LEN};
use crate::error::ContractError;
use crate::payload::{bytes32_to_hex, TransferPayload};
use crate::state::{
    Direction, TransferRecord, CONFIG, FAUCET_REPLY_ID, INCOMING, STATS, VAULT_BY_INDEX,
};

/// Apply a payload delivered by the courier.
///
/// A `(src_chain_id, uid)` pair is applied at most once; the record is
/// written in the same call that releases the funds.
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payload: &[u8],
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.courier.as_ref() != Some(&info.sender) {
        return Err(ContractError::Unauthorized);
    }

    let transfer = TransferPayload::decode(payload)?;

    if transfer.uid == 0 {
        return Err(ContractError::InvalidUid);
    }
    if transfer.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    if transfer.dst_chain_id != config.chain_id {
        return Err(ContractError::InvalidChain {
            chain_id: transfer.dst_chain_id,
        });
    }
    if transfer.receiver == [0u8; ADDRESS_LEN] {
        return Err(ContractError::InvalidReceiver {
            reason: "Receiver is the zero address".to_string(),
        });
    }

    let key = (transfer.src_chain_id, transfer.uid);
    if INCOMING.has(deps.storage, key) {
        return Err(ContractError::AlreadyReceived {
            src_chain_id: transfer.src_chain_id,
            uid: transfer.uid,
        });
    }

    let allowed = VAULT_BY_INDEX
        .may_load(deps.storage, transfer.dst_token_index)?
        .ok_or(ContractError::TokenIndexNotAllowed {
            token_index: transfer.dst_token_index,
        })?;

    let receiver = local_address(&transfer.receiver, &config.address_prefix)?;
    let receiver = deps.api.addr_validate(&receiver)?;

    let payload_hash = bytes32_to_hex(&transfer.hash());
    let record = TransferRecord {
        uid: transfer.uid,
        direction: Direction::Incoming,
        src_chain_id: transfer.src_chain_id,
        dst_chain_id: transfer.dst_chain_id,
        src_token_index: transfer.src_token_index,
        dst_token_index: transfer.dst_token_index,
        sender: encode_evm_address(&transfer.from),
        receiver: receiver.to_string(),
        amount: transfer.amount,
        refunded: false,
        payload_hash: payload_hash.clone(),
        created_at: env.block.time,
    };
    INCOMING.save(deps.storage, key, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_incoming += 1;
    STATS.save(deps.storage, &stats)?;

    let release = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: allowed.vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Withdraw {
            receiver: receiver.to_string(),
            amount: transfer.amount,
        })?,
        funds: vec![],
    });

    let mut response = Response::new()
        .add_message(release)
        .add_attribute("action", "receive_message")
        .add_attribute("uid", transfer.uid.to_string())
        .add_attribute("src_chain_id", transfer.src_chain_id.to_string())
        .add_attribute("sender", record.sender)
        .add_attribute("receiver", receiver.to_string())
        .add_attribute("token_index", transfer.dst_token_index.to_string())
        .add_attribute("amount", transfer.amount.to_string())
        .add_attribute("payload_hash", payload_hash);

    if let Some(faucet) = config.faucet {
        if needs_subsidy(deps.as_ref(), &receiver, &config.native_denom)? {
            let subsidy = WasmMsg::Execute {
                contract_addr: faucet.to_string(),
                msg: to_json_binary(&FaucetExecuteMsg::TransferTo {
                    receiver: receiver.to_string(),
                })?,
                funds: vec![],
            };
            response = response
                .add_submessage(SubMsg::reply_on_error(subsidy, FAUCET_REPLY_ID))
                .add_attribute("faucet_status", "requested");
        } else {
            response = response.add_attribute("faucet_status", "not_needed");
        }
    }

    Ok(response)
}

/// Accounts (not contracts) holding none of the native denom get gas.
fn needs_subsidy(deps: Deps, receiver: &Addr, denom: &str) -> Result<bool, ContractError> {
    let balance = deps.querier.query_balance(receiver, denom)?;
    if !balance.amount.is_zero() {
        return Ok(false);
    }
    Ok(deps.querier.query_wasm_contract_info(receiver).is_err())
}
