//! Owner refund of outgoing transfers.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};

use common::vault::VaultExecuteMsg;

use super::config::ensure_owner;
use crate::error::ContractError;
use crate::state::{OUTGOING, STATS, VAULT_BY_INDEX};

/// Release an outgoing transfer's amount back to its sender.
///
/// The vault is resolved through the source token index recorded at send
/// time. A transfer can be refunded once.
pub fn execute_admin_refund(
    deps: DepsMut,
    info: MessageInfo,
    uid: u64,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let mut record = OUTGOING
        .may_load(deps.storage, uid)?
        .ok_or(ContractError::UidNotFound { uid })?;

    if record.refunded {
        return Err(ContractError::AlreadyRefunded { uid });
    }

    let allowed = VAULT_BY_INDEX
        .may_load(deps.storage, record.src_token_index)?
        .ok_or(ContractError::TokenIndexNotAllowed {
            token_index: record.src_token_index,
        })?;

    record.refunded = true;
    OUTGOING.save(deps.storage, uid, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_refunded += 1;
    STATS.save(deps.storage, &stats)?;

    let release = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: allowed.vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Withdraw {
            receiver: record.sender.clone(),
            amount: record.amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "admin_refund")
        .add_attribute("uid", uid.to_string())
        .add_attribute("receiver", record.sender)
        .add_attribute("token_index", record.src_token_index.to_string())
        .add_attribute("amount", record.amount.to_string()))
}
