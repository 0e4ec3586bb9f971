//! Owner-only configuration handlers.
//!
//! Every table keeps an existence invariant: adding a present entry fails
//! `AlreadyExists`, removing a missing one fails `NotFound`.

use cosmwasm_std::{Deps, DepsMut, MessageInfo, Response};

use common::vault::{VaultInfoResponse, VaultQueryMsg};

use crate::error::ContractError;
use crate::state::{
    AllowedToken, ALLOWED_TOKENS, CONFIG, DST_TOKEN_SUPPORT, ENDPOINTS, PAIRS, VAULT_BY_INDEX,
};

pub(crate) fn ensure_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Allow-list
// ============================================================================

/// Bind `token` to `vault`; the token index is read from the vault itself.
pub fn execute_add_allow_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    vault: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let vault = deps.api.addr_validate(&vault)?;
    let vault_info: VaultInfoResponse = deps
        .querier
        .query_wasm_smart(&vault, &VaultQueryMsg::VaultInfo {})?;

    if vault_info.asset.key() != token {
        return Err(ContractError::InvalidToken { token });
    }
    if ALLOWED_TOKENS.has(deps.storage, &token) {
        return Err(ContractError::AlreadyExists {
            what: format!("token {}", token),
        });
    }
    if VAULT_BY_INDEX.has(deps.storage, vault_info.token_index) {
        return Err(ContractError::AlreadyExists {
            what: format!("token index {}", vault_info.token_index),
        });
    }

    let entry = AllowedToken {
        token: token.clone(),
        asset: vault_info.asset,
        vault: vault.clone(),
        token_index: vault_info.token_index,
    };
    ALLOWED_TOKENS.save(deps.storage, &token, &entry)?;
    VAULT_BY_INDEX.save(deps.storage, entry.token_index, &entry)?;

    Ok(Response::new()
        .add_attribute("action", "add_allow_token")
        .add_attribute("token", token)
        .add_attribute("vault", vault)
        .add_attribute("token_index", entry.token_index.to_string()))
}

pub fn execute_remove_allow_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let entry = ALLOWED_TOKENS
        .may_load(deps.storage, &token)?
        .ok_or_else(|| ContractError::NotFound {
            what: format!("token {}", token),
        })?;

    ALLOWED_TOKENS.remove(deps.storage, &token);
    VAULT_BY_INDEX.remove(deps.storage, entry.token_index);

    Ok(Response::new()
        .add_attribute("action", "remove_allow_token")
        .add_attribute("token", token)
        .add_attribute("token_index", entry.token_index.to_string()))
}

// ============================================================================
// Pairs
// ============================================================================

pub fn execute_add_pair_token_index(
    deps: DepsMut,
    info: MessageInfo,
    src: u32,
    dst: u32,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    if PAIRS.has(deps.storage, (src, dst)) {
        return Err(ContractError::AlreadyExists {
            what: format!("pair {} -> {}", src, dst),
        });
    }
    PAIRS.save(deps.storage, (src, dst), &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_pair_token_index")
        .add_attribute("src", src.to_string())
        .add_attribute("dst", dst.to_string()))
}

pub fn execute_remove_pair_token_index(
    deps: DepsMut,
    info: MessageInfo,
    src: u32,
    dst: u32,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    if !PAIRS.has(deps.storage, (src, dst)) {
        return Err(ContractError::NotFound {
            what: format!("pair {} -> {}", src, dst),
        });
    }
    PAIRS.remove(deps.storage, (src, dst));

    Ok(Response::new()
        .add_attribute("action", "remove_pair_token_index")
        .add_attribute("src", src.to_string())
        .add_attribute("dst", dst.to_string()))
}

// ============================================================================
// Endpoints & destination tokens
// ============================================================================

/// Set or replace the remote bridge endpoint for `chain_id`.
pub fn execute_set_endpoint(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    endpoint: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let config = CONFIG.load(deps.storage)?;
    if chain_id == config.chain_id {
        return Err(ContractError::InvalidChain { chain_id });
    }
    if endpoint.trim().is_empty() {
        return Err(ContractError::InvalidEndpoint { chain_id });
    }
    ENDPOINTS.save(deps.storage, chain_id, &endpoint)?;

    Ok(Response::new()
        .add_attribute("action", "set_endpoint")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("endpoint", endpoint))
}

pub fn execute_remove_endpoint(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    if !ENDPOINTS.has(deps.storage, chain_id) {
        return Err(ContractError::NotFound {
            what: format!("endpoint for chain {}", chain_id),
        });
    }
    ENDPOINTS.remove(deps.storage, chain_id);

    Ok(Response::new()
        .add_attribute("action", "remove_endpoint")
        .add_attribute("chain_id", chain_id.to_string()))
}

pub fn execute_set_support_dst_token_index(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    token_index: u32,
    supported: bool,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let key = (chain_id, token_index);
    let current = DST_TOKEN_SUPPORT.has(deps.storage, key);
    match (current, supported) {
        (true, true) => {
            return Err(ContractError::AlreadyExists {
                what: format!("token index {} on chain {}", token_index, chain_id),
            })
        }
        (false, false) => {
            return Err(ContractError::NotFound {
                what: format!("token index {} on chain {}", token_index, chain_id),
            })
        }
        (false, true) => DST_TOKEN_SUPPORT.save(deps.storage, key, &true)?,
        (true, false) => DST_TOKEN_SUPPORT.remove(deps.storage, key),
    }

    Ok(Response::new()
        .add_attribute("action", "set_support_dst_token_index")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token_index", token_index.to_string())
        .add_attribute("supported", supported.to_string()))
}

// ============================================================================
// Collaborators & ownership
// ============================================================================

pub fn execute_set_faucet_fund(
    deps: DepsMut,
    info: MessageInfo,
    faucet: Option<String>,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let faucet = faucet.map(|f| deps.api.addr_validate(&f)).transpose()?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.faucet = faucet.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_faucet_fund")
        .add_attribute(
            "faucet",
            faucet.map_or_else(|| "none".to_string(), |f| f.to_string()),
        ))
}

pub fn execute_set_courier(
    deps: DepsMut,
    info: MessageInfo,
    courier: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let courier = deps.api.addr_validate(&courier)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.courier = Some(courier.clone());
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_courier")
        .add_attribute("courier", courier))
}

pub fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.as_ref(), &info)?;

    let owner = deps.api.addr_validate(&owner)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.owner = owner.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("owner", owner))
}
