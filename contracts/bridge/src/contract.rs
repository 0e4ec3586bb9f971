//! Ethernal Bridge Contract - Entry Points
//!
//! Handlers live in `execute/` and `query`; this module only dispatches.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_allow_token, execute_add_pair_token_index, execute_admin_refund,
    execute_receive_message, execute_remove_allow_token, execute_remove_endpoint,
    execute_remove_pair_token_index, execute_send, execute_send_native, execute_set_courier,
    execute_set_endpoint, execute_set_faucet_fund, execute_set_support_dst_token_index,
    execute_update_owner,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowed_token, query_allowed_tokens, query_config, query_current_uid,
    query_encode_payload, query_endpoint, query_endpoints, query_incoming,
    query_is_dst_token_supported, query_is_pair_allowed, query_is_received, query_outgoing,
    query_outgoings, query_pairs, query_stats, query_vault_by_index,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FAUCET_REPLY_ID, STATS, UID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let courier = msg
        .courier
        .map(|c| deps.api.addr_validate(&c))
        .transpose()?;
    let faucet = msg.faucet.map(|f| deps.api.addr_validate(&f)).transpose()?;

    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidToken {
            token: msg.native_denom,
        });
    }
    if msg.address_prefix.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "address_prefix must not be empty".to_string(),
        });
    }

    let config = Config {
        owner,
        chain_id: msg.chain_id,
        native_denom: msg.native_denom,
        address_prefix: msg.address_prefix,
        courier,
        faucet,
    };
    CONFIG.save(deps.storage, &config)?;
    UID.save(deps.storage, &msg.initial_uid)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("initial_uid", msg.initial_uid.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Send {
            token,
            amount,
            dst_chain_id,
            dst_token_index,
            receiver,
        } => execute_send(
            deps,
            env,
            info,
            token,
            amount,
            dst_chain_id,
            dst_token_index,
            receiver,
        ),
        ExecuteMsg::SendNative {
            dst_chain_id,
            dst_token_index,
            receiver,
        } => execute_send_native(deps, env, info, dst_chain_id, dst_token_index, receiver),
        ExecuteMsg::ReceiveMessage { payload } => {
            execute_receive_message(deps, env, info, payload.as_slice())
        }
        ExecuteMsg::AdminRefund { uid } => execute_admin_refund(deps, info, uid),

        // Configuration
        ExecuteMsg::AddAllowToken { token, vault } => {
            execute_add_allow_token(deps, info, token, vault)
        }
        ExecuteMsg::RemoveAllowToken { token } => execute_remove_allow_token(deps, info, token),
        ExecuteMsg::AddPairTokenIndex { src, dst } => {
            execute_add_pair_token_index(deps, info, src, dst)
        }
        ExecuteMsg::RemovePairTokenIndex { src, dst } => {
            execute_remove_pair_token_index(deps, info, src, dst)
        }
        ExecuteMsg::SetEndpoint { chain_id, endpoint } => {
            execute_set_endpoint(deps, info, chain_id, endpoint)
        }
        ExecuteMsg::RemoveEndpoint { chain_id } => execute_remove_endpoint(deps, info, chain_id),
        ExecuteMsg::SetSupportDstTokenIndex {
            chain_id,
            token_index,
            supported,
        } => execute_set_support_dst_token_index(deps, info, chain_id, token_index, supported),
        ExecuteMsg::SetFaucetFund { faucet } => execute_set_faucet_fund(deps, info, faucet),
        ExecuteMsg::SetCourier { courier } => execute_set_courier(deps, info, courier),
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, info, owner),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Only the faucet subsidy is dispatched as a submessage, and only its
/// failure is replied to. The failure is recorded and swallowed so the
/// incoming transfer still lands.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (FAUCET_REPLY_ID, SubMsgResult::Err(err)) => Ok(Response::new()
            .add_attribute("action", "faucet_reply")
            .add_attribute("faucet_status", "failed")
            .add_attribute("faucet_error", err)),
        (id, _) => Err(ContractError::Std(cosmwasm_std::StdError::generic_err(
            format!("Unexpected reply: id {}", id),
        ))),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CurrentUid {} => to_json_binary(&query_current_uid(deps)?),
        QueryMsg::Outgoing { uid } => to_json_binary(&query_outgoing(deps, uid)?),
        QueryMsg::Outgoings { start_after, limit } => {
            to_json_binary(&query_outgoings(deps, start_after, limit)?)
        }
        QueryMsg::Incoming { src_chain_id, uid } => {
            to_json_binary(&query_incoming(deps, src_chain_id, uid)?)
        }
        QueryMsg::IsReceived { src_chain_id, uid } => {
            to_json_binary(&query_is_received(deps, src_chain_id, uid)?)
        }
        QueryMsg::AllowedToken { token } => to_json_binary(&query_allowed_token(deps, token)?),
        QueryMsg::AllowedTokens { start_after, limit } => {
            to_json_binary(&query_allowed_tokens(deps, start_after, limit)?)
        }
        QueryMsg::VaultByIndex { token_index } => {
            to_json_binary(&query_vault_by_index(deps, token_index)?)
        }
        QueryMsg::IsPairAllowed { src, dst } => {
            to_json_binary(&query_is_pair_allowed(deps, src, dst)?)
        }
        QueryMsg::Pairs { start_after, limit } => {
            to_json_binary(&query_pairs(deps, start_after, limit)?)
        }
        QueryMsg::Endpoint { chain_id } => to_json_binary(&query_endpoint(deps, chain_id)?),
        QueryMsg::Endpoints { start_after, limit } => {
            to_json_binary(&query_endpoints(deps, start_after, limit)?)
        }
        QueryMsg::IsDstTokenSupported {
            chain_id,
            token_index,
        } => to_json_binary(&query_is_dst_token_supported(deps, chain_id, token_index)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::EncodePayload {
            uid,
            src_token_index,
            dst_token_index,
            amount,
            src_chain_id,
            dst_chain_id,
            from,
            receiver,
        } => to_json_binary(&query_encode_payload(
            uid,
            src_token_index,
            dst_token_index,
            amount,
            src_chain_id,
            dst_chain_id,
            from,
            receiver,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Addr, SubMsgResponse};

    use crate::msg::{ConfigResponse, CurrentUidResponse};

    const OWNER: &str = "terra1fsgzj6t7udv8zhf6zj32mkqhcjcpv52yw55xl5";

    fn default_instantiate() -> InstantiateMsg {
        InstantiateMsg {
            owner: None,
            chain_id: 1,
            native_denom: "uluna".to_string(),
            address_prefix: "terra".to_string(),
            courier: Some("courier".to_string()),
            faucet: None,
            initial_uid: 0,
        }
    }

    #[test]
    fn test_instantiate() {
        let mut deps = mock_dependencies();
        let info = mock_info(OWNER, &[]);
        let res = instantiate(deps.as_mut(), mock_env(), info, default_instantiate()).unwrap();
        assert_eq!(res.attributes[0].value, "instantiate");

        let config: ConfigResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
        assert_eq!(config.owner, Addr::unchecked(OWNER));
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.courier, Some(Addr::unchecked("courier")));
        assert_eq!(config.faucet, None);

        let uid: CurrentUidResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::CurrentUid {}).unwrap()).unwrap();
        assert_eq!(uid.uid, 0);
    }

    #[test]
    fn test_instantiate_rejects_empty_prefix() {
        let mut deps = mock_dependencies();
        let mut msg = default_instantiate();
        msg.address_prefix = String::new();
        let err = instantiate(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg).unwrap_err();
        assert!(matches!(err, ContractError::InvalidAddress { .. }));
    }

    #[test]
    fn test_receive_message_requires_courier() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            default_instantiate(),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("intruder", &[]),
            ExecuteMsg::ReceiveMessage {
                payload: Binary::from(vec![0u8; 256]),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_receive_message_rejects_short_payload() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            default_instantiate(),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("courier", &[]),
            ExecuteMsg::ReceiveMessage {
                payload: Binary::from(vec![0u8; 64]),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidPayload { .. }));
    }

    #[test]
    fn test_set_endpoint_guards() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            default_instantiate(),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            ExecuteMsg::SetEndpoint {
                chain_id: 56,
                endpoint: "0xbridge".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::SetEndpoint {
                chain_id: 1,
                endpoint: "0xbridge".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidChain { chain_id: 1 });

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::SetEndpoint {
                chain_id: 56,
                endpoint: " ".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidEndpoint { chain_id: 56 });

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::RemoveEndpoint { chain_id: 56 },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::NotFound { .. }));
    }

    #[test]
    fn test_dst_token_support_toggle() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            default_instantiate(),
        )
        .unwrap();

        let set = |supported| ExecuteMsg::SetSupportDstTokenIndex {
            chain_id: 56,
            token_index: 3,
            supported,
        };

        let err = execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), set(false))
            .unwrap_err();
        assert!(matches!(err, ContractError::NotFound { .. }));

        execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), set(true)).unwrap();
        let err =
            execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), set(true)).unwrap_err();
        assert!(matches!(err, ContractError::AlreadyExists { .. }));

        execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), set(false)).unwrap();
    }

    #[test]
    fn test_pair_table_is_directional() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            default_instantiate(),
        )
        .unwrap();

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::AddPairTokenIndex { src: 103, dst: 3 },
        )
        .unwrap();

        let forward: crate::msg::IsPairAllowedResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::IsPairAllowed { src: 103, dst: 3 },
            )
            .unwrap(),
        )
        .unwrap();
        assert!(forward.allowed);

        let reverse: crate::msg::IsPairAllowedResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::IsPairAllowed { src: 3, dst: 103 },
            )
            .unwrap(),
        )
        .unwrap();
        assert!(!reverse.allowed);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER, &[]),
            ExecuteMsg::AddPairTokenIndex { src: 103, dst: 3 },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::AlreadyExists { .. }));
    }

    #[test]
    fn test_reply_swallows_faucet_failure() {
        let mut deps = mock_dependencies();
        let res = reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: FAUCET_REPLY_ID,
                result: SubMsgResult::Err("faucet empty".to_string()),
            },
        )
        .unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "faucet_status" && a.value == "failed"));

        for id in [FAUCET_REPLY_ID, 99] {
            let err = reply(
                deps.as_mut(),
                mock_env(),
                Reply {
                    id,
                    result: SubMsgResult::Ok(SubMsgResponse {
                        events: vec![],
                        data: None,
                    }),
                },
            )
            .unwrap_err();
            assert!(matches!(err, ContractError::Std(_)));
        }
    }
}
