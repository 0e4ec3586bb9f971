use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{execute_send, execute_transfer, query_balance, query_token_info};
use cw20_base::state::{TokenInfo, BALANCES, TOKEN_INFO};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ControllersResponse, ExecuteMsg, InstantiateMsg, IsControllerResponse, MigrateMsg,
    OwnerResponse, QueryMsg,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, CONTROLLERS, OWNER};

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
    OWNER.save(deps.storage, &owner)?;

    let mut total_supply = Uint128::zero();
    for coin in &msg.initial_balances {
        let address = deps.api.addr_validate(&coin.address)?;
        BALANCES.update(deps.storage, &address, |balance| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(coin.amount)?)
        })?;
        total_supply = total_supply.checked_add(coin.amount).map_err(StdError::from)?;
    }

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply,
            mint: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("total_supply", total_supply))
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
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, info, from, amount),
        ExecuteMsg::SetController {
            controller,
            enabled,
        } => execute_set_controller(deps, info, controller, enabled),
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, info, owner),
    }
}

fn assert_controller(deps: &DepsMut, info: &MessageInfo) -> Result<(), ContractError> {
    let enabled = CONTROLLERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !enabled {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn assert_owner(deps: &DepsMut, info: &MessageInfo) -> Result<(), ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_controller(&deps, &info)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "mint amount must be greater than zero".to_string(),
        });
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    BALANCES.update(deps.storage, &recipient_addr, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_add(amount)?;
        Ok(token_info)
    })?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("controller", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_controller(&deps, &info)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "burn amount must be greater than zero".to_string(),
        });
    }

    let from_addr = deps.api.addr_validate(&from)?;
    let balance = BALANCES
        .may_load(deps.storage, &from_addr)?
        .unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }

    BALANCES.save(deps.storage, &from_addr, &(balance - amount))?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
        Ok(token_info)
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("controller", info.sender)
        .add_attribute("from", from_addr)
        .add_attribute("amount", amount))
}

fn execute_set_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    assert_owner(&deps, &info)?;

    let controller_addr = deps.api.addr_validate(&controller)?;
    if enabled {
        CONTROLLERS.save(deps.storage, &controller_addr, &true)?;
    } else {
        CONTROLLERS.remove(deps.storage, &controller_addr);
    }

    Ok(Response::new()
        .add_attribute("action", "set_controller")
        .add_attribute("controller", controller_addr)
        .add_attribute("enabled", enabled.to_string()))
}

fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    assert_owner(&deps, &info)?;

    let new_owner = deps.api.addr_validate(&owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("owner", new_owner))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::IsController { address } => to_json_binary(&query_is_controller(deps, address)?),
        QueryMsg::Controllers { start_after, limit } => {
            to_json_binary(&query_controllers(deps, start_after, limit)?)
        }
        QueryMsg::Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?.to_string(),
        }),
    }
}

fn query_is_controller(deps: Deps, address: String) -> StdResult<IsControllerResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let is_controller = CONTROLLERS.may_load(deps.storage, &addr)?.unwrap_or(false);
    Ok(IsControllerResponse { is_controller })
}

fn query_controllers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ControllersResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let controllers = CONTROLLERS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|key| key.map(|addr| addr.to_string()))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ControllersResponse { controllers })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cw20::Cw20Coin;

    fn setup(deps: DepsMut) {
        let msg = InstantiateMsg {
            name: "Bridged Tether".to_string(),
            symbol: "USDT".to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: "holder".to_string(),
                amount: Uint128::new(1_000),
            }],
            owner: Some("owner".to_string()),
        };
        instantiate(deps, mock_env(), mock_info("deployer", &[]), msg).unwrap();
    }

    fn enable_controller(deps: DepsMut, controller: &str) {
        execute(
            deps,
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetController {
                controller: controller.to_string(),
                enabled: true,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_instantiate_credits_initial_balances() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let info = query_token_info(deps.as_ref()).unwrap();
        assert_eq!(info.total_supply, Uint128::new(1_000));
        assert_eq!(info.decimals, 6);
        let balance = query_balance(deps.as_ref(), "holder".to_string()).unwrap();
        assert_eq!(balance.balance, Uint128::new(1_000));
    }

    #[test]
    fn test_initial_supply_overflow_rejected() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            name: "Bridged Tether".to_string(),
            symbol: "USDT".to_string(),
            decimals: 6,
            initial_balances: vec![
                Cw20Coin {
                    address: "alice".to_string(),
                    amount: Uint128::MAX,
                },
                Cw20Coin {
                    address: "bob".to_string(),
                    amount: Uint128::one(),
                },
            ],
            owner: None,
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info("deployer", &[]), msg)
            .unwrap_err();
        assert!(matches!(err, ContractError::Std(StdError::Overflow { .. })));
    }

    #[test]
    fn test_mint_requires_controller() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            ExecuteMsg::Mint {
                recipient: "stranger".to_string(),
                amount: Uint128::new(5),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_mint_and_burn_move_supply() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        enable_controller(deps.as_mut(), "vault");

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("vault", &[]),
            ExecuteMsg::Mint {
                recipient: "alice".to_string(),
                amount: Uint128::new(250),
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("vault", &[]),
            ExecuteMsg::Burn {
                from: "holder".to_string(),
                amount: Uint128::new(400),
            },
        )
        .unwrap();

        let info = query_token_info(deps.as_ref()).unwrap();
        assert_eq!(info.total_supply, Uint128::new(850));
        let alice = query_balance(deps.as_ref(), "alice".to_string()).unwrap();
        assert_eq!(alice.balance, Uint128::new(250));
        let holder = query_balance(deps.as_ref(), "holder".to_string()).unwrap();
        assert_eq!(holder.balance, Uint128::new(600));
    }

    #[test]
    fn test_burn_over_balance_fails() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        enable_controller(deps.as_mut(), "vault");

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("vault", &[]),
            ExecuteMsg::Burn {
                from: "holder".to_string(),
                amount: Uint128::new(1_001),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                balance: Uint128::new(1_000),
                required: Uint128::new(1_001),
            }
        );
    }

    #[test]
    fn test_zero_mint_rejected() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        enable_controller(deps.as_mut(), "vault");

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("vault", &[]),
            ExecuteMsg::Mint {
                recipient: "alice".to_string(),
                amount: Uint128::zero(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidAmount { .. }));
    }

    #[test]
    fn test_disabled_controller_loses_rights() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        enable_controller(deps.as_mut(), "vault");

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetController {
                controller: "vault".to_string(),
                enabled: false,
            },
        )
        .unwrap();

        let res = query_is_controller(deps.as_ref(), "vault".to_string()).unwrap();
        assert!(!res.is_controller);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("vault", &[]),
            ExecuteMsg::Mint {
                recipient: "vault".to_string(),
                amount: Uint128::new(1),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_set_controller_owner_only() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("holder", &[]),
            ExecuteMsg::SetController {
                controller: "holder".to_string(),
                enabled: true,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }
}
