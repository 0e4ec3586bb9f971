use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, HoldingsResponse, InstantiateMsg, MigrateMsg, QueryMsg, VaultInfoResponse,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STRATEGY};

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
    let controller = msg
        .controller
        .map(|c| deps.api.addr_validate(&c))
        .transpose()?;

    msg.strategy.custody().validate(deps.api)?;
    STRATEGY.save(deps.storage, &msg.strategy)?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            controller,
            token_index: msg.token_index,
            min_deposit: msg.min_deposit,
            deposit_paused: false,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("token_index", msg.token_index.to_string())
        .add_attribute("strategy", msg.strategy.custody().name()))
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
        ExecuteMsg::Deposit { receiver, amount } => {
            execute_deposit(deps, env, info, receiver, amount)
        }
        ExecuteMsg::Withdraw { receiver, amount } => {
            execute_withdraw(deps, env, info, receiver, amount)
        }
        ExecuteMsg::SetController { controller } => {
            execute_set_controller(deps, info, controller)
        }
        ExecuteMsg::RevokeController {} => {
            let mut config = load_as_owner(&deps, &info)?;
            config.controller = None;
            CONFIG.save(deps.storage, &config)?;
            Ok(Response::new().add_attribute("action", "revoke_controller"))
        }
        ExecuteMsg::SetMinDeposit { amount } => {
            let mut config = load_as_owner(&deps, &info)?;
            config.min_deposit = amount;
            CONFIG.save(deps.storage, &config)?;
            Ok(Response::new()
                .add_attribute("action", "set_min_deposit")
                .add_attribute("min_deposit", amount))
        }
        ExecuteMsg::SetDepositPause { paused } => {
            let mut config = load_as_owner(&deps, &info)?;
            config.deposit_paused = paused;
            CONFIG.save(deps.storage, &config)?;
            Ok(Response::new()
                .add_attribute("action", "set_deposit_pause")
                .add_attribute("paused", paused.to_string()))
        }
        ExecuteMsg::UpdateOwner { owner } => {
            let mut config = load_as_owner(&deps, &info)?;
            config.owner = deps.api.addr_validate(&owner)?;
            CONFIG.save(deps.storage, &config)?;
            Ok(Response::new()
                .add_attribute("action", "update_owner")
                .add_attribute("owner", config.owner))
        }
    }
}

fn load_as_owner(deps: &DepsMut, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

fn assert_controller(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if config.controller.as_ref() != Some(&info.sender) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_controller(&config, &info)?;

    if config.deposit_paused {
        return Err(ContractError::Paused);
    }
    if amount.is_zero() || amount < config.min_deposit {
        return Err(ContractError::AmountTooSmall {
            amount,
            min: config.min_deposit,
        });
    }

    let strategy = STRATEGY.load(deps.storage)?;
    let custody = strategy.custody();
    let held = custody.held(&deps.querier, &env.contract.address)?;
    if held < amount {
        return Err(ContractError::InsufficientAmount {
            held,
            required: amount,
        });
    }

    let msgs = custody.deposit(&env, amount)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "vault_deposit")
        .add_attribute("strategy", custody.name())
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount))
}

fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_controller(&config, &info)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "withdraw amount must be greater than zero".to_string(),
        });
    }
    let receiver = deps.api.addr_validate(&receiver)?;

    let strategy = STRATEGY.load(deps.storage)?;
    let custody = strategy.custody();
    let msgs = custody.withdraw(deps.as_ref(), &env, &receiver, amount)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "vault_withdraw")
        .add_attribute("strategy", custody.name())
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount))
}

fn execute_set_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(&deps, &info)?;
    if controller.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "controller cannot be empty".to_string(),
        });
    }
    let controller = deps.api.addr_validate(&controller)?;
    config.controller = Some(controller.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_controller")
        .add_attribute("controller", controller))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::VaultInfo {} => to_json_binary(&query_vault_info(deps)?),
        QueryMsg::Holdings {} => {
            let strategy = STRATEGY.load(deps.storage)?;
            let custody = strategy.custody();
            to_json_binary(&HoldingsResponse {
                asset: custody.asset(),
                amount: custody.held(&deps.querier, &env.contract.address)?,
            })
        }
    }
}

fn query_vault_info(deps: Deps) -> StdResult<VaultInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    let strategy = STRATEGY.load(deps.storage)?;
    let custody = strategy.custody();

    Ok(VaultInfoResponse {
        token_index: config.token_index,
        asset: custody.asset(),
        owner: config.owner.to_string(),
        controller: config.controller.map(|c| c.to_string()),
        min_deposit: config.min_deposit,
        deposit_paused: config.deposit_paused,
        strategy: custody.name().to_string(),
        yield_token: custody.yield_token().map(|y| y.to_string()),
    })
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
