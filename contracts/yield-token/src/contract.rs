use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Decimal, Deps, DepsMut, Env,
    MessageInfo, Response, StdResult, Storage, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw20_base::allowances::{
    deduct_allowance, execute_decrease_allowance, execute_increase_allowance, query_allowance,
};
use cw20_base::state::{TokenInfo, BALANCES, TOKEN_INFO};

use common::token::TokenControllerMsg;

use crate::error::ContractError;
use crate::math::{accrue, interest_per_block, shares_to_value, value_to_shares, Rounding};
use crate::msg::{
    ExecuteMsg, InstantiateMsg, IsControllerResponse, MigrateMsg, QueryMsg, SharesResponse,
    YieldInfoResponse,
};
use crate::state::{
    Config, YieldIndex, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CONTROLLERS, INDEX,
    MAX_INTEREST_RATE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_interest_rate(msg.interest_rate)?;
    validate_blocks_per_year(msg.blocks_per_year)?;
    validate_bounds(msg.min_amount, msg.max_amount)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let worker = msg
        .worker
        .map(|w| deps.api.addr_validate(&w))
        .transpose()?;

    let config = Config {
        owner,
        worker,
        underlying: deps.api.addr_validate(&msg.underlying)?,
        interest_rate: msg.interest_rate,
        blocks_per_year: msg.blocks_per_year,
        deposit_paused: false,
        withdraw_paused: false,
        min_amount: msg.min_amount,
        max_amount: msg.max_amount,
    };
    CONFIG.save(deps.storage, &config)?;

    INDEX.save(
        deps.storage,
        &YieldIndex {
            exchange_rate: Decimal::one(),
            last_accrual_height: env.block.height,
        },
    )?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            mint: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("symbol", msg.symbol)
        .add_attribute("underlying", config.underlying)
        .add_attribute("interest_rate", config.interest_rate.to_string()))
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
        ExecuteMsg::Deposit { amount, recipient } => {
            execute_deposit(deps, env, info, amount, recipient)
        }
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, env, info, amount),
        ExecuteMsg::Wrap { recipient, amount } => execute_wrap(deps, info, recipient, amount),
        ExecuteMsg::Compound {} => execute_compound(deps, env, info),
        ExecuteMsg::Transfer { recipient, amount } => {
            let recipient = deps.api.addr_validate(&recipient)?;
            let shares = move_value(deps.storage, &info.sender, &recipient, amount)?;
            Ok(Response::new()
                .add_attribute("action", "transfer")
                .add_attribute("from", info.sender)
                .add_attribute("to", recipient)
                .add_attribute("amount", amount)
                .add_attribute("shares", shares))
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
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
        ExecuteMsg::SetInterestRate { rate } => execute_set_interest_rate(deps, env, info, rate),
        ExecuteMsg::SetBlocksPerYear { blocks } => {
            execute_set_blocks_per_year(deps, env, info, blocks)
        }
        ExecuteMsg::SetWorker { worker } => execute_set_worker(deps, info, worker),
        ExecuteMsg::SetController {
            controller,
            enabled,
        } => execute_set_controller(deps, info, controller, enabled),
        ExecuteMsg::SetDepositPause { paused } => {
            update_config(deps, info, "set_deposit_pause", |config| {
                config.deposit_paused = paused;
                Ok(paused.to_string())
            })
        }
        ExecuteMsg::SetWithdrawPause { paused } => {
            update_config(deps, info, "set_withdraw_pause", |config| {
                config.withdraw_paused = paused;
                Ok(paused.to_string())
            })
        }
        ExecuteMsg::SetMinAmount { amount } => {
            update_config(deps, info, "set_min_amount", |config| {
                validate_bounds(amount, config.max_amount)?;
                config.min_amount = amount;
                Ok(amount.to_string())
            })
        }
        ExecuteMsg::SetMaxAmount { amount } => {
            update_config(deps, info, "set_max_amount", |config| {
                validate_bounds(config.min_amount, amount)?;
                config.max_amount = amount;
                Ok(amount.to_string())
            })
        }
        ExecuteMsg::UpdateOwner { owner } => {
            let new_owner = deps.api.addr_validate(&owner)?;
            update_config(deps, info, "update_owner", |config| {
                config.owner = new_owner.clone();
                Ok(new_owner.to_string())
            })
        }
    }
}

fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.deposit_paused {
        return Err(ContractError::Paused {
            operation: "deposit".to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    if amount < config.min_amount {
        return Err(ContractError::AmountTooSmall {
            amount,
            min: config.min_amount,
        });
    }
    if amount > config.max_amount {
        return Err(ContractError::AmountTooLarge {
            amount,
            max: config.max_amount,
        });
    }

    let recipient = match recipient {
        Some(r) => deps.api.addr_validate(&r)?,
        None => info.sender.clone(),
    };

    let index = INDEX.load(deps.storage)?;
    let shares = value_to_shares(amount, index.exchange_rate, Rounding::Down)?;
    if shares.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount is worth less than one share".to_string(),
        });
    }
    credit_shares(deps.storage, &recipient, shares)?;

    let pull = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.underlying.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("shares", shares))
}

fn execute_wrap(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let is_controller = CONTROLLERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !is_controller {
        return Err(ContractError::Unauthorized);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let index = INDEX.load(deps.storage)?;
    let shares = value_to_shares(amount, index.exchange_rate, Rounding::Down)?;
    if shares.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount is worth less than one share".to_string(),
        });
    }
    credit_shares(deps.storage, &recipient, shares)?;

    Ok(Response::new()
        .add_attribute("action", "wrap")
        .add_attribute("controller", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("shares", shares))
}

fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.withdraw_paused {
        return Err(ContractError::Paused {
            operation: "withdraw".to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let reserve: BalanceResponse = deps.querier.query_wasm_smart(
        &config.underlying,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if reserve.balance < amount {
        return Err(ContractError::InsufficientReserve {
            reserve: reserve.balance,
            required: amount,
        });
    }

    let index = INDEX.load(deps.storage)?;
    let shares = value_to_shares(amount, index.exchange_rate, Rounding::Up)?;
    let held = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if held < shares {
        return Err(ContractError::InsufficientBalance {
            balance: shares_to_value(held, index.exchange_rate)?,
            required: amount,
        });
    }

    BALANCES.save(deps.storage, &info.sender, &(held - shares))?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_sub(shares)?;
        Ok(token_info)
    })?;

    let release = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.underlying.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "withdraw")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("shares", shares))
}

fn execute_compound(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.worker.as_ref() != Some(&info.sender) {
        return Err(ContractError::Unauthorized);
    }

    let (index, minted) = accrue_interest(deps.storage, &env, &config)?;

    Ok(Response::new()
        .add_messages(reserve_mint_msg(&config, &env, minted)?)
        .add_attribute("action", "compound")
        .add_attribute("exchange_rate", index.exchange_rate.to_string())
        .add_attribute("height", index.last_accrual_height.to_string())
        .add_attribute("minted", minted))
}

fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    deduct_allowance(deps.storage, &owner, &info.sender, &env.block, amount)?;
    let shares = move_value(deps.storage, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("shares", shares))
}

fn execute_set_interest_rate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    rate: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info)?;
    validate_interest_rate(rate)?;

    // Interest up to this block is owed at the old rate.
    let (_, minted) = accrue_interest(deps.storage, &env, &config)?;
    let mint = reserve_mint_msg(&config, &env, minted)?;

    config.interest_rate = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_messages(mint)
        .add_attribute("action", "set_interest_rate")
        .add_attribute("interest_rate", rate.to_string())
        .add_attribute("minted", minted))
}

fn execute_set_blocks_per_year(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    blocks: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info)?;
    validate_blocks_per_year(blocks)?;

    let (_, minted) = accrue_interest(deps.storage, &env, &config)?;
    let mint = reserve_mint_msg(&config, &env, minted)?;

    config.blocks_per_year = blocks;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_messages(mint)
        .add_attribute("action", "set_blocks_per_year")
        .add_attribute("blocks_per_year", blocks.to_string())
        .add_attribute("minted", minted))
}

fn execute_set_worker(
    deps: DepsMut,
    info: MessageInfo,
    worker: Option<String>,
) -> Result<Response, ContractError> {
    let worker = worker.map(|w| deps.api.addr_validate(&w)).transpose()?;
    update_config(deps, info, "set_worker", |config| {
        config.worker = worker.clone();
        Ok(worker
            .as_ref()
            .map(|w| w.to_string())
            .unwrap_or_else(|| "none".to_string()))
    })
}

fn execute_set_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info)?;

    let controller = deps.api.addr_validate(&controller)?;
    if enabled {
        CONTROLLERS.save(deps.storage, &controller, &true)?;
    } else {
        CONTROLLERS.remove(deps.storage, &controller);
    }

    Ok(Response::new()
        .add_attribute("action", "set_controller")
        .add_attribute("controller", controller)
        .add_attribute("enabled", enabled.to_string()))
}

// ============================================================================
// Helpers
// ============================================================================

fn assert_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Owner-gated config mutation; `apply` returns the attribute value to log.
fn update_config<F>(
    deps: DepsMut,
    info: MessageInfo,
    action: &str,
    apply: F,
) -> Result<Response, ContractError>
where
    F: FnOnce(&mut Config) -> Result<String, ContractError>,
{
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info)?;
    let value = apply(&mut config)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", action)
        .add_attribute("value", value))
}

fn validate_interest_rate(rate: u64) -> Result<(), ContractError> {
    if rate >= MAX_INTEREST_RATE {
        return Err(ContractError::RateTooHigh {
            rate,
            max: MAX_INTEREST_RATE,
        });
    }
    Ok(())
}

fn validate_blocks_per_year(blocks: u64) -> Result<(), ContractError> {
    if blocks == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "blocks per year must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn validate_bounds(min: Uint128, max: Uint128) -> Result<(), ContractError> {
    if min > max {
        return Err(ContractError::InvalidConfig {
            reason: format!("min amount {} exceeds max amount {}", min, max),
        });
    }
    Ok(())
}

/// Moves the exchange rate up to the current height. Returns the new index
/// and the underlying the reserve must gain to back it.
fn accrue_interest(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
) -> StdResult<(YieldIndex, Uint128)> {
    let mut index = INDEX.load(storage)?;
    let elapsed = env.block.height.saturating_sub(index.last_accrual_height);
    if elapsed == 0 {
        return Ok((index, Uint128::zero()));
    }

    let total_shares = TOKEN_INFO.load(storage)?.total_supply;
    let per_block = interest_per_block(config.interest_rate, config.blocks_per_year)?;
    let new_rate = accrue(index.exchange_rate, per_block, elapsed)?;
    let minted = shares_to_value(total_shares, new_rate)?
        .checked_sub(shares_to_value(total_shares, index.exchange_rate)?)?;

    index.exchange_rate = new_rate;
    index.last_accrual_height = env.block.height;
    INDEX.save(storage, &index)?;

    Ok((index, minted))
}

fn reserve_mint_msg(config: &Config, env: &Env, amount: Uint128) -> StdResult<Option<CosmosMsg>> {
    if amount.is_zero() {
        return Ok(None);
    }
    Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.underlying.to_string(),
        msg: to_json_binary(&TokenControllerMsg::Mint {
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    })))
}

fn credit_shares(storage: &mut dyn Storage, to: &Addr, shares: Uint128) -> StdResult<()> {
    BALANCES.update(storage, to, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(shares)?)
    })?;
    TOKEN_INFO.update(storage, |mut token_info| -> StdResult<_> {
        token_info.total_supply = token_info.total_supply.checked_add(shares)?;
        Ok(token_info)
    })?;
    Ok(())
}

/// Moves shares worth `amount` underlying from `from` to `to`.
fn move_value(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let index = INDEX.load(storage)?;
    let shares = value_to_shares(amount, index.exchange_rate, Rounding::Up)?;
    let held = BALANCES.may_load(storage, from)?.unwrap_or_default();
    if held < shares {
        return Err(ContractError::InsufficientBalance {
            balance: shares_to_value(held, index.exchange_rate)?,
            required: amount,
        });
    }

    BALANCES.save(storage, from, &(held - shares))?;
    BALANCES.update(storage, to, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(shares)?)
    })?;
    Ok(shares)
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
        QueryMsg::IsController { address } => {
            let addr = deps.api.addr_validate(&address)?;
            let is_controller = CONTROLLERS.may_load(deps.storage, &addr)?.unwrap_or(false);
            to_json_binary(&IsControllerResponse { is_controller })
        }
        QueryMsg::Shares { address } => {
            let addr = deps.api.addr_validate(&address)?;
            let shares = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
            to_json_binary(&SharesResponse { shares })
        }
        QueryMsg::YieldInfo {} => to_json_binary(&query_yield_info(deps)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let shares = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    let index = INDEX.load(deps.storage)?;
    Ok(BalanceResponse {
        balance: shares_to_value(shares, index.exchange_rate)?,
    })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    let index = INDEX.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: token_info.name,
        symbol: token_info.symbol,
        decimals: token_info.decimals,
        total_supply: shares_to_value(token_info.total_supply, index.exchange_rate)?,
    })
}

fn query_yield_info(deps: Deps) -> StdResult<YieldInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    let index = INDEX.load(deps.storage)?;
    let total_shares = TOKEN_INFO.load(deps.storage)?.total_supply;

    Ok(YieldInfoResponse {
        owner: config.owner.to_string(),
        worker: config.worker.map(|w| w.to_string()),
        underlying: config.underlying.to_string(),
        interest_rate: config.interest_rate,
        blocks_per_year: config.blocks_per_year,
        exchange_rate: index.exchange_rate,
        interest_per_block: interest_per_block(config.interest_rate, config.blocks_per_year)?,
        last_accrual_height: index.last_accrual_height,
        total_shares,
        total_value: shares_to_value(total_shares, index.exchange_rate)?,
        deposit_paused: config.deposit_paused,
        withdraw_paused: config.withdraw_paused,
        min_amount: config.min_amount,
        max_amount: config.max_amount,
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

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    fn instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            name: "Ethernal USDT".to_string(),
            symbol: "eUSDT".to_string(),
            decimals: 6,
            underlying: "underlying".to_string(),
            interest_rate: 5_000,
            blocks_per_year: 10_512_000,
            min_amount: Uint128::new(10),
            max_amount: Uint128::new(1_000_000),
            worker: Some("worker".to_string()),
            owner: Some("owner".to_string()),
        }
    }

    #[test]
    fn test_instantiate_rejects_rate_at_cap() {
        let mut deps = mock_dependencies();
        let mut msg = instantiate_msg();
        msg.interest_rate = 50_000;
        let err = instantiate(deps.as_mut(), mock_env(), mock_info("deployer", &[]), msg)
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::RateTooHigh {
                rate: 50_000,
                max: MAX_INTEREST_RATE
            }
        );
    }

    #[test]
    fn test_set_blocks_per_year_zero_rejected() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            instantiate_msg(),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetBlocksPerYear { blocks: 0 },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidConfig { .. }));
    }

    #[test]
    fn test_deposit_checks_in_order() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            instantiate_msg(),
        )
        .unwrap();

        let deposit = |amount: u128| ExecuteMsg::Deposit {
            amount: Uint128::new(amount),
            recipient: None,
        };

        let err = execute(deps.as_mut(), mock_env(), mock_info("user", &[]), deposit(0))
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidAmount { .. }));

        let err = execute(deps.as_mut(), mock_env(), mock_info("user", &[]), deposit(9))
            .unwrap_err();
        assert!(matches!(err, ContractError::AmountTooSmall { .. }));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user", &[]),
            deposit(1_000_001),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::AmountTooLarge { .. }));

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetDepositPause { paused: true },
        )
        .unwrap();
        let err = execute(deps.as_mut(), mock_env(), mock_info("user", &[]), deposit(0))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::Paused {
                operation: "deposit".to_string()
            }
        );
    }

    #[test]
    fn test_deposit_at_unit_rate_credits_amount() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            instantiate_msg(),
        )
        .unwrap();

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user", &[]),
            ExecuteMsg::Deposit {
                amount: Uint128::new(1_000),
                recipient: None,
            },
        )
        .unwrap();
        assert_eq!(res.messages.len(), 1);

        let balance = query_balance(deps.as_ref(), "user".to_string()).unwrap();
        assert_eq!(balance.balance, Uint128::new(1_000));
    }

    #[test]
    fn test_compound_is_worker_only() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            instantiate_msg(),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::Compound {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_wrap_is_controller_only_and_ignores_deposit_gates() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            instantiate_msg(),
        )
        .unwrap();
        let wrap = |amount: u128| ExecuteMsg::Wrap {
            recipient: "receiver".to_string(),
            amount: Uint128::new(amount),
        };

        let err = execute(deps.as_mut(), mock_env(), mock_info("vault", &[]), wrap(100))
            .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetController {
                controller: "vault".to_string(),
                enabled: true,
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetDepositPause { paused: true },
        )
        .unwrap();

        // Paused, below min_amount, and above max_amount all still release.
        for amount in [5, 2_000_000] {
            let res = execute(deps.as_mut(), mock_env(), mock_info("vault", &[]), wrap(amount))
                .unwrap();
            assert!(res.messages.is_empty());
        }
        let balance = query_balance(deps.as_ref(), "receiver".to_string()).unwrap();
        assert_eq!(balance.balance, Uint128::new(2_000_005));

        let err = execute(deps.as_mut(), mock_env(), mock_info("vault", &[]), wrap(0))
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidAmount { .. }));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("deployer", &[]),
            instantiate_msg(),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetMinAmount {
                amount: Uint128::new(2_000_000),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidConfig { .. }));
    }
}
