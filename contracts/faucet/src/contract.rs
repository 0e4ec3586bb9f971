use cosmwasm_std::{
    entry_point, to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo,
    Order, Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, IsPoolResponse, MigrateMsg, PoolsResponse,
    QueryMsg,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, DENOM, FAUCET_AMOUNT, OWNER, POOLS};

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
    DENOM.save(deps.storage, &msg.denom)?;
    FAUCET_AMOUNT.save(deps.storage, &msg.faucet_amount)?;

    for pool in &msg.pools {
        let pool = deps.api.addr_validate(pool)?;
        POOLS.save(deps.storage, &pool, &true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("denom", msg.denom)
        .add_attribute("faucet_amount", msg.faucet_amount)
        .add_attribute("pool_count", msg.pools.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransferTo { receiver } => execute_transfer_to(deps, env, info, receiver),
        ExecuteMsg::AddPool { pool } => execute_add_pool(deps, info, pool),
        ExecuteMsg::RemovePool { pool } => execute_remove_pool(deps, info, pool),
        ExecuteMsg::SetFaucet { amount } => execute_set_faucet(deps, info, amount),
        ExecuteMsg::RescueFund {} => execute_rescue_fund(deps, env, info),
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, info, owner),
    }
}

fn assert_owner(deps: &DepsMut, sender: &Addr) -> Result<Addr, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if *sender != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(owner)
}

fn execute_transfer_to(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
) -> Result<Response, ContractError> {
    if !POOLS.has(deps.storage, &info.sender) {
        return Err(ContractError::Unauthorized);
    }

    let receiver = deps.api.addr_validate(&receiver)?;
    let denom = DENOM.load(deps.storage)?;
    let amount = FAUCET_AMOUNT.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount;

    // An empty faucet never fails the caller.
    if amount.is_zero() || balance < amount {
        return Ok(Response::new()
            .add_attribute("action", "transfer_to")
            .add_attribute("faucet_status", "skipped")
            .add_attribute("receiver", receiver)
            .add_attribute("balance", balance));
    }

    let payout = BankMsg::Send {
        to_address: receiver.to_string(),
        amount: vec![Coin { denom, amount }],
    };

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "transfer_to")
        .add_attribute("faucet_status", "paid")
        .add_attribute("pool", info.sender)
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount))
}

fn execute_add_pool(
    deps: DepsMut,
    info: MessageInfo,
    pool: String,
) -> Result<Response, ContractError> {
    assert_owner(&deps, &info.sender)?;

    let pool_addr = deps.api.addr_validate(&pool)?;
    if POOLS.has(deps.storage, &pool_addr) {
        return Err(ContractError::AlreadyExists { pool });
    }
    POOLS.save(deps.storage, &pool_addr, &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_pool")
        .add_attribute("pool", pool_addr))
}

fn execute_remove_pool(
    deps: DepsMut,
    info: MessageInfo,
    pool: String,
) -> Result<Response, ContractError> {
    assert_owner(&deps, &info.sender)?;

    let pool_addr = deps.api.addr_validate(&pool)?;
    if !POOLS.has(deps.storage, &pool_addr) {
        return Err(ContractError::NotFound { pool });
    }
    POOLS.remove(deps.storage, &pool_addr);

    Ok(Response::new()
        .add_attribute("action", "remove_pool")
        .add_attribute("pool", pool_addr))
}

fn execute_set_faucet(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(&deps, &info.sender)?;
    FAUCET_AMOUNT.save(deps.storage, &amount)?;

    Ok(Response::new()
        .add_attribute("action", "set_faucet")
        .add_attribute("faucet_amount", amount))
}

fn execute_rescue_fund(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let owner = assert_owner(&deps, &info.sender)?;

    let denom = DENOM.load(deps.storage)?;
    let balance = deps.querier.query_balance(&env.contract.address, &denom)?;

    let mut response = Response::new()
        .add_attribute("action", "rescue_fund")
        .add_attribute("to", owner.as_str())
        .add_attribute("amount", balance.amount);
    if !balance.amount.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: owner.to_string(),
            amount: vec![balance],
        });
    }
    Ok(response)
}

fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    assert_owner(&deps, &info.sender)?;

    let new_owner = deps.api.addr_validate(&owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("owner", new_owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::IsPool { address } => {
            let addr = deps.api.addr_validate(&address)?;
            to_json_binary(&IsPoolResponse {
                is_pool: POOLS.has(deps.storage, &addr),
            })
        }
        QueryMsg::Pools { start_after, limit } => {
            to_json_binary(&query_pools(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps, env: Env) -> StdResult<ConfigResponse> {
    let denom = DENOM.load(deps.storage)?;
    let balance = deps.querier.query_balance(&env.contract.address, &denom)?;
    Ok(ConfigResponse {
        owner: OWNER.load(deps.storage)?.to_string(),
        denom,
        faucet_amount: FAUCET_AMOUNT.load(deps.storage)?,
        balance: balance.amount,
    })
}

fn query_pools(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PoolsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let pools = POOLS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|key| key.map(|addr| addr.to_string()))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PoolsResponse { pools })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
