//! Vault strategies against live token contracts.
//!
//! The controller is played by a plain account standing in for the bridge:
//! it moves funds into the vault and then calls `Deposit`, exactly as the
//! bridge does, and calls `Withdraw` to release.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult,
    Uint128,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::asset::{Asset, AssetInfo};
use common::custodian::CustodianExecuteMsg;
use vault::msg::{ExecuteMsg, HoldingsResponse, InstantiateMsg, QueryMsg, VaultInfoResponse};
use vault::strategy::{ExternalLending, LockUnlock, MintBurn, Native, Strategy, WrappedYield};

const DENOM: &str = "uluna";

// ============================================================================
// Mock lending custodian
// ============================================================================

#[cw_serde]
struct CustodianInstantiateMsg {
    asset: AssetInfo,
}

const CUSTODIAN_ASSET: Item<AssetInfo> = Item::new("asset");

fn custodian_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: CustodianInstantiateMsg,
) -> StdResult<Response> {
    CUSTODIAN_ASSET.save(deps.storage, &msg.asset)?;
    Ok(Response::new())
}

fn custodian_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: CustodianExecuteMsg,
) -> StdResult<Response> {
    match msg {
        CustodianExecuteMsg::Receive(_) | CustodianExecuteMsg::SupplyNative {} => {
            Ok(Response::new().add_attribute("action", "supply"))
        }
        CustodianExecuteMsg::Redeem { amount } => {
            let asset = Asset {
                info: CUSTODIAN_ASSET.load(deps.storage)?,
                amount,
            };
            Ok(Response::new().add_message(asset.transfer_msg(info.sender.as_str())?))
        }
    }
}

fn custodian_query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    Err(StdError::generic_err("no queries"))
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_vault() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        vault::contract::execute,
        vault::contract::instantiate,
        vault::contract::query,
    ))
}

fn contract_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    ))
}

fn contract_yield_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        yield_token::contract::execute,
        yield_token::contract::instantiate,
        yield_token::contract::query,
    ))
}

fn contract_custodian() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        custodian_execute,
        custodian_instantiate,
        custodian_query,
    ))
}

struct TestEnv {
    app: App,
    owner: Addr,
    bridge: Addr,
    user: Addr,
}

fn setup() -> TestEnv {
    let owner = Addr::unchecked("terra1owner");
    let bridge = Addr::unchecked("terra1bridge");
    let user = Addr::unchecked("terra1user");

    let app = App::new(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &bridge, coins(10_000, DENOM))
            .unwrap();
    });

    TestEnv {
        app,
        owner,
        bridge,
        user,
    }
}

fn instantiate_token(env: &mut TestEnv, symbol: &str, holder: &Addr, amount: u128) -> Addr {
    let code_id = env.app.store_code(contract_token());
    env.app
        .instantiate_contract(
            code_id,
            env.owner.clone(),
            &token::msg::InstantiateMsg {
                name: symbol.to_string(),
                symbol: symbol.to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: holder.to_string(),
                    amount: Uint128::new(amount),
                }],
                owner: None,
            },
            &[],
            symbol,
            None,
        )
        .unwrap()
}

fn instantiate_vault(env: &mut TestEnv, strategy: Strategy) -> Addr {
    let code_id = env.app.store_code(contract_vault());
    env.app
        .instantiate_contract(
            code_id,
            env.owner.clone(),
            &InstantiateMsg {
                token_index: 3,
                strategy,
                min_deposit: Uint128::new(10),
                controller: Some(env.bridge.to_string()),
                owner: None,
            },
            &[],
            "vault",
            None,
        )
        .unwrap()
}

fn instantiate_custodian(env: &mut TestEnv, asset: AssetInfo) -> Addr {
    let code_id = env.app.store_code(contract_custodian());
    env.app
        .instantiate_contract(
            code_id,
            env.owner.clone(),
            &CustodianInstantiateMsg { asset },
            &[],
            "custodian",
            None,
        )
        .unwrap()
}

fn enable_controller(env: &mut TestEnv, token: &Addr, controller: &Addr) {
    env.app
        .execute_contract(
            env.owner.clone(),
            token.clone(),
            &token::msg::ExecuteMsg::SetController {
                controller: controller.to_string(),
                enabled: true,
            },
            &[],
        )
        .unwrap();
}

fn cw20_transfer(env: &mut TestEnv, token: &Addr, from: &Addr, to: &Addr, amount: u128) {
    env.app
        .execute_contract(
            from.clone(),
            token.clone(),
            &cw20::Cw20ExecuteMsg::Transfer {
                recipient: to.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
}

fn vault_deposit(env: &mut TestEnv, vault: &Addr, amount: u128) -> Result<(), String> {
    env.app
        .execute_contract(
            env.bridge.clone(),
            vault.clone(),
            &ExecuteMsg::Deposit {
                receiver: env.bridge.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .map(|_| ())
        .map_err(|e| e.root_cause().to_string())
}

fn vault_withdraw(env: &mut TestEnv, vault: &Addr, amount: u128) -> Result<(), String> {
    let receiver = env.user.to_string();
    env.app
        .execute_contract(
            env.bridge.clone(),
            vault.clone(),
            &ExecuteMsg::Withdraw {
                receiver,
                amount: Uint128::new(amount),
            },
            &[],
        )
        .map(|_| ())
        .map_err(|e| e.root_cause().to_string())
}

fn cw20_balance(app: &App, token: &Addr, address: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(app: &App, token: &Addr) -> Uint128 {
    let res: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

// ============================================================================
// Mint / burn
// ============================================================================

#[test]
fn test_mint_burn_round_trip() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let token = instantiate_token(&mut env, "USDT", &bridge, 1_000);
    let vault = instantiate_vault(
        &mut env,
        Strategy::MintBurn(MintBurn {
            token: token.clone(),
        }),
    );
    enable_controller(&mut env, &token, &vault);

    cw20_transfer(&mut env, &token, &bridge, &vault, 400);
    vault_deposit(&mut env, &vault, 400).unwrap();

    assert_eq!(cw20_balance(&env.app, &token, &vault), Uint128::zero());
    assert_eq!(total_supply(&env.app, &token), Uint128::new(600));

    vault_withdraw(&mut env, &vault, 250).unwrap();
    assert_eq!(cw20_balance(&env.app, &token, &env.user), Uint128::new(250));
    assert_eq!(total_supply(&env.app, &token), Uint128::new(850));
}

#[test]
fn test_deposit_more_than_held_fails() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let token = instantiate_token(&mut env, "USDT", &bridge, 1_000);
    let vault = instantiate_vault(
        &mut env,
        Strategy::MintBurn(MintBurn {
            token: token.clone(),
        }),
    );
    enable_controller(&mut env, &token, &vault);

    cw20_transfer(&mut env, &token, &bridge, &vault, 100);
    let err = vault_deposit(&mut env, &vault, 101).unwrap_err();
    assert!(err.contains("Insufficient amount"), "unexpected error: {err}");
}

// ============================================================================
// Lock / unlock
// ============================================================================

#[test]
fn test_lock_unlock_keeps_custody() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let token = instantiate_token(&mut env, "BTC", &bridge, 1_000);
    let vault = instantiate_vault(
        &mut env,
        Strategy::LockUnlock(LockUnlock {
            token: token.clone(),
        }),
    );

    cw20_transfer(&mut env, &token, &bridge, &vault, 400);
    vault_deposit(&mut env, &vault, 400).unwrap();
    assert_eq!(cw20_balance(&env.app, &token, &vault), Uint128::new(400));

    let holdings: HoldingsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&vault, &QueryMsg::Holdings {})
        .unwrap();
    assert_eq!(holdings.amount, Uint128::new(400));

    let err = vault_withdraw(&mut env, &vault, 401).unwrap_err();
    assert!(err.contains("Insufficient amount"), "unexpected error: {err}");

    vault_withdraw(&mut env, &vault, 400).unwrap();
    assert_eq!(cw20_balance(&env.app, &token, &env.user), Uint128::new(400));
    assert_eq!(total_supply(&env.app, &token), Uint128::new(1_000));
}

// ============================================================================
// External lending
// ============================================================================

#[test]
fn test_external_lending_supplies_and_redeems() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let token = instantiate_token(&mut env, "USDC", &bridge, 1_000);
    let custodian = instantiate_custodian(&mut env, AssetInfo::cw20(token.as_str()));
    let vault = instantiate_vault(
        &mut env,
        Strategy::ExternalLending(ExternalLending {
            token: token.clone(),
            custodian: custodian.clone(),
        }),
    );

    cw20_transfer(&mut env, &token, &bridge, &vault, 400);
    vault_deposit(&mut env, &vault, 400).unwrap();
    assert_eq!(cw20_balance(&env.app, &token, &vault), Uint128::zero());
    assert_eq!(cw20_balance(&env.app, &token, &custodian), Uint128::new(400));

    vault_withdraw(&mut env, &vault, 150).unwrap();
    assert_eq!(cw20_balance(&env.app, &token, &env.user), Uint128::new(150));
    assert_eq!(cw20_balance(&env.app, &token, &custodian), Uint128::new(250));
    assert_eq!(cw20_balance(&env.app, &token, &vault), Uint128::zero());
}

// ============================================================================
// Wrapped yield
// ============================================================================

struct WrappedYieldEnv {
    underlying: Addr,
    yield_token: Addr,
    vault: Addr,
}

/// The bridge account ends up holding 1_000 eUSDT.
fn setup_wrapped_yield(env: &mut TestEnv) -> WrappedYieldEnv {
    let bridge = env.bridge.clone();
    let underlying = instantiate_token(env, "USDT", &bridge, 1_000);

    let yield_code = env.app.store_code(contract_yield_token());
    let yield_token = env
        .app
        .instantiate_contract(
            yield_code,
            env.owner.clone(),
            &yield_token::msg::InstantiateMsg {
                name: "Ethernal USDT".to_string(),
                symbol: "eUSDT".to_string(),
                decimals: 6,
                underlying: underlying.to_string(),
                interest_rate: 5_000,
                blocks_per_year: 10_512_000,
                min_amount: Uint128::new(10),
                max_amount: Uint128::new(1_000_000),
                worker: None,
                owner: None,
            },
            &[],
            "eusdt",
            None,
        )
        .unwrap();
    let vault = instantiate_vault(
        env,
        Strategy::WrappedYield(WrappedYield {
            yield_token: yield_token.clone(),
            underlying: underlying.clone(),
        }),
    );
    enable_controller(env, &underlying, &yield_token);
    enable_controller(env, &underlying, &vault);
    enable_controller(env, &yield_token, &vault);

    env.app
        .execute_contract(
            bridge.clone(),
            underlying.clone(),
            &token::msg::ExecuteMsg::IncreaseAllowance {
                spender: yield_token.to_string(),
                amount: Uint128::new(1_000),
                expires: None,
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            bridge,
            yield_token.clone(),
            &yield_token::msg::ExecuteMsg::Deposit {
                amount: Uint128::new(1_000),
                recipient: None,
            },
            &[],
        )
        .unwrap();

    WrappedYieldEnv {
        underlying,
        yield_token,
        vault,
    }
}

#[test]
fn test_wrapped_yield_unwraps_and_rewraps() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let WrappedYieldEnv {
        underlying,
        yield_token,
        vault,
    } = setup_wrapped_yield(&mut env);

    cw20_transfer(&mut env, &yield_token, &bridge, &vault, 400);
    vault_deposit(&mut env, &vault, 400).unwrap();

    assert_eq!(cw20_balance(&env.app, &yield_token, &vault), Uint128::zero());
    assert_eq!(total_supply(&env.app, &underlying), Uint128::new(600));

    vault_withdraw(&mut env, &vault, 300).unwrap();
    assert_eq!(
        cw20_balance(&env.app, &yield_token, &env.user),
        Uint128::new(300)
    );
    assert_eq!(
        cw20_balance(&env.app, &underlying, &yield_token),
        Uint128::new(900)
    );

    let info: VaultInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&vault, &QueryMsg::VaultInfo {})
        .unwrap();
    assert_eq!(info.strategy, "wrapped_yield");
    assert_eq!(info.asset, AssetInfo::cw20(yield_token.as_str()));
    assert_eq!(info.yield_token, Some(yield_token.to_string()));
}

#[test]
fn test_wrapped_yield_release_ignores_yield_token_gates() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let WrappedYieldEnv {
        underlying,
        yield_token,
        vault,
    } = setup_wrapped_yield(&mut env);

    cw20_transfer(&mut env, &yield_token, &bridge, &vault, 400);
    vault_deposit(&mut env, &vault, 400).unwrap();

    for msg in [
        yield_token::msg::ExecuteMsg::SetDepositPause { paused: true },
        yield_token::msg::ExecuteMsg::SetMaxAmount {
            amount: Uint128::new(100),
        },
    ] {
        env.app
            .execute_contract(env.owner.clone(), yield_token.clone(), &msg, &[])
            .unwrap();
    }

    // Above max_amount while deposits are paused
    vault_withdraw(&mut env, &vault, 300).unwrap();
    // Below min_amount
    vault_withdraw(&mut env, &vault, 5).unwrap();

    assert_eq!(
        cw20_balance(&env.app, &yield_token, &env.user),
        Uint128::new(305)
    );
    assert_eq!(
        cw20_balance(&env.app, &underlying, &yield_token),
        Uint128::new(905)
    );
}

#[test]
fn test_wrapped_yield_release_requires_yield_controller() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let WrappedYieldEnv {
        yield_token, vault, ..
    } = setup_wrapped_yield(&mut env);

    cw20_transfer(&mut env, &yield_token, &bridge, &vault, 400);
    vault_deposit(&mut env, &vault, 400).unwrap();

    env.app
        .execute_contract(
            env.owner.clone(),
            yield_token.clone(),
            &yield_token::msg::ExecuteMsg::SetController {
                controller: vault.to_string(),
                enabled: false,
            },
            &[],
        )
        .unwrap();
    let err = vault_withdraw(&mut env, &vault, 300).unwrap_err();
    assert!(err.contains("Unauthorized"), "{}", err);
}

// ============================================================================
// Native
// ============================================================================

#[test]
fn test_native_custody_without_custodian() {
    let mut env = setup();
    let vault = instantiate_vault(
        &mut env,
        Strategy::Native(Native {
            denom: DENOM.to_string(),
            custodian: None,
        }),
    );

    env.app
        .execute_contract(
            env.bridge.clone(),
            vault.clone(),
            &ExecuteMsg::Deposit {
                receiver: env.bridge.to_string(),
                amount: Uint128::new(400),
            },
            &coins(400, DENOM),
        )
        .unwrap();
    assert_eq!(
        env.app.wrap().query_balance(&vault, DENOM).unwrap().amount,
        Uint128::new(400)
    );

    vault_withdraw(&mut env, &vault, 100).unwrap();
    assert_eq!(
        env.app
            .wrap()
            .query_balance(&env.user, DENOM)
            .unwrap()
            .amount,
        Uint128::new(100)
    );
}

#[test]
fn test_native_custody_with_custodian() {
    let mut env = setup();
    let custodian = instantiate_custodian(&mut env, AssetInfo::native(DENOM));
    let vault = instantiate_vault(
        &mut env,
        Strategy::Native(Native {
            denom: DENOM.to_string(),
            custodian: Some(custodian.clone()),
        }),
    );

    env.app
        .execute_contract(
            env.bridge.clone(),
            vault.clone(),
            &ExecuteMsg::Deposit {
                receiver: env.bridge.to_string(),
                amount: Uint128::new(400),
            },
            &coins(400, DENOM),
        )
        .unwrap();
    assert_eq!(
        env.app
            .wrap()
            .query_balance(&custodian, DENOM)
            .unwrap()
            .amount,
        Uint128::new(400)
    );

    vault_withdraw(&mut env, &vault, 100).unwrap();
    assert_eq!(
        env.app
            .wrap()
            .query_balance(&env.user, DENOM)
            .unwrap()
            .amount,
        Uint128::new(100)
    );
    assert_eq!(
        env.app
            .wrap()
            .query_balance(&custodian, DENOM)
            .unwrap()
            .amount,
        Uint128::new(300)
    );
}

#[test]
fn test_owner_setters() {
    let mut env = setup();
    let bridge = env.bridge.clone();
    let token = instantiate_token(&mut env, "USDT", &bridge, 1_000);
    let vault = instantiate_vault(
        &mut env,
        Strategy::LockUnlock(LockUnlock {
            token: token.clone(),
        }),
    );

    let res = env.app.execute_contract(
        env.user.clone(),
        vault.clone(),
        &ExecuteMsg::SetMinDeposit {
            amount: Uint128::new(1),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Unauthorized"));

    env.app
        .execute_contract(
            env.owner.clone(),
            vault.clone(),
            &ExecuteMsg::SetMinDeposit {
                amount: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    let info: VaultInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&vault, &QueryMsg::VaultInfo {})
        .unwrap();
    assert_eq!(info.min_deposit, Uint128::new(500));
    assert_eq!(info.controller, Some(env.bridge.to_string()));
    assert_eq!(info.token_index, 3);
}
