use cosmwasm_std::{Deps, StdError, StdResult, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20QueryMsg};

use bridge::msg::{ConfigResponse, QueryMsg as BridgeQueryMsg};
use bridge::state::AllowedToken;
use common::vault::{VaultInfoResponse, VaultQueryMsg};
use common::yield_token::{YieldInfoResponse, YieldTokenQueryMsg};

use crate::msg::{TokenInfoResponse, UserTokenInfo, UserTokenInfoResponse, YieldLimits};

pub fn query_user_token_info(
    deps: Deps,
    bridge: String,
    account: String,
    tokens: Vec<String>,
) -> StdResult<UserTokenInfoResponse> {
    let bridge = deps.api.addr_validate(&bridge)?;
    let account = deps.api.addr_validate(&account)?;
    let config: ConfigResponse = deps
        .querier
        .query_wasm_smart(&bridge, &BridgeQueryMsg::Config {})?;

    let tokens = tokens
        .into_iter()
        .map(|token| {
            if token == config.native_denom {
                let balance = deps.querier.query_balance(&account, &token)?.amount;
                return Ok(UserTokenInfo {
                    token,
                    balance,
                    allowance: Uint128::zero(),
                });
            }

            let balance: BalanceResponse = deps.querier.query_wasm_smart(
                &token,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )?;
            let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
                &token,
                &Cw20QueryMsg::Allowance {
                    owner: account.to_string(),
                    spender: bridge.to_string(),
                },
            )?;
            Ok(UserTokenInfo {
                token,
                balance: balance.balance,
                allowance: allowance.allowance,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(UserTokenInfoResponse { tokens })
}

pub fn query_token_info(
    deps: Deps,
    bridge: String,
    token: String,
) -> StdResult<TokenInfoResponse> {
    let bridge = deps.api.addr_validate(&bridge)?;
    let allowed: Option<AllowedToken> = deps.querier.query_wasm_smart(
        &bridge,
        &BridgeQueryMsg::AllowedToken {
            token: token.clone(),
        },
    )?;
    let allowed =
        allowed.ok_or_else(|| StdError::not_found(format!("allow-listed token {}", token)))?;

    let vault: VaultInfoResponse = deps
        .querier
        .query_wasm_smart(&allowed.vault, &VaultQueryMsg::VaultInfo {})?;

    let yield_limits = match vault.yield_token {
        Some(yield_token) => {
            let info: YieldInfoResponse = deps
                .querier
                .query_wasm_smart(&yield_token, &YieldTokenQueryMsg::YieldInfo {})?;
            Some(YieldLimits {
                yield_token,
                deposit_paused: info.deposit_paused,
                withdraw_paused: info.withdraw_paused,
                min_amount: info.min_amount,
                max_amount: info.max_amount,
            })
        }
        None => None,
    };

    Ok(TokenInfoResponse {
        token,
        vault: allowed.vault,
        token_index: allowed.token_index,
        strategy: vault.strategy,
        deposit_paused: vault.deposit_paused,
        min_deposit: vault.min_deposit,
        yield_limits,
    })
}
