use cosmwasm_schema::cw_serde;
use cosmwasm_std::{wasm_execute, Addr, Api, CosmosMsg, Deps, Env, StdResult, Uint128};

use common::asset::AssetInfo;
use common::token::TokenControllerMsg;
use common::yield_token::YieldTokenExecuteMsg;

use super::{validate_addr, Custody};
use crate::error::ContractError;

/// Users bridge the yield token. Deposits unwrap it and burn the underlying;
/// withdrawals mint underlying into the yield token's reserve and wrap it for
/// the receiver.
///
/// The vault must be a controller of both `underlying` and `yield_token`.
#[cw_serde]
pub struct WrappedYield {
    pub yield_token: Addr,
    pub underlying: Addr,
}

impl Custody for WrappedYield {
    fn name(&self) -> &'static str {
        "wrapped_yield"
    }

    fn asset(&self) -> AssetInfo {
        AssetInfo::cw20(self.yield_token.as_str())
    }

    fn deposit(&self, env: &Env, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        let unwrap = YieldTokenExecuteMsg::Withdraw { amount };
        let burn = TokenControllerMsg::Burn {
            from: env.contract.address.to_string(),
            amount,
        };
        Ok(vec![
            wasm_execute(&self.yield_token, &unwrap, vec![])?.into(),
            wasm_execute(&self.underlying, &burn, vec![])?.into(),
        ])
    }

    fn withdraw(
        &self,
        _deps: Deps,
        _env: &Env,
        receiver: &Addr,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let mint = TokenControllerMsg::Mint {
            recipient: self.yield_token.to_string(),
            amount,
        };
        let wrap = YieldTokenExecuteMsg::Wrap {
            recipient: receiver.to_string(),
            amount,
        };
        Ok(vec![
            wasm_execute(&self.underlying, &mint, vec![])?.into(),
            wasm_execute(&self.yield_token, &wrap, vec![])?.into(),
        ])
    }

    fn yield_token(&self) -> Option<&Addr> {
        Some(&self.yield_token)
    }

    fn validate(&self, api: &dyn Api) -> StdResult<()> {
        validate_addr(api, &self.yield_token)?;
        validate_addr(api, &self.underlying)
    }
}
