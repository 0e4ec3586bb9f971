use cosmwasm_schema::cw_serde;
use cosmwasm_std::{wasm_execute, Addr, Api, CosmosMsg, Deps, Env, StdResult, Uint128};

use common::asset::AssetInfo;
use common::token::TokenControllerMsg;

use super::{validate_addr, Custody};
use crate::error::ContractError;

/// The vault is a controller of `token`: deposits are burnt and
/// withdrawals are freshly minted.
#[cw_serde]
pub struct MintBurn {
    pub token: Addr,
}

impl Custody for MintBurn {
    fn name(&self) -> &'static str {
        "mint_burn"
    }

    fn asset(&self) -> AssetInfo {
        AssetInfo::cw20(self.token.as_str())
    }

    fn deposit(&self, env: &Env, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        let burn = TokenControllerMsg::Burn {
            from: env.contract.address.to_string(),
            amount,
        };
        Ok(vec![wasm_execute(&self.token, &burn, vec![])?.into()])
    }

    fn withdraw(
        &self,
        _deps: Deps,
        _env: &Env,
        receiver: &Addr,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let mint = TokenControllerMsg::Mint {
            recipient: receiver.to_string(),
            amount,
        };
        Ok(vec![wasm_execute(&self.token, &mint, vec![])?.into()])
    }

    fn validate(&self, api: &dyn Api) -> StdResult<()> {
        validate_addr(api, &self.token)
    }
}
