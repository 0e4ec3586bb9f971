use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, CosmosMsg, Deps, Env, StdResult, Uint128};

use common::asset::{Asset, AssetInfo};

use super::{ensure_held, validate_addr, Custody};
use crate::error::ContractError;

/// Plain custody of a CW20 balance.
#[cw_serde]
pub struct LockUnlock {
    pub token: Addr,
}

impl Custody for LockUnlock {
    fn name(&self) -> &'static str {
        "lock_unlock"
    }

    fn asset(&self) -> AssetInfo {
        AssetInfo::cw20(self.token.as_str())
    }

    fn deposit(&self, _env: &Env, _amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![])
    }

    fn withdraw(
        &self,
        deps: Deps,
        env: &Env,
        receiver: &Addr,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        ensure_held(self, deps, env, amount)?;
        let asset = Asset {
            info: self.asset(),
            amount,
        };
        Ok(vec![asset.transfer_msg(receiver.as_str())?])
    }

    fn validate(&self, api: &dyn Api) -> StdResult<()> {
        validate_addr(api, &self.token)
    }
}
