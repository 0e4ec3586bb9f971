use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, wasm_execute, Addr, Api, CosmosMsg, Deps, Env, StdResult, Uint128,
};
use cw20::Cw20ExecuteMsg;

use common::asset::{Asset, AssetInfo};
use common::custodian::{CustodianExecuteMsg, CustodianHookMsg};

use super::{validate_addr, Custody};
use crate::error::ContractError;

/// Deposits are supplied to an external lending custodian and redeemed from
/// it on withdrawal.
#[cw_serde]
pub struct ExternalLending {
    pub token: Addr,
    pub custodian: Addr,
}

impl Custody for ExternalLending {
    fn name(&self) -> &'static str {
        "external_lending"
    }

    fn asset(&self) -> AssetInfo {
        AssetInfo::cw20(self.token.as_str())
    }

    fn deposit(&self, _env: &Env, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        let supply = Cw20ExecuteMsg::Send {
            contract: self.custodian.to_string(),
            amount,
            msg: to_json_binary(&CustodianHookMsg::Supply {})?,
        };
        Ok(vec![wasm_execute(&self.token, &supply, vec![])?.into()])
    }

    fn withdraw(
        &self,
        _deps: Deps,
        _env: &Env,
        receiver: &Addr,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let redeem = CustodianExecuteMsg::Redeem { amount };
        let release = Asset {
            info: self.asset(),
            amount,
        };
        Ok(vec![
            wasm_execute(&self.custodian, &redeem, vec![])?.into(),
            release.transfer_msg(receiver.as_str())?,
        ])
    }

    fn validate(&self, api: &dyn Api) -> StdResult<()> {
        validate_addr(api, &self.token)?;
        validate_addr(api, &self.custodian)
    }
}
