use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coins, wasm_execute, Addr, Api, CosmosMsg, Deps, Env, StdResult, Uint128};

use common::asset::{Asset, AssetInfo};
use common::custodian::CustodianExecuteMsg;

use super::{ensure_held, validate_addr, Custody};
use crate::error::ContractError;

/// Custody of the chain's native currency. With a custodian set, deposits
/// are supplied to it and withdrawals redeemed from it first.
#[cw_serde]
pub struct Native {
    pub denom: String,
    pub custodian: Option<Addr>,
}

impl Custody for Native {
    fn name(&self) -> &'static str {
        "native"
    }

    fn asset(&self) -> AssetInfo {
        AssetInfo::native(self.denom.as_str())
    }

    fn deposit(&self, _env: &Env, amount: Uint128) -> StdResult<Vec<CosmosMsg>> {
        match &self.custodian {
            Some(custodian) => {
                let supply = wasm_execute(
                    custodian,
                    &CustodianExecuteMsg::SupplyNative {},
                    coins(amount.u128(), &self.denom),
                )?;
                Ok(vec![supply.into()])
            }
            None => Ok(vec![]),
        }
    }

    fn withdraw(
        &self,
        deps: Deps,
        env: &Env,
        receiver: &Addr,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let mut msgs: Vec<CosmosMsg> = vec![];
        if let Some(custodian) = &self.custodian {
            let redeem = CustodianExecuteMsg::Redeem { amount };
            msgs.push(wasm_execute(custodian, &redeem, vec![])?.into());
        } else {
            ensure_held(self, deps, env, amount)?;
        }
        let release = Asset {
            info: self.asset(),
            amount,
        };
        msgs.push(release.transfer_msg(receiver.as_str())?);
        Ok(msgs)
    }

    fn validate(&self, api: &dyn Api) -> StdResult<()> {
        match &self.custodian {
            Some(custodian) => validate_addr(api, custodian),
            None => Ok(()),
        }
    }
}
