use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use common::asset::AssetInfo;
pub use common::vault::VaultInfoResponse;

use crate::strategy::Strategy;

#[cw_serde]
pub struct InstantiateMsg {
    pub token_index: u32,
    pub strategy: Strategy,
    pub min_deposit: Uint128,
    pub controller: Option<String>,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Controller only
    Deposit { receiver: String, amount: Uint128 },
    /// Controller only
    Withdraw { receiver: String, amount: Uint128 },

    // Owner operations
    SetController { controller: String },
    RevokeController {},
    SetMinDeposit { amount: Uint128 },
    SetDepositPause { paused: bool },
    UpdateOwner { owner: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(VaultInfoResponse)]
    VaultInfo {},
    /// Amount of the vault asset sitting in the vault itself
    #[returns(HoldingsResponse)]
    Holdings {},
}

#[cw_serde]
pub struct HoldingsResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}
