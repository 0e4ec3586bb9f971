use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating account
    pub owner: Option<String>,
    pub denom: String,
    pub faucet_amount: Uint128,
    /// Initial set of pools allowed to request payouts
    pub pools: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pool only: pay `faucet_amount` to `receiver` if the balance covers it
    TransferTo { receiver: String },
    /// Owner: allow a pool to request payouts
    AddPool { pool: String },
    /// Owner: revoke a pool
    RemovePool { pool: String },
    /// Owner: change the per-receiver payout
    SetFaucet { amount: Uint128 },
    /// Owner: sweep the whole balance back to the owner
    RescueFund {},
    UpdateOwner { owner: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(IsPoolResponse)]
    IsPool { address: String },
    #[returns(PoolsResponse)]
    Pools {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub denom: String,
    pub faucet_amount: Uint128,
    /// Current balance of `denom` held by the faucet
    pub balance: Uint128,
}

#[cw_serde]
pub struct IsPoolResponse {
    pub is_pool: bool,
}

#[cw_serde]
pub struct PoolsResponse {
    pub pools: Vec<String>,
}
