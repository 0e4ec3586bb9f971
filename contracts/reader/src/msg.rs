use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Balance of `account` and its allowance to `bridge` for each token.
    /// The bridge's native denom reports the bank balance and no allowance.
    #[returns(UserTokenInfoResponse)]
    UserTokenInfo {
        bridge: String,
        account: String,
        tokens: Vec<String>,
    },

    /// Deposit limits for an allow-listed token.
    #[returns(TokenInfoResponse)]
    TokenInfo { bridge: String, token: String },
}

#[cw_serde]
pub struct UserTokenInfo {
    pub token: String,
    pub balance: Uint128,
    pub allowance: Uint128,
}

#[cw_serde]
pub struct UserTokenInfoResponse {
    pub tokens: Vec<UserTokenInfo>,
}

#[cw_serde]
pub struct YieldLimits {
    pub yield_token: String,
    pub deposit_paused: bool,
    pub withdraw_paused: bool,
    pub min_amount: Uint128,
    pub max_amount: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub token: String,
    pub vault: Addr,
    pub token_index: u32,
    pub strategy: String,
    pub deposit_paused: bool,
    pub min_deposit: Uint128,
    /// Present for vaults wrapping a yield token
    pub yield_limits: Option<YieldLimits>,
}
