use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, TokenInfoResponse};

pub use common::token::IsControllerResponse;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Controller only
    Mint { recipient: String, amount: Uint128 },
    /// Controller only; burns from any holder without an allowance
    Burn { from: String, amount: Uint128 },
    /// Owner only
    SetController { controller: String, enabled: bool },
    /// Owner only
    UpdateOwner { owner: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(IsControllerResponse)]
    IsController { address: String },
    #[returns(ControllersResponse)]
    Controllers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct ControllersResponse {
    pub controllers: Vec<String>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}
