use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

pub use common::token::IsControllerResponse;
pub use common::yield_token::YieldInfoResponse;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Bridge token being wrapped; this contract must be one of its controllers
    pub underlying: String,
    /// Annual rate in units of 1/100_000
    pub interest_rate: u64,
    pub blocks_per_year: u64,
    pub min_amount: Uint128,
    pub max_amount: Uint128,
    pub worker: Option<String>,
    /// Defaults to the instantiating account
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pull `amount` underlying from the caller (allowance required) and
    /// credit its value to `recipient`
    Deposit {
        amount: Uint128,
        recipient: Option<String>,
    },
    /// Redeem `amount` of the caller's balance for underlying
    Withdraw { amount: Uint128 },
    /// Controller only: credit shares worth `amount` to `recipient` for
    /// underlying the caller already delivered to this contract. Ignores the
    /// deposit pause and bounds.
    Wrap { recipient: String, amount: Uint128 },
    /// Worker only: accrue interest since the last accrual
    Compound {},
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
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

    // Owner operations
    SetInterestRate { rate: u64 },
    SetBlocksPerYear { blocks: u64 },
    SetWorker { worker: Option<String> },
    SetController { controller: String, enabled: bool },
    SetDepositPause { paused: bool },
    SetWithdrawPause { paused: bool },
    SetMinAmount { amount: Uint128 },
    SetMaxAmount { amount: Uint128 },
    UpdateOwner { owner: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Balance in underlying units
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// `total_supply` is the total underlying value of all shares
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(SharesResponse)]
    Shares { address: String },
    #[returns(YieldInfoResponse)]
    YieldInfo {},
    #[returns(IsControllerResponse)]
    IsController { address: String },
}

#[cw_serde]
pub struct SharesResponse {
    pub shares: Uint128,
}
