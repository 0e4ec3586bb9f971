//! Interface of the rebasing yield token.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};

/// Interest rates are expressed in units of 1/100_000 (5_000 = 5% per year).
pub const RATE_DENOMINATOR: u64 = 100_000;

#[cw_serde]
pub enum YieldTokenExecuteMsg {
    /// Wrap `amount` underlying into yield-bearing balance for `recipient`
    /// (defaults to the caller).
    Deposit {
        amount: Uint128,
        recipient: Option<String>,
    },
    /// Unwrap `amount` of the caller's balance back into underlying.
    Withdraw { amount: Uint128 },
    /// Controller only: credit `recipient` with `amount` of underlying the
    /// caller has already moved into the yield token's reserve.
    Wrap { recipient: String, amount: Uint128 },
}

#[cw_serde]
pub enum YieldTokenQueryMsg {
    YieldInfo {},
}

#[cw_serde]
pub struct YieldInfoResponse {
    pub owner: String,
    pub worker: Option<String>,
    pub underlying: String,
    pub interest_rate: u64,
    pub blocks_per_year: u64,
    /// Underlying value of one share.
    pub exchange_rate: Decimal,
    pub interest_per_block: Decimal,
    pub last_accrual_height: u64,
    pub total_shares: Uint128,
    pub total_value: Uint128,
    pub deposit_paused: bool,
    pub withdraw_paused: bool,
    pub min_amount: Uint128,
    pub max_amount: Uint128,
}
