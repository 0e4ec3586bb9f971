//! Share accounting.
//!
//! Values are rounded down and share debits are rounded up, so the contract
//! never promises more underlying than its shares are worth.

use cosmwasm_std::{Decimal, StdError, StdResult, Uint128, Uint256};

use common::yield_token::RATE_DENOMINATOR;

const FRACTIONAL: u128 = 1_000_000_000_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

/// Underlying value of `shares` at `rate`, rounded down.
pub fn shares_to_value(shares: Uint128, rate: Decimal) -> StdResult<Uint128> {
    let value = shares.full_mul(rate.atomics()) / Uint256::from(FRACTIONAL);
    Ok(Uint128::try_from(value)?)
}

/// Shares representing `value` underlying at `rate`.
pub fn value_to_shares(value: Uint128, rate: Decimal, rounding: Rounding) -> StdResult<Uint128> {
    if rate.is_zero() {
        return Err(StdError::generic_err("exchange rate is zero"));
    }
    let numerator = value.full_mul(FRACTIONAL);
    let denominator = Uint256::from(rate.atomics());
    let mut shares = numerator / denominator;
    if rounding == Rounding::Up && !(numerator % denominator).is_zero() {
        shares += Uint256::one();
    }
    Ok(Uint128::try_from(shares)?)
}

/// Per-block growth of the exchange rate for an annual `rate`.
pub fn interest_per_block(rate: u64, blocks_per_year: u64) -> StdResult<Decimal> {
    let denominator = Uint128::from(RATE_DENOMINATOR) * Uint128::from(blocks_per_year);
    Decimal::checked_from_ratio(rate, denominator)
        .map_err(|e| StdError::generic_err(e.to_string()))
}

/// Exchange rate after `elapsed` blocks of simple per-block growth.
pub fn accrue(rate: Decimal, per_block: Decimal, elapsed: u64) -> StdResult<Decimal> {
    let growth = per_block.checked_mul(Decimal::from_ratio(elapsed, 1u64))?;
    Ok(rate.checked_mul(Decimal::one().checked_add(growth)?)?)
}
