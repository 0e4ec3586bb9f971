use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("Unauthorized: caller is not allowed to perform this action")]
    Unauthorized,

    #[error("Paused: {operation} is paused")]
    Paused { operation: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Amount too small: {amount} below minimum {min}")]
    AmountTooSmall { amount: Uint128, min: Uint128 },

    #[error("Amount too large: {amount} above maximum {max}")]
    AmountTooLarge { amount: Uint128, max: Uint128 },

    #[error("Insufficient reserve: have {reserve}, need {required}")]
    InsufficientReserve { reserve: Uint128, required: Uint128 },

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },

    #[error("Rate too high: {rate} must be below {max}")]
    RateTooHigh { rate: u64, max: u64 },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
