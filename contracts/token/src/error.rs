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

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },
}
