use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not allowed to perform this action")]
    Unauthorized,

    #[error("Paused: vault deposits are paused")]
    Paused,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Amount too small: {amount} below minimum deposit {min}")]
    AmountTooSmall { amount: Uint128, min: Uint128 },

    #[error("Insufficient amount: vault holds {held}, needs {required}")]
    InsufficientAmount { held: Uint128, required: Uint128 },
}
