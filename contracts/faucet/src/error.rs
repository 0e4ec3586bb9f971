use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not allowed to perform this action")]
    Unauthorized,

    #[error("Already exists: pool {pool}")]
    AlreadyExists { pool: String },

    #[error("Not found: pool {pool}")]
    NotFound { pool: String },
}
