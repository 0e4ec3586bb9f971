//! Controller surface of the bridge token.
//!
//! Vaults and yield tokens hold controller rights on a token and drive its
//! supply through these messages. The variants serialize identically to the
//! token contract's own `Mint`/`Burn` execute variants.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cw_serde]
pub enum TokenControllerMsg {
    /// Credit `amount` new tokens to `recipient`.
    Mint { recipient: String, amount: Uint128 },
    /// Destroy `amount` tokens held by `from`. No allowance is required.
    Burn { from: String, amount: Uint128 },
}

#[cw_serde]
pub enum TokenControllerQueryMsg {
    IsController { address: String },
}

#[cw_serde]
pub struct IsControllerResponse {
    pub is_controller: bool,
}
