//! Uniform vault interface used by the bridge.
//!
//! The bridge never knows how a vault holds its asset. It only calls
//! `Deposit` after moving the user's funds into the vault and `Withdraw`
//! when a transfer has to be released.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::asset::AssetInfo;

#[cw_serde]
pub enum VaultExecuteMsg {
    /// Take custody of `amount` already transferred to the vault.
    Deposit { receiver: String, amount: Uint128 },
    /// Release `amount` to `receiver`.
    Withdraw { receiver: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum VaultQueryMsg {
    #[returns(VaultInfoResponse)]
    VaultInfo {},
}

#[cw_serde]
pub struct VaultInfoResponse {
    pub token_index: u32,
    /// Asset a user hands to the bridge for this vault.
    pub asset: AssetInfo,
    pub owner: String,
    pub controller: Option<String>,
    pub min_deposit: Uint128,
    pub deposit_paused: bool,
    /// Custody strategy name, e.g. `mint_burn`.
    pub strategy: String,
    /// Set for vaults wrapping a yield token.
    pub yield_token: Option<String>,
}
