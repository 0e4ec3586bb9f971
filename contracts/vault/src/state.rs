use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::strategy::Strategy;

pub const CONTRACT_NAME: &str = "crates.io:ethernal-vault";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// The bridge; unset until the owner wires it in
    pub controller: Option<Addr>,
    pub token_index: u32,
    pub min_deposit: Uint128,
    pub deposit_paused: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const STRATEGY: Item<Strategy> = Item::new("strategy");
