use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:ethernal-yield-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Annual rates at or above 50% are rejected.
pub const MAX_INTEREST_RATE: u64 = 50_000;

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Account allowed to call `Compound`
    pub worker: Option<Addr>,
    pub underlying: Addr,
    /// Annual rate in units of 1/100_000
    pub interest_rate: u64,
    pub blocks_per_year: u64,
    pub deposit_paused: bool,
    pub withdraw_paused: bool,
    pub min_amount: Uint128,
    pub max_amount: Uint128,
}

/// Exchange rate between shares and underlying, and the height it was last moved at.
#[cw_serde]
pub struct YieldIndex {
    pub exchange_rate: Decimal,
    pub last_accrual_height: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const INDEX: Item<YieldIndex> = Item::new("yield_index");
/// Accounts allowed to `Wrap` without the deposit gates
pub const CONTROLLERS: Map<&Addr, bool> = Map::new("controllers");
