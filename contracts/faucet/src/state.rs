use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:ethernal-faucet";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OWNER: Item<Addr> = Item::new("owner");

/// Native denom paid out
pub const DENOM: Item<String> = Item::new("denom");

/// Amount paid per `TransferTo`
pub const FAUCET_AMOUNT: Item<Uint128> = Item::new("faucet_amount");

/// Contracts allowed to trigger payouts (bridges)
pub const POOLS: Map<&Addr, bool> = Map::new("pools");
