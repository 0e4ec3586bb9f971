use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:ethernal-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OWNER: Item<Addr> = Item::new("owner");

/// controller => enabled
pub const CONTROLLERS: Map<&Addr, bool> = Map::new("controllers");
