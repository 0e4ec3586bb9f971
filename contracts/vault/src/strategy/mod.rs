//! Custody strategies.
//!
//! Every strategy answers the same three questions: which asset does the
//! bridge hand over, how is a deposit taken into custody, and how is an
//! amount released to a receiver.

mod lending;
mod lock_unlock;
mod mint_burn;
mod native;
mod wrapped_yield;

pub use lending::ExternalLending;
pub use lock_unlock::LockUnlock;
pub use mint_burn::MintBurn;
pub use native::Native;
pub use wrapped_yield::WrappedYield;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, CosmosMsg, Deps, Env, QuerierWrapper, StdResult, Uint128};

use common::asset::AssetInfo;

use crate::error::ContractError;

pub trait Custody {
    fn name(&self) -> &'static str;

    /// Asset the bridge moves into the vault before calling `Deposit`.
    fn asset(&self) -> AssetInfo;

    /// Amount of the asset currently held by the vault itself.
    fn held(&self, querier: &QuerierWrapper, vault: &Addr) -> StdResult<Uint128> {
        self.asset().query_balance(querier, vault)
    }

    /// Messages taking `amount`, already in the vault, into custody.
    fn deposit(&self, env: &Env, amount: Uint128) -> StdResult<Vec<CosmosMsg>>;

    /// Messages releasing `amount` to `receiver`.
    fn withdraw(
        &self,
        deps: Deps,
        env: &Env,
        receiver: &Addr,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError>;

    /// Yield token behind this vault, if any.
    fn yield_token(&self) -> Option<&Addr> {
        None
    }

    fn validate(&self, api: &dyn Api) -> StdResult<()>;
}

#[cw_serde]
pub enum Strategy {
    MintBurn(MintBurn),
    LockUnlock(LockUnlock),
    ExternalLending(ExternalLending),
    WrappedYield(WrappedYield),
    Native(Native),
}

impl Strategy {
    pub fn custody(&self) -> &dyn Custody {
        match self {
            Strategy::MintBurn(s) => s,
            Strategy::LockUnlock(s) => s,
            Strategy::ExternalLending(s) => s,
            Strategy::WrappedYield(s) => s,
            Strategy::Native(s) => s,
        }
    }
}

/// Checks that `addr` is a valid, normalized address for this chain.
pub(crate) fn validate_addr(api: &dyn Api, addr: &Addr) -> StdResult<()> {
    api.addr_validate(addr.as_str()).map(|_| ())
}

/// Releases from the vault's own balance, failing when it holds too little.
pub(crate) fn ensure_held(
    custody: &dyn Custody,
    deps: Deps,
    env: &Env,
    amount: Uint128,
) -> Result<(), ContractError> {
    let held = custody.held(&deps.querier, &env.contract.address)?;
    if held < amount {
        return Err(ContractError::InsufficientAmount {
            held,
            required: amount,
        });
    }
    Ok(())
}
