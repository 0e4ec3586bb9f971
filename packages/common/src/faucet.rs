//! Gas-subsidy pool interface.

use cosmwasm_schema::cw_serde;

#[cw_serde]
pub enum FaucetExecuteMsg {
    /// Pay the configured subsidy to `receiver`. Callable by registered pools only.
    TransferTo { receiver: String },
}
