//! Opaque external lending protocol holding vault funds.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

#[cw_serde]
pub enum CustodianExecuteMsg {
    /// CW20 entry point; the hook must be `CustodianHookMsg::Supply`.
    Receive(Cw20ReceiveMsg),
    /// Supply the attached native coins.
    SupplyNative {},
    /// Return `amount` of the caller's supplied asset to the caller.
    Redeem { amount: Uint128 },
}

#[cw_serde]
pub enum CustodianHookMsg {
    Supply {},
}
