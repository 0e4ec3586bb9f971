//! Messaging layer between chains.
//!
//! The courier carries opaque payloads to a remote endpoint for a native
//! fee and calls back `ReceiveMessage` on the destination bridge.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

#[cw_serde]
pub enum CourierExecuteMsg {
    Dispatch {
        dst_chain_id: u64,
        endpoint: String,
        payload: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum CourierQueryMsg {
    /// Fee in the bridge's native denom for one dispatch.
    #[returns(QuoteFeeResponse)]
    QuoteFee { dst_chain_id: u64 },
}

#[cw_serde]
pub struct QuoteFeeResponse {
    pub fee: Uint128,
}

/// Callback the courier delivers to the destination bridge.
#[cw_serde]
pub enum CourierCallbackMsg {
    ReceiveMessage { payload: Binary },
}
