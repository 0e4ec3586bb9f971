//! Transfer payload wire format.
//!
//! A payload is the ABI encoding of a fixed tuple of eight 32-byte words,
//! identical on every chain of the network:
//!
//! ```solidity
//! abi.encode(
//!     uint256 uid,
//!     uint256 srcTokenIndex,
//!     uint256 dstTokenIndex,
//!     uint256 amount,
//!     uint64  srcChainId,
//!     uint64  dstChainId,
//!     address from,
//!     address receiver
//! )
//! ```
//!
//! # Byte Layout (256 bytes total)
//! - Bytes 0-31:    uid (big-endian, left-padded)
//! - Bytes 32-63:   srcTokenIndex
//! - Bytes 64-95:   dstTokenIndex
//! - Bytes 96-127:  amount
//! - Bytes 128-159: srcChainId
//! - Bytes 160-191: dstChainId
//! - Bytes 192-223: from (20 bytes, 12 zero bytes of left padding)
//! - Bytes 224-255: receiver (same as `from`)

use cosmwasm_std::Uint128;
use tiny_keccak::{Hasher, Keccak};

use crate::address_codec::ADDRESS_LEN;
use crate::error::ContractError;

const WORD: usize = 32;

/// Encoded payload size
pub const PAYLOAD_LEN: usize = 8 * WORD;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert a 32-byte hash to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferPayload {
    pub uid: u64,
    pub src_token_index: u32,
    pub dst_token_index: u32,
    pub amount: Uint128,
    pub src_chain_id: u64,
    pub dst_chain_id: u64,
    pub from: [u8; ADDRESS_LEN],
    pub receiver: [u8; ADDRESS_LEN],
}

impl TransferPayload {
    pub fn encode(&self) -> Vec<u8> {
        let mut data = vec![0u8; PAYLOAD_LEN];

        put_word(&mut data, 0, &self.uid.to_be_bytes());
        put_word(&mut data, 1, &self.src_token_index.to_be_bytes());
        put_word(&mut data, 2, &self.dst_token_index.to_be_bytes());
        put_word(&mut data, 3, &self.amount.u128().to_be_bytes());
        put_word(&mut data, 4, &self.src_chain_id.to_be_bytes());
        put_word(&mut data, 5, &self.dst_chain_id.to_be_bytes());
        put_word(&mut data, 6, &self.from);
        put_word(&mut data, 7, &self.receiver);

        data
    }

    /// Decode a payload, rejecting anything that is not the canonical
    /// encoding of values fitting the local types.
    pub fn decode(data: &[u8]) -> Result<Self, ContractError> {
        if data.len() != PAYLOAD_LEN {
            return Err(ContractError::InvalidPayload {
                reason: format!("expected {} bytes, got {}", PAYLOAD_LEN, data.len()),
            });
        }

        Ok(TransferPayload {
            uid: u64::from_be_bytes(take_word(data, 0, "uid")?),
            src_token_index: u32::from_be_bytes(take_word(data, 1, "src_token_index")?),
            dst_token_index: u32::from_be_bytes(take_word(data, 2, "dst_token_index")?),
            amount: Uint128::new(u128::from_be_bytes(take_word(data, 3, "amount")?)),
            src_chain_id: u64::from_be_bytes(take_word(data, 4, "src_chain_id")?),
            dst_chain_id: u64::from_be_bytes(take_word(data, 5, "dst_chain_id")?),
            from: take_word(data, 6, "from")?,
            receiver: take_word(data, 7, "receiver")?,
        })
    }

    pub fn hash(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }
}

/// Write `value` right-aligned into word `index`.
fn put_word(data: &mut [u8], index: usize, value: &[u8]) {
    let end = (index + 1) * WORD;
    data[end - value.len()..end].copy_from_slice(value);
}

/// Read the low `N` bytes of word `index`; the high bytes must be zero.
fn take_word<const N: usize>(
    data: &[u8],
    index: usize,
    field: &str,
) -> Result<[u8; N], ContractError> {
    let word = &data[index * WORD..(index + 1) * WORD];
    let (high, low) = word.split_at(WORD - N);
    if high.iter().any(|b| *b != 0) {
        return Err(ContractError::InvalidPayload {
            reason: format!("{} does not fit in {} bytes", field, N),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(low);
    Ok(out)
}
