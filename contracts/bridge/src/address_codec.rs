//! Address encoding between local bech32 accounts and 20-byte payload words.
//!
//! Transfer payloads carry addresses as 20 raw bytes left-padded to a
//! 32-byte word. Receivers may be given as:
//! - `0x` + 40 hex chars (EVM address)
//! - `0x` + 64 hex chars (a full payload word; upper 12 bytes must be zero)
//! - bech32 with any human-readable prefix and a 20-byte data part
//!
//! Bech32 strings are checksum-verified on decode.

use cosmwasm_std::{Addr, StdError, StdResult};

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Length of the raw address carried in a payload word
pub const ADDRESS_LEN: usize = 20;

// ============================================================================
// Receivers and local accounts
// ============================================================================

/// Parse a receiver string into the 20 bytes carried by the payload.
pub fn parse_receiver(receiver: &str) -> StdResult<[u8; ADDRESS_LEN]> {
    if let Some(hex_str) = receiver.strip_prefix("0x") {
        return match hex_str.len() {
            40 => parse_evm_address(receiver),
            64 => {
                let word = hex::decode(hex_str)
                    .map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;
                if word[..32 - ADDRESS_LEN].iter().any(|b| *b != 0) {
                    return Err(StdError::generic_err(
                        "Address word has non-zero upper bytes",
                    ));
                }
                let mut result = [0u8; ADDRESS_LEN];
                result.copy_from_slice(&word[32 - ADDRESS_LEN..]);
                Ok(result)
            }
            len => Err(StdError::generic_err(format!(
                "Invalid hex address length: expected 40 or 64 hex chars, got {}",
                len
            ))),
        };
    }

    let (_, data) = decode_bech32(receiver)?;
    to_address_bytes(&data)
}

/// Raw bytes of a local account address.
pub fn local_address_bytes(addr: &Addr) -> StdResult<[u8; ADDRESS_LEN]> {
    let (_, data) = decode_bech32(addr.as_str())?;
    to_address_bytes(&data)
}

/// Render raw payload bytes as a local bech32 account.
pub fn local_address(bytes: &[u8; ADDRESS_LEN], hrp: &str) -> StdResult<String> {
    encode_bech32(hrp, bytes)
}

fn to_address_bytes(data: &[u8]) -> StdResult<[u8; ADDRESS_LEN]> {
    if data.len() != ADDRESS_LEN {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected {} bytes, got {}",
            ADDRESS_LEN,
            data.len()
        )));
    }
    let mut result = [0u8; ADDRESS_LEN];
    result.copy_from_slice(data);
    Ok(result)
}

// ============================================================================
// EVM hex
// ============================================================================

/// Parse a 0x-prefixed hex EVM address to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; ADDRESS_LEN]> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; ADDRESS_LEN];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; ADDRESS_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================================================
// Bech32
// ============================================================================

/// Decode a bech32 string into its prefix and 8-bit data, verifying the checksum.
pub fn decode_bech32(addr: &str) -> StdResult<(String, Vec<u8>)> {
    let has_lower = addr.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = addr.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(StdError::generic_err("Mixed-case bech32 string"));
    }
    let addr = addr.to_ascii_lowercase();

    let (hrp, data_part) = addr
        .rsplit_once('1')
        .ok_or_else(|| StdError::generic_err("Invalid bech32 format"))?;
    if hrp.is_empty() {
        return Err(StdError::generic_err("Empty bech32 prefix"));
    }
    // The data part includes at least the 6 character checksum
    if data_part.len() < 7 {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let values = decode_bech32_data(data_part)?;

    let mut check = expand_hrp(hrp);
    check.extend_from_slice(&values);
    if bech32_polymod(&check) != 1 {
        return Err(StdError::generic_err("Invalid bech32 checksum"));
    }

    let data = convert_bits(&values[..values.len() - 6], 5, 8, false)?;
    Ok((hrp.to_string(), data))
}

/// Encode raw bytes to a bech32 string with given prefix
pub fn encode_bech32(hrp: &str, bytes: &[u8]) -> StdResult<String> {
    // Convert 8-bit bytes to 5-bit groups
    let data5 = convert_bits(bytes, 8, 5, true)?;

    let data_str = encode_bech32_data(&data5);
    let checksum = compute_bech32_checksum(hrp, &data5);
    let checksum_str = encode_bech32_data(&checksum);

    Ok(format!("{}1{}{}", hrp, data_str, checksum_str))
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        let v = value as u32;
        acc = (acc << from_bits) | v;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad && bits > 0 {
        result.push(((acc << (to_bits - bits)) & max_v) as u8);
    } else if !pad && (bits >= from_bits || ((acc << (to_bits - bits)) & max_v) != 0) {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

/// Decode bech32 base32 data
fn decode_bech32_data(data: &str) -> StdResult<Vec<u8>> {
    data.chars()
        .map(|c| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x as char == c)
                .map(|idx| idx as u8)
                .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))
        })
        .collect()
}

/// Encode bytes to bech32 base32 string
fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let polymod = bech32_polymod(&values) ^ 1;

    (0..6)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

/// Expand HRP for checksum calculation
fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);

    for c in hrp.bytes() {
        result.push(c >> 5);
    }
    result.push(0);
    for c in hrp.bytes() {
        result.push(c & 31);
    }

    result
}

/// Bech32 polymod function
fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
