//! Ethereum address derivation from DKG public-key coordinates.
//!
//! A threshold-ECDSA key generation run yields the group public key as a
//! secp256k1 point. The address rule is the standard EVM one:
//!
//! | Input                   | Method                                    |
//! |-------------------------|-------------------------------------------|
//! | (x, y) hex coordinates  | keccak256(0x04 ‖ x ‖ y, tail 64)[12..32]  |
//!
//! Keccak-256 here is the original (pre-NIST) padding variant. The
//! standardized SHA3-256 pads differently and produces a different digest
//! for the same key material, so the two are not interchangeable.

use sha3::{Digest, Keccak256};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    /// Coordinate is not exactly 64 hex characters after prefix stripping.
    #[error("coordinate must be 64 hex characters, got {len}")]
    InvalidCoordinateLength { len: usize },

    #[error("coordinate contains non-hex characters")]
    InvalidHexEncoding,

    /// Raw key bytes did not carry the SEC1 uncompressed tag.
    #[error("uncompressed key must start with 0x04")]
    InvalidKeyPrefix,
}

// ============================================================================
// ADDRESS TYPE
// ============================================================================

/// Ethereum address with multiple display formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthereumAddress {
    /// 20 raw bytes.
    pub bytes: [u8; 20],
    /// "0x" + 40 lowercase hex — the canonical form.
    pub hex_lower: String,
    /// EIP-55 checksummed.
    pub eip55: String,
}

// ============================================================================
// DERIVATION
// ============================================================================

/// Derive the Ethereum address for a public key given as hex coordinates.
///
/// Each coordinate may carry one optional `0x` prefix and must strip to
/// exactly 64 hex characters (32 bytes). Uppercase hex is accepted.
/// Nothing else is repaired: a coordinate with embedded whitespace or a
/// wrong length is rejected, never padded or truncated.
pub fn derive_address(x_hex: &str, y_hex: &str) -> Result<EthereumAddress, DeriveError> {
    let x = decode_coordinate(x_hex)?;
    let y = decode_coordinate(y_hex)?;

    // SEC1 uncompressed: 0x04 || x(32) || y(32)
    let mut key = [0u8; 65];
    key[0] = 0x04;
    key[1..33].copy_from_slice(&x);
    key[33..].copy_from_slice(&y);

    Ok(address_from_key(&key))
}

/// Derive the Ethereum address from a raw 65-byte SEC1 uncompressed key.
pub fn address_from_uncompressed(key: &[u8; 65]) -> Result<EthereumAddress, DeriveError> {
    if key[0] != 0x04 {
        return Err(DeriveError::InvalidKeyPrefix);
    }
    Ok(address_from_key(key))
}

fn address_from_key(key: &[u8; 65]) -> EthereumAddress {
    let hash = keccak256(&key[1..]); // drop 0x04
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..]); // last 20 bytes

    let hex_lower = format!("0x{}", hex::encode(addr));
    let eip55 = to_eip55(&hex_lower);

    EthereumAddress {
        bytes: addr,
        hex_lower,
        eip55,
    }
}

/// Decode one coordinate: strip one optional `0x`, enforce 64 hex chars.
fn decode_coordinate(coord: &str) -> Result<[u8; 32], DeriveError> {
    let stripped = coord
        .strip_prefix("0x")
        .or_else(|| coord.strip_prefix("0X"))
        .unwrap_or(coord);

    if stripped.len() != 64 {
        return Err(DeriveError::InvalidCoordinateLength {
            len: stripped.len(),
        });
    }

    let bytes = hex::decode(stripped).map_err(|_| DeriveError::InvalidHexEncoding)?;

    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    let mut b = [0u8; 32];
    b.copy_from_slice(&out);
    b
}

/// Convert a hex address to EIP-55 checksummed format.
///
/// Input: "0x" + 40 hex (any case). Output: EIP-55 checksummed.
pub fn to_eip55(addr_hex: &str) -> String {
    let s = addr_hex.strip_prefix("0x").unwrap_or(addr_hex);
    let lower = s.to_ascii_lowercase();

    let mut hasher = Keccak256::new();
    hasher.update(lower.as_bytes());
    let digest = hasher.finalize();

    // Uppercase each a-f char whose corresponding digest nibble is >= 8.
    let mut out = String::with_capacity(42);
    out.push_str("0x");

    for (i, ch) in lower.chars().enumerate() {
        let byte = digest[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
