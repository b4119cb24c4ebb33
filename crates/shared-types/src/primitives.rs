//! # Fixed-Width Primitives
//!
//! Hash and address types shared by every crate in the workspace, plus
//! hex parsing for both compile-time literals and runtime input.

use crate::errors::HexError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte hash (Keccak-256 digests, trie roots, genesis hashes).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The all-zero hash.
pub const ZERO_HASH: Hash = [0u8; 32];

/// The all-zero address.
pub const ZERO_ADDRESS: Address = [0u8; 20];

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in literal"),
    }
}

/// Decode a hex literal (optionally `0x`-prefixed) into a fixed-width array.
///
/// Intended for `const` items, where a malformed literal fails the build.
pub const fn fixed_from_hex<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    let offset = if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    };
    assert!(bytes.len() - offset == N * 2, "hex literal has wrong length");

    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = (hex_nibble(bytes[offset + 2 * i]) << 4) | hex_nibble(bytes[offset + 2 * i + 1]);
        i += 1;
    }
    out
}

/// Compile-time address literal.
pub const fn address_from_hex(s: &str) -> Address {
    fixed_from_hex::<20>(s)
}

/// Compile-time hash literal.
pub const fn hash_from_hex(s: &str) -> Hash {
    fixed_from_hex::<32>(s)
}

/// Parse runtime hex input (optionally `0x`-prefixed) into a fixed-width array.
pub fn parse_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() != N * 2 {
        return Err(HexError::InvalidLength {
            expected: N,
            got: digits.len() / 2,
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)?;
    Ok(out)
}

/// Format bytes as a `0x`-prefixed lowercase hex string.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
