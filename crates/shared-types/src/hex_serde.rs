//! # Hex Serialization
//!
//! `serde_with` adapter that encodes fixed-width byte arrays as
//! `0x`-prefixed hex strings, the form used by genesis files and RPC.
//!
//! ```rust,ignore
//! #[serde_as]
//! #[derive(Serialize, Deserialize)]
//! struct Oracle {
//!     #[serde_as(as = "PrefixedHex")]
//!     address: Address,
//!     #[serde_as(as = "Vec<PrefixedHex>")]
//!     signers: Vec<Address>,
//! }
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::primitives::{parse_fixed_hex, to_prefixed_hex};

/// Marker type for `#[serde_as(as = "PrefixedHex")]`.
pub struct PrefixedHex;

impl<const N: usize> SerializeAs<[u8; N]> for PrefixedHex {
    fn serialize_as<S>(source: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_prefixed_hex(source))
    }
}

impl<'de, const N: usize> DeserializeAs<'de, [u8; N]> for PrefixedHex {
    fn deserialize_as<D>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_fixed_hex::<N>(&s).map_err(D::Error::custom)
    }
}
