//! # Shared Types Crate
//!
//! Fixed-width primitives used across the workspace: hashes, addresses,
//! `U256`, and the hex encodings genesis files rely on.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate primitive types are defined here.
//! - **Plain Arrays**: `Hash` and `Address` are byte arrays, so equality and
//!   hashing are structural and zero values are trivially comparable.

pub mod errors;
pub mod hex_serde;
pub mod primitives;

pub use errors::*;
pub use hex_serde::PrefixedHex;
pub use primitives::*;
