//! # Trusted Checkpoints
//!
//! Light-client sync anchors: a section index plus the section head, CHT
//! root and bloom-trie root, bound together by a Keccak-256 commitment.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, PrefixedHex, ZERO_HASH};

/// Length of the serialized commitment preimage: index + three hashes.
pub const CHECKPOINT_PREIMAGE_LEN: usize = 8 + 3 * 32;

/// Post-processed trie roots for one section of the header chain.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedCheckpoint {
    /// Section number.
    pub section_index: u64,
    /// Hash of the last header in the section.
    #[serde_as(as = "PrefixedHex")]
    pub section_head: Hash,
    /// Canonical hash trie root.
    #[serde_as(as = "PrefixedHex")]
    pub cht_root: Hash,
    /// Bloom trie root.
    #[serde_as(as = "PrefixedHex")]
    pub bloom_root: Hash,
}

impl TrustedCheckpoint {
    /// Commitment over `index (u64 BE) ‖ section_head ‖ cht_root ‖ bloom_root`.
    pub fn hash(&self) -> Hash {
        let mut buf = [0u8; CHECKPOINT_PREIMAGE_LEN];
        buf[..8].copy_from_slice(&self.section_index.to_be_bytes());
        buf[8..40].copy_from_slice(&self.section_head);
        buf[40..72].copy_from_slice(&self.cht_root);
        buf[72..].copy_from_slice(&self.bloom_root);

        let mut hasher = Keccak256::new();
        hasher.update(buf);
        hasher.finalize().into()
    }

    /// A checkpoint missing any of its three roots is empty.
    pub fn is_empty(&self) -> bool {
        self.section_head == ZERO_HASH || self.cht_root == ZERO_HASH || self.bloom_root == ZERO_HASH
    }

    /// Compare against a digest. Empty checkpoints only equal the zero digest.
    pub fn hash_equal(&self, digest: &Hash) -> bool {
        if self.is_empty() {
            return *digest == ZERO_HASH;
        }
        self.hash() == *digest
    }
}

/// Checkpoint oracle contract configuration. Carried, not processed.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointOracleConfig {
    /// Oracle contract address.
    #[serde_as(as = "PrefixedHex")]
    pub address: Address,
    /// Authorised signers.
    #[serde_as(as = "Vec<PrefixedHex>")]
    pub signers: Vec<Address>,
    /// Signatures required to accept a checkpoint.
    pub threshold: u64,
}
