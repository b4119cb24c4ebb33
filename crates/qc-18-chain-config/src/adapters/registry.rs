//! # Checkpoint Registry
//!
//! Trusted checkpoints and checkpoint-oracle settings, keyed by genesis hash.
//!
//! The registry is an ordinary value: build it at startup, then hand it out
//! by reference. Mutation takes `&mut self`; wrap it in a lock if it must be
//! shared and updated at runtime.

use std::collections::HashMap;

use shared_types::{to_prefixed_hex, Hash};

use crate::domain::presets::{MAINNET_GENESIS_HASH, TESTNET_GENESIS_HASH};
use crate::domain::{CheckpointOracleConfig, TrustedCheckpoint};

/// Everything known about one network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkCheckpoints {
    /// Latest trusted checkpoint, if any.
    pub checkpoint: Option<TrustedCheckpoint>,
    /// Checkpoint oracle contract, if any.
    pub oracle: Option<CheckpointOracleConfig>,
}

/// Genesis hash → checkpoint data.
#[derive(Debug, Clone, Default)]
pub struct CheckpointRegistry {
    networks: HashMap<Hash, NetworkCheckpoints>,
}

impl CheckpointRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a registry.
    pub fn builder() -> CheckpointRegistryBuilder {
        CheckpointRegistryBuilder::default()
    }

    /// Registry with entries for mainnet and testnet.
    ///
    /// Neither network ships a checkpoint or oracle yet, so both entries are
    /// blank; they mark the genesis hashes as recognised.
    pub fn with_known_networks() -> Self {
        Self::builder()
            .network(MAINNET_GENESIS_HASH)
            .network(TESTNET_GENESIS_HASH)
            .build()
    }

    /// Is this genesis hash registered?
    pub fn is_known(&self, genesis: &Hash) -> bool {
        self.networks.contains_key(genesis)
    }

    /// Number of registered networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// No networks registered?
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Trusted checkpoint for the network with this genesis.
    pub fn trusted_checkpoint(&self, genesis: &Hash) -> Option<&TrustedCheckpoint> {
        self.networks.get(genesis)?.checkpoint.as_ref()
    }

    /// Checkpoint oracle for the network with this genesis.
    pub fn oracle(&self, genesis: &Hash) -> Option<&CheckpointOracleConfig> {
        self.networks.get(genesis)?.oracle.as_ref()
    }

    /// Does `digest` match the registered checkpoint for this genesis?
    ///
    /// Unknown networks and networks without a checkpoint never match.
    pub fn verify_checkpoint(&self, genesis: &Hash, digest: &Hash) -> bool {
        match self.trusted_checkpoint(genesis) {
            Some(checkpoint) => checkpoint.hash_equal(digest),
            None => {
                tracing::debug!(
                    "[qc-18] No trusted checkpoint for genesis {}",
                    to_prefixed_hex(genesis)
                );
                false
            }
        }
    }

    /// Set or replace a network's checkpoint.
    pub fn insert_checkpoint(&mut self, genesis: Hash, checkpoint: TrustedCheckpoint) {
        self.networks.entry(genesis).or_default().checkpoint = Some(checkpoint);
    }

    /// Set or replace a network's oracle.
    pub fn insert_oracle(&mut self, genesis: Hash, oracle: CheckpointOracleConfig) {
        self.networks.entry(genesis).or_default().oracle = Some(oracle);
    }

    /// Forget a network entirely.
    pub fn remove(&mut self, genesis: &Hash) -> Option<NetworkCheckpoints> {
        self.networks.remove(genesis)
    }
}

/// Builder for [`CheckpointRegistry`].
#[derive(Debug, Default)]
pub struct CheckpointRegistryBuilder {
    registry: CheckpointRegistry,
}

impl CheckpointRegistryBuilder {
    /// Register a genesis hash with no data.
    pub fn network(mut self, genesis: Hash) -> Self {
        self.registry.networks.entry(genesis).or_default();
        self
    }

    /// Register a trusted checkpoint.
    pub fn checkpoint(mut self, genesis: Hash, checkpoint: TrustedCheckpoint) -> Self {
        self.registry.insert_checkpoint(genesis, checkpoint);
        self
    }

    /// Register a checkpoint oracle.
    pub fn oracle(mut self, genesis: Hash, oracle: CheckpointOracleConfig) -> Self {
        self.registry.insert_oracle(genesis, oracle);
        self
    }

    /// Finish.
    pub fn build(self) -> CheckpointRegistry {
        self.registry
    }
}
