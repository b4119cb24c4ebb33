//! # Adapters Module
//!
//! JSON encoding of the fork schedule and the checkpoint registry.

pub mod json;
pub mod registry;

pub use json::{parse_chain_id, ChainConfigJson};
pub use registry::{CheckpointRegistry, CheckpointRegistryBuilder, NetworkCheckpoints};
