//! # QC Chain Config
//!
//! Hard-fork schedule and consensus-engine configuration for an
//! EVM-compatible chain.
//!
//! **Subsystem ID:** 18  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Answer two questions for the rest of the node:
//! - which protocol rules are active at a given block height, and
//! - whether a newly supplied schedule can replace the stored one without
//!   rewriting history already processed.
//!
//! ## Checks
//!
//! | Check | When | Failure |
//! |-------|------|---------|
//! | Fork ordering | Genesis load, every import | Fatal, schedule refused |
//! | PoSA parameters | Genesis load, every import | Fatal, schedule refused |
//! | Compatibility | Every import | Reject, or rewind and accept |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-chain-config/
//! ├── domain/          # Thresholds, forks, schedule, engines, rules, checkpoints, presets
//! ├── algorithms/      # Fork ordering, compatibility fixpoint
//! ├── ports/           # API trait (inbound) + store/rewinder traits (outbound)
//! ├── adapters/        # JSON encoding, checkpoint registry
//! ├── application/     # ChainConfigService
//! └── config.rs        # ChainConfigServiceConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{parse_chain_id, CheckpointRegistry, CheckpointRegistryBuilder};
pub use algorithms::{check_compatible, check_fork_order};
pub use application::ChainConfigService;
pub use config::{ChainConfigServiceConfig, CompatibilityPolicy};
pub use domain::{
    presets, BlockNumber, ChainConfigError, ChainId, CheckpointOracleConfig, CliqueConfig,
    CompatibilityError, ConfigLoadError, Conflict, ConsensusEngineConfig, EngineParameterError,
    EthashConfig, Fork, ForkSchedule, ForkThreshold, PosaConfig, Rules, ScheduleOrderError,
    StoreError, TrustedCheckpoint,
};
pub use ports::{
    ChainConfigApi, ChainRewinder, ImportOutcome, InMemoryScheduleStore, RecordingRewinder,
    ScheduleStore,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
