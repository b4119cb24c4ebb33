//! # Domain Module
//!
//! Core types for the fork schedule: thresholds, the fork catalogue, engine
//! parameters, rules snapshots, checkpoints and errors.

pub mod checkpoint;
pub mod engine;
pub mod errors;
pub mod fork;
pub mod presets;
pub mod rules;
pub mod schedule;
pub mod threshold;

pub use checkpoint::*;
pub use engine::*;
pub use errors::*;
pub use fork::*;
pub use rules::*;
pub use schedule::*;
pub use threshold::*;
