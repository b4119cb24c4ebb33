//! # Chain Config Service Configuration
//!
//! How the service reacts when a new schedule conflicts with the chain.

use serde::{Deserialize, Serialize};

/// What to do when an imported schedule would rewrite processed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityPolicy {
    /// Refuse the candidate and keep the stored schedule.
    Reject,
    /// Rewind the chain below the conflict, then accept the candidate.
    Rewind,
}

/// Chain config service configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfigServiceConfig {
    /// Reaction to an incompatible schedule.
    pub compatibility_policy: CompatibilityPolicy,

    /// Run consensus engine parameter checks on every accepted schedule.
    pub validate_engine: bool,
}

impl Default for ChainConfigServiceConfig {
    fn default() -> Self {
        Self {
            compatibility_policy: CompatibilityPolicy::Reject,
            validate_engine: true,
        }
    }
}

impl ChainConfigServiceConfig {
    /// Create a config for testing (rewinds instead of refusing).
    pub fn for_testing() -> Self {
        Self {
            compatibility_policy: CompatibilityPolicy::Rewind,
            validate_engine: true,
        }
    }
}
