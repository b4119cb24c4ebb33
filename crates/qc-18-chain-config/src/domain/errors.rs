//! # Domain Errors
//!
//! One error type per component: fork ordering, engine parameters,
//! compatibility, plus config loading and the service umbrella.

use std::fmt;
use thiserror::Error;

use super::fork::Fork;
use super::threshold::{BlockNumber, ForkThreshold};

// =============================================================================
// FORK ORDERING
// =============================================================================

/// A schedule whose forks are not in canonical order.
///
/// Fatal at configuration load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleOrderError {
    /// A fork is enabled while an earlier one is not.
    #[error("unsupported fork ordering: {previous} not enabled, but {current} enabled at {current_block}")]
    SkippedFork {
        /// The earlier, unscheduled fork.
        previous: Fork,
        /// The later, scheduled fork.
        current: Fork,
        /// Height of the later fork.
        current_block: BlockNumber,
    },

    /// A later fork activates before an earlier one.
    #[error("unsupported fork ordering: {previous} enabled at {previous_block}, but {current} enabled at {current_block}")]
    Misordered {
        /// The earlier fork.
        previous: Fork,
        /// Height of the earlier fork.
        previous_block: BlockNumber,
        /// The later fork.
        current: Fork,
        /// Height of the later fork.
        current_block: BlockNumber,
    },
}

// =============================================================================
// ENGINE PARAMETERS
// =============================================================================

/// Invalid proof-of-stake-authority bootstrap parameters.
///
/// Fatal at configuration load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineParameterError {
    /// Block interval of zero seconds.
    #[error("POSAConfig.Period should not be 0")]
    ZeroPeriod,

    /// Vote/checkpoint reset window shorter than two blocks.
    #[error("POSAConfig.Epoch should not be less than 2 (got {epoch})")]
    EpochTooShort {
        /// Configured epoch length.
        epoch: u64,
    },

    /// Ishikari is scheduled but no initial managers are listed.
    #[error("length of POSAConfig.IshikariInitialManagers must not be less than 1")]
    NoInitialManagers,

    /// Managers and validators do not pair up by position.
    #[error("numbers of initial validators & initial managers do not match ({managers}!={validators})")]
    ValidatorManagerMismatch {
        /// Number of initial managers.
        managers: usize,
        /// Number of initial validators.
        validators: usize,
    },

    /// Ishikari does not land on the last block of an epoch.
    #[error("IshikariBlock should be the last block of some epoch (block {block}, epoch {epoch})")]
    IshikariNotEpochAligned {
        /// Ishikari activation height.
        block: BlockNumber,
        /// Configured epoch length.
        epoch: u64,
    },
}

// =============================================================================
// COMPATIBILITY
// =============================================================================

/// What two schedules disagree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conflict {
    /// Activation height of a fork.
    Fork(Fork),
    /// DAO fork support flag.
    DaoForkSupport,
    /// Chain identifier once EIP-158 is active.
    ChainId,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Fork(fork) => f.write_str(fork.label()),
            Conflict::DaoForkSupport => f.write_str("DAO fork support flag"),
            Conflict::ChainId => f.write_str("EIP158 chain ID"),
        }
    }
}

/// A candidate schedule would rewrite already-processed history.
///
/// Recoverable: the caller either rejects the candidate or rewinds the
/// chain to `rewind_to` and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mismatching {what} in database (have {stored}, want {new}, rewindto {rewind_to})")]
pub struct CompatibilityError {
    /// The conflicting feature.
    pub what: Conflict,
    /// Threshold under the stored schedule.
    pub stored: ForkThreshold,
    /// Threshold under the candidate schedule.
    pub new: ForkThreshold,
    /// Height the local chain must be rewound to.
    pub rewind_to: BlockNumber,
}

impl CompatibilityError {
    /// Build the error and derive the rewind height.
    ///
    /// Rewinds to the block before the earlier of the two thresholds (an unset
    /// side defers to the other), floored at genesis.
    pub fn new(what: Conflict, stored: ForkThreshold, new: ForkThreshold) -> Self {
        let rewind_from = match (stored, new) {
            (ForkThreshold::Unscheduled, _) => new,
            (_, ForkThreshold::Unscheduled) => stored,
            (ForkThreshold::At(s), ForkThreshold::At(n)) if s < n => stored,
            _ => new,
        };
        let rewind_to = match rewind_from {
            ForkThreshold::At(block) if block > 0 => block - 1,
            _ => 0,
        };
        Self {
            what,
            stored,
            new,
            rewind_to,
        }
    }
}

// =============================================================================
// LOADING & SERVICE
// =============================================================================

/// Errors decoding a serialized chain config.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Malformed JSON or field values.
    #[error("Invalid chain config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Could not read the config file.
    #[error("Failed to read chain config: {0}")]
    Io(#[from] std::io::Error),

    /// Zero or several consensus engines configured.
    #[error("Exactly one consensus engine must be configured, found {found}")]
    Engine {
        /// Number of engine sections present.
        found: usize,
    },

    /// Chain id is not a valid unsigned 256-bit integer.
    #[error("Invalid chain id: {0}")]
    ChainId(String),
}

/// Errors from the schedule persistence port.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No schedule has been persisted yet.
    #[error("No chain config stored")]
    NotFound,

    /// Backend failure.
    #[error("Schedule store error: {0}")]
    Backend(String),
}

/// Errors surfaced by the chain config service.
#[derive(Debug, Error)]
pub enum ChainConfigError {
    /// Fork ordering violation.
    #[error(transparent)]
    Order(#[from] ScheduleOrderError),

    /// Engine parameter violation.
    #[error(transparent)]
    Engine(#[from] EngineParameterError),

    /// Candidate schedule rewrites history.
    #[error(transparent)]
    Incompatible(#[from] CompatibilityError),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Chain rewind failed.
    #[error("Rewind to block {height} failed: {reason}")]
    RewindFailed {
        /// Requested rewind height.
        height: BlockNumber,
        /// Backend reason.
        reason: String,
    },

    /// The service has no active schedule yet.
    #[error("Chain config not initialised: load genesis first")]
    NotInitialised,
}
