//! # Fork Thresholds
//!
//! The activation height of a single fork, and the predicate every other
//! component is built from.

use serde::{Deserialize, Serialize};
use shared_types::U256;
use std::fmt;

/// Block height.
pub type BlockNumber = u64;

/// Replay-protection chain identifier.
///
/// Kept distinct from [`BlockNumber`]: chain ids are 256-bit, the widest value
/// the EVM chain-id opcode exposes.
pub type ChainId = U256;

/// When a fork activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<BlockNumber>", into = "Option<BlockNumber>")]
pub enum ForkThreshold {
    /// The fork is not scheduled and never activates.
    #[default]
    Unscheduled,
    /// The fork activates permanently at this height.
    At(BlockNumber),
}

impl ForkThreshold {
    /// Activation height, if scheduled.
    pub fn block(&self) -> Option<BlockNumber> {
        match self {
            ForkThreshold::Unscheduled => None,
            ForkThreshold::At(block) => Some(*block),
        }
    }

    /// Is this fork scheduled at all?
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ForkThreshold::At(_))
    }

    /// Is this fork unscheduled? Used as a serde skip predicate.
    pub fn is_unscheduled(&self) -> bool {
        !self.is_scheduled()
    }

    /// Is the fork active at `height`?
    pub fn is_active_at(&self, height: BlockNumber) -> bool {
        is_forked(*self, Some(height))
    }

    /// Does the fork activate exactly at `height`?
    pub fn activates_at(&self, height: BlockNumber) -> bool {
        matches!(self, ForkThreshold::At(block) if *block == height)
    }
}

impl From<Option<BlockNumber>> for ForkThreshold {
    fn from(block: Option<BlockNumber>) -> Self {
        match block {
            Some(block) => ForkThreshold::At(block),
            None => ForkThreshold::Unscheduled,
        }
    }
}

impl From<ForkThreshold> for Option<BlockNumber> {
    fn from(threshold: ForkThreshold) -> Self {
        threshold.block()
    }
}

impl From<BlockNumber> for ForkThreshold {
    fn from(block: BlockNumber) -> Self {
        ForkThreshold::At(block)
    }
}

impl fmt::Display for ForkThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkThreshold::Unscheduled => write!(f, "nil"),
            ForkThreshold::At(block) => write!(f, "{}", block),
        }
    }
}

/// Is a fork scheduled at `threshold` active at `height`?
///
/// False when either side is unset; otherwise `height >= threshold`.
pub fn is_forked(threshold: ForkThreshold, height: Option<BlockNumber>) -> bool {
    match (threshold, height) {
        (ForkThreshold::At(block), Some(height)) => block <= height,
        _ => false,
    }
}

/// Configuration equality: two unset thresholds are equal, unset vs set is not.
pub fn configured_equal(a: ForkThreshold, b: ForkThreshold) -> bool {
    a == b
}
