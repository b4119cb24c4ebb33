//! # Schedule Compatibility
//!
//! Decides whether a candidate schedule can replace the stored one once the
//! chain has been processed up to some head, and if not, how far the chain
//! must be rewound.
//!
//! A fork that has taken effect under either schedule by the head must have
//! the same threshold in both, because history was already processed under
//! one interpretation. The single pass reports the first conflict in protocol
//! order; the fixpoint search repeats it at each rewind height so that the
//! caller gets the lowest rewind point in one call.

use tracing::debug;

use crate::domain::{
    configured_equal, is_forked, BlockNumber, CompatibilityError, Conflict, Fork, ForkSchedule,
    ForkThreshold,
};

/// Forks compared by the single pass, in protocol order.
///
/// The CVE-2021-39137 fix never participates.
pub const COMPATIBILITY_ORDER: [Fork; 16] = [
    Fork::Homestead,
    Fork::DaoFork,
    Fork::Eip150,
    Fork::Eip155,
    Fork::Eip158,
    Fork::Byzantium,
    Fork::Constantinople,
    Fork::Petersburg,
    Fork::Istanbul,
    Fork::MuirGlacier,
    Fork::Berlin,
    Fork::YoloV3,
    Fork::Ewasm,
    Fork::Ishikari,
    Fork::IshikariPatch001,
    Fork::IshikariPatch002,
];

/// Can a fork scheduled at `stored` not be rescheduled to `new` because
/// `head` is already past it under either schedule?
pub fn is_fork_incompatible(stored: ForkThreshold, new: ForkThreshold, head: BlockNumber) -> bool {
    (is_forked(stored, Some(head)) || is_forked(new, Some(head))) && !configured_equal(stored, new)
}

/// Single pass at `head`: the first conflict in protocol order.
pub fn check_compatible_at(
    stored: &ForkSchedule,
    new: &ForkSchedule,
    head: BlockNumber,
) -> Result<(), CompatibilityError> {
    for fork in COMPATIBILITY_ORDER {
        let (s1, s2) = (stored.threshold(fork), new.threshold(fork));

        if is_fork_incompatible(s1, s2, head) {
            // Petersburg may be moved onto the stored Constantinople block:
            // an unset Petersburg already meant exactly that.
            let exempt = fork == Fork::Petersburg
                && !is_fork_incompatible(stored.constantinople_block, s2, head);
            if !exempt {
                return Err(CompatibilityError::new(Conflict::Fork(fork), s1, s2));
            }
        }

        match fork {
            Fork::DaoFork
                if stored.is_dao_fork(head) && stored.dao_fork_support != new.dao_fork_support =>
            {
                return Err(CompatibilityError::new(Conflict::DaoForkSupport, s1, s2));
            }
            Fork::Eip158 if stored.is_eip158(head) && stored.chain_id != new.chain_id => {
                return Err(CompatibilityError::new(Conflict::ChainId, s1, s2));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Fixpoint search for the lowest conflict at or below `height`.
///
/// Re-runs the single pass at each computed rewind height until the schedules
/// agree there or the rewind height stops moving, and returns the last
/// conflict seen.
pub fn check_compatible(
    stored: &ForkSchedule,
    new: &ForkSchedule,
    height: BlockNumber,
) -> Result<(), CompatibilityError> {
    let mut head = height;
    let mut last: Option<CompatibilityError> = None;

    loop {
        let Err(err) = check_compatible_at(stored, new, head) else {
            break;
        };
        if last.as_ref().is_some_and(|prev| prev.rewind_to == err.rewind_to) {
            break;
        }
        debug!(
            "[qc-18] Conflict on {} at head {}, rewinding to {}",
            err.what, head, err.rewind_to
        );
        head = err.rewind_to;
        last = Some(err);
    }

    match last {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

impl ForkSchedule {
    /// Check whether `new` can replace this (stored) schedule with the chain
    /// already imported up to `height`.
    pub fn check_compatible(
        &self,
        new: &ForkSchedule,
        height: BlockNumber,
    ) -> Result<(), CompatibilityError> {
        check_compatible(self, new, height)
    }
}
