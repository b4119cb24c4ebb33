//! # Fork Order Validation
//!
//! A schedule must not enable a fork while an earlier one is disabled, nor
//! activate a later fork before an earlier one. Runs once at config load.

use crate::domain::{Fork, ForkSchedule, ForkThreshold, ScheduleOrderError};

/// One entry of the ordering walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedFork {
    /// Which fork.
    pub fork: Fork,
    /// Its configured threshold.
    pub threshold: ForkThreshold,
    /// Optional forks may be unset without blocking later forks.
    pub optional: bool,
}

/// Forks subject to ordering, in protocol order, with their optional flag.
///
/// YOLOv3, EWASM and the CVE-2021-39137 fix are deliberately absent.
pub const ORDERED_FORKS: [(Fork, bool); 14] = [
    (Fork::Homestead, false),
    (Fork::DaoFork, true),
    (Fork::Eip150, false),
    (Fork::Eip155, false),
    (Fork::Eip158, false),
    (Fork::Byzantium, false),
    (Fork::Constantinople, false),
    (Fork::Petersburg, false),
    (Fork::Istanbul, false),
    (Fork::MuirGlacier, true),
    (Fork::Berlin, false),
    (Fork::Ishikari, false),
    (Fork::IshikariPatch001, false),
    (Fork::IshikariPatch002, false),
];

/// Build the ordering walk for `schedule`.
pub fn ordered_forks(schedule: &ForkSchedule) -> Vec<OrderedFork> {
    ORDERED_FORKS
        .iter()
        .map(|&(fork, optional)| OrderedFork {
            fork,
            threshold: schedule.threshold(fork),
            optional,
        })
        .collect()
}

/// Validate an ordered list of forks, returning the first violation.
///
/// An unset optional fork is skipped, so the next fork is compared with the
/// last mandatory (or set optional) one.
pub fn check_ordering(forks: &[OrderedFork]) -> Result<(), ScheduleOrderError> {
    let mut last: Option<OrderedFork> = None;

    for &cur in forks {
        if let Some(prev) = last {
            match (prev.threshold, cur.threshold) {
                (ForkThreshold::Unscheduled, ForkThreshold::At(current_block)) => {
                    return Err(ScheduleOrderError::SkippedFork {
                        previous: prev.fork,
                        current: cur.fork,
                        current_block,
                    });
                }
                (ForkThreshold::At(previous_block), ForkThreshold::At(current_block))
                    if previous_block > current_block =>
                {
                    return Err(ScheduleOrderError::Misordered {
                        previous: prev.fork,
                        previous_block,
                        current: cur.fork,
                        current_block,
                    });
                }
                _ => {}
            }
        }

        if !cur.optional || cur.threshold.is_scheduled() {
            last = Some(cur);
        }
    }

    Ok(())
}

/// Validate the fork ordering of `schedule`.
pub fn check_fork_order(schedule: &ForkSchedule) -> Result<(), ScheduleOrderError> {
    check_ordering(&ordered_forks(schedule))
}

impl ForkSchedule {
    /// Check that no fork is skipped or scheduled out of order.
    pub fn check_fork_order(&self) -> Result<(), ScheduleOrderError> {
        check_fork_order(self)
    }
}
