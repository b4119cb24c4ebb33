//! # Rules Snapshot
//!
//! Per-height activation flags for execution code.
//!
//! A snapshot is bound to one height of one schedule. It must be rebuilt,
//! never carried across a point where the schedule itself may change.

use super::schedule::ForkSchedule;
use super::threshold::{BlockNumber, ChainId};

/// Immutable activation flags at a single height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Chain id, zero when the schedule leaves it unset.
    pub chain_id: ChainId,
    /// Homestead active.
    pub is_homestead: bool,
    /// EIP-150 active.
    pub is_eip150: bool,
    /// EIP-155 active.
    pub is_eip155: bool,
    /// EIP-158 active.
    pub is_eip158: bool,
    /// Byzantium active.
    pub is_byzantium: bool,
    /// Constantinople active.
    pub is_constantinople: bool,
    /// Petersburg active (or implied by Constantinople).
    pub is_petersburg: bool,
    /// Istanbul active.
    pub is_istanbul: bool,
    /// Berlin active (or YOLOv3).
    pub is_berlin: bool,
    /// Ishikari active.
    pub is_ishikari: bool,
    /// Execution is strictly past the CVE-2021-39137 block.
    pub is_cve_2021_39137_passed: bool,
}

impl Rules {
    /// Derive the snapshot for `num`.
    pub fn new(schedule: &ForkSchedule, num: BlockNumber) -> Self {
        Self {
            chain_id: schedule.chain_id.unwrap_or_default(),
            is_homestead: schedule.is_homestead(num),
            is_eip150: schedule.is_eip150(num),
            is_eip155: schedule.is_eip155(num),
            is_eip158: schedule.is_eip158(num),
            is_byzantium: schedule.is_byzantium(num),
            is_constantinople: schedule.is_constantinople(num),
            is_petersburg: schedule.is_petersburg(num),
            is_istanbul: schedule.is_istanbul(num),
            is_berlin: schedule.is_berlin(num),
            is_ishikari: schedule.is_ishikari(num),
            is_cve_2021_39137_passed: schedule.is_cve_2021_39137_passed(num),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fork::Fork;

    #[test]
    fn test_unset_chain_id_normalised_to_zero() {
        let rules = ForkSchedule::default().rules(0);
        assert_eq!(rules.chain_id, ChainId::zero());
    }

    #[test]
    fn test_flags_track_thresholds() {
        let schedule = ForkSchedule {
            chain_id: Some(ChainId::from(126u64)),
            ..ForkSchedule::default()
        }
        .with_fork(Fork::Homestead, 0)
        .with_fork(Fork::Byzantium, 10)
        .with_fork(Fork::Constantinople, 20)
        .with_fork(Fork::Istanbul, 30)
        .with_fork(Fork::Ishikari, 99);

        let early = schedule.rules(15);
        assert_eq!(early.chain_id, ChainId::from(126u64));
        assert!(early.is_homestead);
        assert!(early.is_byzantium);
        assert!(!early.is_constantinople);
        assert!(!early.is_petersburg);
        assert!(!early.is_ishikari);

        let late = schedule.rules(100);
        assert!(late.is_constantinople);
        assert!(late.is_petersburg);
        assert!(late.is_istanbul);
        assert!(late.is_ishikari);
        assert!(!late.is_berlin);
    }

    #[test]
    fn test_snapshot_is_rebuilt_not_shared() {
        let before = ForkSchedule::default().with_fork(Fork::Berlin, 5);
        let after = before.clone().with_fork(Fork::Berlin, 50);
        assert!(before.rules(10).is_berlin);
        assert!(!after.rules(10).is_berlin);
    }

    #[test]
    fn test_cve_flag() {
        let schedule = ForkSchedule::default().with_fork(Fork::Cve2021_39137, 10);
        assert!(!schedule.rules(10).is_cve_2021_39137_passed);
        assert!(schedule.rules(11).is_cve_2021_39137_passed);
    }
}
