//! # Fork Schedule
//!
//! The chain configuration: replay-protection chain id, one threshold per
//! fork, the DAO support flag and the consensus engine. Built once at genesis
//! load and treated as immutable; a changed configuration is a new value.

use serde::{Deserialize, Serialize};
use shared_types::{to_prefixed_hex, Hash, ZERO_HASH};
use std::fmt;

use super::engine::ConsensusEngineConfig;
use super::errors::EngineParameterError;
use super::fork::Fork;
use super::rules::Rules;
use super::threshold::{is_forked, BlockNumber, ChainId, ForkThreshold};

/// Per-network fork schedule and consensus parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "crate::adapters::json::ChainConfigJson",
    into = "crate::adapters::json::ChainConfigJson"
)]
pub struct ForkSchedule {
    /// Replay-protection chain identifier.
    pub chain_id: Option<ChainId>,

    /// Homestead switch block.
    pub homestead_block: ForkThreshold,

    /// TheDAO hard-fork switch block.
    pub dao_fork_block: ForkThreshold,
    /// Whether the node supports or opposes the DAO hard-fork.
    pub dao_fork_support: bool,

    /// EIP-150 gas repricing block.
    pub eip150_block: ForkThreshold,
    /// EIP-150 fork hash, for header-only clients.
    pub eip150_hash: Hash,

    /// EIP-155 replay protection block.
    pub eip155_block: ForkThreshold,
    /// EIP-158 state clearing block.
    pub eip158_block: ForkThreshold,

    /// Byzantium switch block.
    pub byzantium_block: ForkThreshold,
    /// Constantinople switch block.
    pub constantinople_block: ForkThreshold,
    /// Petersburg switch block (unset means same as Constantinople).
    pub petersburg_block: ForkThreshold,
    /// Istanbul switch block.
    pub istanbul_block: ForkThreshold,
    /// EIP-2384 bomb delay block.
    pub muir_glacier_block: ForkThreshold,
    /// Berlin switch block.
    pub berlin_block: ForkThreshold,

    /// Fix for the historical block hit by CVE-2021-39137.
    ///
    /// Behaves as if it does not exist outside the execution-time gate
    /// [`ForkSchedule::is_cve_2021_39137_passed`].
    pub cve_2021_39137_block: ForkThreshold,

    /// Ishikari: new validators contract for the PoSA engine.
    pub ishikari_block: ForkThreshold,
    /// Ishikari patch 001: minor fixes found on testnet.
    pub ishikari_patch001_block: ForkThreshold,
    /// Ishikari patch 002: mainnet punishment parameters.
    pub ishikari_patch002_block: ForkThreshold,

    /// YOLOv3 gas repricings.
    pub yolo_v3_block: ForkThreshold,
    /// EWASM switch block.
    pub ewasm_block: ForkThreshold,

    /// Consensus engine parameters.
    pub engine: ConsensusEngineConfig,
}

impl ForkSchedule {
    /// Threshold configured for `fork`.
    pub fn threshold(&self, fork: Fork) -> ForkThreshold {
        match fork {
            Fork::Homestead => self.homestead_block,
            Fork::DaoFork => self.dao_fork_block,
            Fork::Eip150 => self.eip150_block,
            Fork::Eip155 => self.eip155_block,
            Fork::Eip158 => self.eip158_block,
            Fork::Byzantium => self.byzantium_block,
            Fork::Constantinople => self.constantinople_block,
            Fork::Petersburg => self.petersburg_block,
            Fork::Istanbul => self.istanbul_block,
            Fork::MuirGlacier => self.muir_glacier_block,
            Fork::Berlin => self.berlin_block,
            Fork::YoloV3 => self.yolo_v3_block,
            Fork::Ewasm => self.ewasm_block,
            Fork::Ishikari => self.ishikari_block,
            Fork::IshikariPatch001 => self.ishikari_patch001_block,
            Fork::IshikariPatch002 => self.ishikari_patch002_block,
            Fork::Cve2021_39137 => self.cve_2021_39137_block,
        }
    }

    /// Mutable access to the threshold for `fork`.
    pub fn threshold_mut(&mut self, fork: Fork) -> &mut ForkThreshold {
        match fork {
            Fork::Homestead => &mut self.homestead_block,
            Fork::DaoFork => &mut self.dao_fork_block,
            Fork::Eip150 => &mut self.eip150_block,
            Fork::Eip155 => &mut self.eip155_block,
            Fork::Eip158 => &mut self.eip158_block,
            Fork::Byzantium => &mut self.byzantium_block,
            Fork::Constantinople => &mut self.constantinople_block,
            Fork::Petersburg => &mut self.petersburg_block,
            Fork::Istanbul => &mut self.istanbul_block,
            Fork::MuirGlacier => &mut self.muir_glacier_block,
            Fork::Berlin => &mut self.berlin_block,
            Fork::YoloV3 => &mut self.yolo_v3_block,
            Fork::Ewasm => &mut self.ewasm_block,
            Fork::Ishikari => &mut self.ishikari_block,
            Fork::IshikariPatch001 => &mut self.ishikari_patch001_block,
            Fork::IshikariPatch002 => &mut self.ishikari_patch002_block,
            Fork::Cve2021_39137 => &mut self.cve_2021_39137_block,
        }
    }

    /// Builder-style: schedule `fork` at `block`.
    pub fn with_fork(mut self, fork: Fork, block: BlockNumber) -> Self {
        *self.threshold_mut(fork) = ForkThreshold::At(block);
        self
    }

    /// Builder-style: unschedule `fork`.
    pub fn without_fork(mut self, fork: Fork) -> Self {
        *self.threshold_mut(fork) = ForkThreshold::Unscheduled;
        self
    }

    /// Is `fork` active at `height` by its own threshold alone?
    pub fn is_active(&self, fork: Fork, height: BlockNumber) -> bool {
        is_forked(self.threshold(fork), Some(height))
    }

    // -------------------------------------------------------------------------
    // Per-fork predicates
    // -------------------------------------------------------------------------

    /// Is `num` at or past Homestead?
    pub fn is_homestead(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Homestead, num)
    }

    /// Is `num` at or past the DAO fork?
    pub fn is_dao_fork(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::DaoFork, num)
    }

    /// Is `num` at or past EIP-150?
    pub fn is_eip150(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Eip150, num)
    }

    /// Is `num` at or past EIP-155?
    pub fn is_eip155(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Eip155, num)
    }

    /// Is `num` at or past EIP-158?
    pub fn is_eip158(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Eip158, num)
    }

    /// Is `num` at or past Byzantium?
    pub fn is_byzantium(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Byzantium, num)
    }

    /// Is `num` at or past Constantinople?
    pub fn is_constantinople(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Constantinople, num)
    }

    /// Is `num` at or past Petersburg?
    ///
    /// An unset Petersburg follows Constantinople.
    pub fn is_petersburg(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Petersburg, num)
            || (self.petersburg_block.is_unscheduled() && self.is_constantinople(num))
    }

    /// Is `num` at or past Istanbul?
    pub fn is_istanbul(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Istanbul, num)
    }

    /// Is `num` at or past Muir Glacier?
    pub fn is_muir_glacier(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::MuirGlacier, num)
    }

    /// Is `num` at or past Berlin (or its YOLOv3 predecessor)?
    pub fn is_berlin(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Berlin, num) || self.is_active(Fork::YoloV3, num)
    }

    /// Is `num` at or past EWASM?
    pub fn is_ewasm(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Ewasm, num)
    }

    /// Is `num` at or past Ishikari?
    pub fn is_ishikari(&self, num: BlockNumber) -> bool {
        self.is_active(Fork::Ishikari, num)
    }

    /// Is `num` exactly the Ishikari activation block?
    pub fn is_ishikari_fork_block(&self, num: BlockNumber) -> bool {
        self.ishikari_block.activates_at(num)
    }

    /// Is `num` exactly the Ishikari patch 001 activation block?
    pub fn is_ishikari_patch001_block(&self, num: BlockNumber) -> bool {
        self.ishikari_patch001_block.activates_at(num)
    }

    /// Is `num` exactly the Ishikari patch 002 activation block?
    pub fn is_ishikari_patch002_block(&self, num: BlockNumber) -> bool {
        self.ishikari_patch002_block.activates_at(num)
    }

    /// Has execution moved strictly past the CVE-2021-39137 block?
    ///
    /// Unset means the fix applies everywhere.
    pub fn is_cve_2021_39137_passed(&self, num: BlockNumber) -> bool {
        match self.cve_2021_39137_block {
            ForkThreshold::Unscheduled => true,
            ForkThreshold::At(block) => block < num,
        }
    }

    /// Rules snapshot for block `num`.
    pub fn rules(&self, num: BlockNumber) -> Rules {
        Rules::new(self, num)
    }

    /// Validate the consensus engine's parameters against this schedule.
    pub fn validate_engine(&self) -> Result<(), EngineParameterError> {
        match &self.engine {
            ConsensusEngineConfig::Posa(posa) => posa.validate(self.ishikari_block),
            ConsensusEngineConfig::Ethash(_) | ConsensusEngineConfig::Clique(_) => Ok(()),
        }
    }
}

impl fmt::Display for ForkSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain_id = self
            .chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "nil".to_string());
        write!(
            f,
            "{{ChainID: {} Homestead: {} DAO: {} DAOSupport: {} EIP150: {} EIP155: {} EIP158: {} \
             Byzantium: {} Constantinople: {} Petersburg: {} Istanbul: {}, Muir Glacier: {}, \
             Berlin: {}, cve_2021_39137Block:{}, Ishikari: {}, IshikariPatch: {}, YOLO v3: {}, Engine: {}}}",
            chain_id,
            self.homestead_block,
            self.dao_fork_block,
            self.dao_fork_support,
            self.eip150_block,
            self.eip155_block,
            self.eip158_block,
            self.byzantium_block,
            self.constantinople_block,
            self.petersburg_block,
            self.istanbul_block,
            self.muir_glacier_block,
            self.berlin_block,
            self.cve_2021_39137_block,
            self.ishikari_block,
            self.ishikari_patch001_block,
            self.yolo_v3_block,
            self.engine,
        )
    }
}

/// Short human-readable form of the EIP-150 hash, used in logs.
pub fn eip150_hash_summary(schedule: &ForkSchedule) -> String {
    if schedule.eip150_hash == ZERO_HASH {
        "none".to_string()
    } else {
        to_prefixed_hex(&schedule.eip150_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::PosaConfig;

    fn schedule() -> ForkSchedule {
        ForkSchedule {
            chain_id: Some(ChainId::from(1u64)),
            ..ForkSchedule::default()
        }
    }

    #[test]
    fn test_default_has_nothing_scheduled() {
        let s = ForkSchedule::default();
        for fork in Fork::ALL {
            assert!(s.threshold(fork).is_unscheduled(), "{fork} should be unset");
        }
    }

    #[test]
    fn test_with_fork_sets_threshold() {
        let s = schedule().with_fork(Fork::Istanbul, 100);
        assert_eq!(s.istanbul_block, ForkThreshold::At(100));
        assert!(!s.is_istanbul(99));
        assert!(s.is_istanbul(100));
    }

    #[test]
    fn test_threshold_mut_round_trips_every_fork() {
        for (i, fork) in Fork::ALL.into_iter().enumerate() {
            let s = schedule().with_fork(fork, i as u64);
            assert_eq!(s.threshold(fork), ForkThreshold::At(i as u64));
        }
    }

    #[test]
    fn test_petersburg_follows_constantinople_when_unset() {
        let s = schedule().with_fork(Fork::Constantinople, 10);
        assert!(!s.is_petersburg(9));
        assert!(s.is_petersburg(10));

        let s = s.with_fork(Fork::Petersburg, 20);
        assert!(!s.is_petersburg(10));
        assert!(s.is_petersburg(20));
    }

    #[test]
    fn test_berlin_absorbs_yolo_v3() {
        let s = schedule().with_fork(Fork::YoloV3, 5);
        assert!(s.is_berlin(5));
        assert!(!s.is_berlin(4));
    }

    #[test]
    fn test_exact_block_predicates() {
        let s = schedule()
            .with_fork(Fork::Ishikari, 99)
            .with_fork(Fork::IshikariPatch001, 150)
            .with_fork(Fork::IshikariPatch002, 200);
        assert!(s.is_ishikari_fork_block(99));
        assert!(!s.is_ishikari_fork_block(100));
        assert!(s.is_ishikari(100));
        assert!(s.is_ishikari_patch001_block(150));
        assert!(s.is_ishikari_patch002_block(200));
        assert!(!s.is_ishikari_patch002_block(201));
    }

    #[test]
    fn test_cve_gate_is_strict() {
        let s = schedule().with_fork(Fork::Cve2021_39137, 2_509_228);
        assert!(!s.is_cve_2021_39137_passed(2_509_228));
        assert!(s.is_cve_2021_39137_passed(2_509_229));
        assert!(schedule().is_cve_2021_39137_passed(0));
    }

    #[test]
    fn test_validate_engine_dispatches_to_posa() {
        let s = ForkSchedule {
            engine: ConsensusEngineConfig::Posa(PosaConfig {
                period: 0,
                ..PosaConfig::default()
            }),
            ..schedule()
        };
        assert_eq!(s.validate_engine(), Err(EngineParameterError::ZeroPeriod));
        assert!(schedule().validate_engine().is_ok());
    }

    #[test]
    fn test_display_summarises_schedule() {
        let s = schedule().with_fork(Fork::Homestead, 0);
        let text = s.to_string();
        assert!(text.starts_with("{ChainID: 1 Homestead: 0 DAO: nil"));
        assert!(text.ends_with("Engine: ethash}"));
    }

    #[test]
    fn test_eip150_hash_summary() {
        assert_eq!(eip150_hash_summary(&schedule()), "none");
        let s = ForkSchedule {
            eip150_hash: [0x01; 32],
            ..schedule()
        };
        assert!(eip150_hash_summary(&s).starts_with("0x0101"));
    }
}
