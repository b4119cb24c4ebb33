//! # Inbound Ports
//!
//! What the rest of the node can ask of the chain-config service.

use crate::domain::{BlockNumber, ChainConfigError, CompatibilityError, ForkSchedule, Rules};

/// Result of importing a candidate schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Candidate agreed with the chain and is now active.
    Accepted,
    /// Candidate conflicted; the chain was rewound and the candidate is active.
    Rewound {
        /// The conflict that forced the rewind.
        error: CompatibilityError,
    },
}

/// Chain configuration API - inbound port.
pub trait ChainConfigApi {
    /// Validate, persist and activate the genesis schedule.
    fn load_genesis(&mut self, schedule: ForkSchedule) -> Result<(), ChainConfigError>;

    /// Replace the active schedule with `candidate`, given the chain head.
    fn import_schedule(
        &mut self,
        candidate: ForkSchedule,
        head: BlockNumber,
    ) -> Result<ImportOutcome, ChainConfigError>;

    /// Rules in force at `height` under the active schedule.
    fn rules_at(&self, height: BlockNumber) -> Result<Rules, ChainConfigError>;

    /// The active schedule.
    fn active_schedule(&self) -> Result<&ForkSchedule, ChainConfigError>;
}
