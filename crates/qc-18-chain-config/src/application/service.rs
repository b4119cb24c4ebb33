//! # Chain Config Service
//!
//! Owns the active fork schedule. Validates it at genesis, persists it, and
//! guards every later replacement with the compatibility check.

use std::sync::Arc;

use crate::config::{ChainConfigServiceConfig, CompatibilityPolicy};
use crate::domain::{eip150_hash_summary, BlockNumber, ChainConfigError, ForkSchedule, Rules};
use crate::ports::{ChainConfigApi, ChainRewinder, ImportOutcome, ScheduleStore};

/// Chain Config Service - holds and guards the active schedule.
pub struct ChainConfigService<S: ScheduleStore, R: ChainRewinder> {
    /// Configuration.
    config: ChainConfigServiceConfig,
    /// Persisted schedule.
    store: Arc<S>,
    /// Chain rewind hook.
    rewinder: Arc<R>,
    /// Active schedule, once genesis is loaded.
    active: Option<ForkSchedule>,
}

impl<S: ScheduleStore, R: ChainRewinder> ChainConfigService<S, R> {
    /// Create a service with no active schedule.
    pub fn new(config: ChainConfigServiceConfig, store: Arc<S>, rewinder: Arc<R>) -> Self {
        Self {
            config,
            store,
            rewinder,
            active: None,
        }
    }

    /// Service configuration.
    pub fn config(&self) -> &ChainConfigServiceConfig {
        &self.config
    }

    /// Has a schedule been activated?
    pub fn is_initialised(&self) -> bool {
        self.active.is_some()
    }

    /// Activate whatever schedule the store already holds.
    ///
    /// The stored schedule is validated like a fresh genesis.
    pub fn resume(&mut self) -> Result<(), ChainConfigError> {
        let schedule = self.store.load()?;
        self.validate(&schedule)?;
        tracing::info!(
            "[qc-18] Resumed stored chain config: {}",
            schedule
        );
        self.active = Some(schedule);
        Ok(())
    }

    /// Fork ordering, then engine parameters when enabled.
    fn validate(&self, schedule: &ForkSchedule) -> Result<(), ChainConfigError> {
        schedule.check_fork_order()?;
        if self.config.validate_engine {
            schedule.validate_engine()?;
        }
        Ok(())
    }

    fn activate(&mut self, schedule: ForkSchedule) -> Result<(), ChainConfigError> {
        self.store.store(&schedule)?;
        tracing::info!(
            "[qc-18] Activated chain config: {} (eip150 hash {})",
            schedule,
            eip150_hash_summary(&schedule)
        );
        self.active = Some(schedule);
        Ok(())
    }
}

impl<S: ScheduleStore, R: ChainRewinder> ChainConfigApi for ChainConfigService<S, R> {
    fn load_genesis(&mut self, schedule: ForkSchedule) -> Result<(), ChainConfigError> {
        if let Err(e) = self.validate(&schedule) {
            tracing::error!("[qc-18] Rejected genesis chain config: {}", e);
            return Err(e);
        }
        self.activate(schedule)
    }

    fn import_schedule(
        &mut self,
        candidate: ForkSchedule,
        head: BlockNumber,
    ) -> Result<ImportOutcome, ChainConfigError> {
        let active = self.active.as_ref().ok_or(ChainConfigError::NotInitialised)?;
        self.validate(&candidate)?;

        let conflict = match active.check_compatible(&candidate, head) {
            Ok(()) => {
                self.activate(candidate)?;
                return Ok(ImportOutcome::Accepted);
            }
            Err(conflict) => conflict,
        };

        tracing::warn!(
            "[qc-18] Incompatible chain config at head {}: {}",
            head,
            conflict
        );

        match self.config.compatibility_policy {
            CompatibilityPolicy::Reject => Err(conflict.into()),
            CompatibilityPolicy::Rewind => {
                let height = conflict.rewind_to;
                self.rewinder
                    .rewind_to(height)
                    .map_err(|reason| ChainConfigError::RewindFailed { height, reason })?;
                tracing::warn!("[qc-18] Rewound chain to block {}", height);
                self.activate(candidate)?;
                Ok(ImportOutcome::Rewound { error: conflict })
            }
        }
    }

    fn rules_at(&self, height: BlockNumber) -> Result<Rules, ChainConfigError> {
        Ok(self.active_schedule()?.rules(height))
    }

    fn active_schedule(&self) -> Result<&ForkSchedule, ChainConfigError> {
        self.active.as_ref().ok_or(ChainConfigError::NotInitialised)
    }
}
