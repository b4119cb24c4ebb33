//! # Outbound Ports
//!
//! What the chain-config service needs from the rest of the node: somewhere
//! to persist the active schedule, and a way to rewind the chain when a new
//! schedule rewrites history.

use parking_lot::{Mutex, RwLock};

use crate::domain::{BlockNumber, ForkSchedule, StoreError};

/// Persistence for the schedule stored alongside the chain.
pub trait ScheduleStore: Send + Sync {
    /// Load the stored schedule.
    fn load(&self) -> Result<ForkSchedule, StoreError>;

    /// Replace the stored schedule.
    fn store(&self, schedule: &ForkSchedule) -> Result<(), StoreError>;
}

/// Rewinds local chain state.
pub trait ChainRewinder: Send + Sync {
    /// Drop every block above `height`.
    fn rewind_to(&self, height: BlockNumber) -> Result<(), String>;
}

// =============================================================================
// In-Memory Implementations
// =============================================================================

/// Schedule store backed by memory.
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    schedule: RwLock<Option<ForkSchedule>>,
}

impl InMemoryScheduleStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a schedule.
    pub fn with_schedule(schedule: ForkSchedule) -> Self {
        Self {
            schedule: RwLock::new(Some(schedule)),
        }
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    fn load(&self) -> Result<ForkSchedule, StoreError> {
        self.schedule.read().clone().ok_or(StoreError::NotFound)
    }

    fn store(&self, schedule: &ForkSchedule) -> Result<(), StoreError> {
        *self.schedule.write() = Some(schedule.clone());
        Ok(())
    }
}

/// Rewinder that records requested heights instead of touching a chain.
#[derive(Debug, Default)]
pub struct RecordingRewinder {
    rewinds: Mutex<Vec<BlockNumber>>,
    fail_with: Option<String>,
}

impl RecordingRewinder {
    /// Rewinder that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewinder that refuses every request.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            rewinds: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// Does this rewinder refuse every request?
    pub fn is_failing(&self) -> bool {
        self.fail_with.is_some()
    }

    /// Heights requested so far, oldest first.
    pub fn rewinds(&self) -> Vec<BlockNumber> {
        self.rewinds.lock().clone()
    }
}

impl ChainRewinder for RecordingRewinder {
    fn rewind_to(&self, height: BlockNumber) -> Result<(), String> {
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        self.rewinds.lock().push(height);
        Ok(())
    }
}
