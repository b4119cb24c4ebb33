//! # Consensus Engine Parameters
//!
//! Exactly one engine per schedule. The proof-of-stake-authority variant
//! carries the bootstrap set for the Ishikari governance upgrade and has its
//! own startup validation.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::{Address, PrefixedHex, ZERO_ADDRESS};
use std::fmt;

use super::errors::EngineParameterError;
use super::threshold::ForkThreshold;

/// Minimum PoSA epoch length in blocks.
pub const MIN_POSA_EPOCH: u64 = 2;

/// Proof-of-work sealing. No parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EthashConfig {}

/// Proof-of-authority sealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueConfig {
    /// Seconds between blocks.
    pub period: u64,
    /// Blocks after which votes and checkpoints reset.
    pub epoch: u64,
}

/// Proof-of-stake-authority sealing.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosaConfig {
    /// Seconds between blocks.
    pub period: u64,
    /// Blocks after which votes and checkpoints reset.
    pub epoch: u64,
    /// Validators installed by the Ishikari upgrade.
    #[serde_as(as = "Vec<PrefixedHex>")]
    #[serde(default)]
    pub ishikari_initial_validators: Vec<Address>,
    /// Managers of the initial validators, paired by position.
    #[serde_as(as = "Vec<PrefixedHex>")]
    #[serde(default)]
    pub ishikari_initial_managers: Vec<Address>,
    /// Administrative multisig installed by the Ishikari upgrade.
    #[serde_as(as = "PrefixedHex")]
    #[serde(rename = "ishikariAdminAddress", default)]
    pub ishikari_admin_multisig: Address,
}

impl Default for PosaConfig {
    fn default() -> Self {
        Self {
            period: 3,
            epoch: 100,
            ishikari_initial_validators: Vec::new(),
            ishikari_initial_managers: Vec::new(),
            ishikari_admin_multisig: ZERO_ADDRESS,
        }
    }
}

impl PosaConfig {
    /// Validate bootstrap parameters against the schedule's Ishikari threshold.
    ///
    /// Checks run in order and the first failure is returned. Nothing past
    /// the epoch check is inspected until Ishikari is scheduled.
    pub fn validate(&self, ishikari: ForkThreshold) -> Result<(), EngineParameterError> {
        if self.period == 0 {
            return Err(EngineParameterError::ZeroPeriod);
        }

        if self.epoch < MIN_POSA_EPOCH {
            return Err(EngineParameterError::EpochTooShort { epoch: self.epoch });
        }

        let ForkThreshold::At(block) = ishikari else {
            return Ok(());
        };

        if self.ishikari_initial_managers.is_empty() {
            return Err(EngineParameterError::NoInitialManagers);
        }

        if self.ishikari_initial_managers.len() != self.ishikari_initial_validators.len() {
            return Err(EngineParameterError::ValidatorManagerMismatch {
                managers: self.ishikari_initial_managers.len(),
                validators: self.ishikari_initial_validators.len(),
            });
        }

        // Must be the last block of an epoch. Wrapping matches the reference
        // client at u64::MAX.
        if block.wrapping_add(1) % self.epoch != 0 {
            return Err(EngineParameterError::IshikariNotEpochAligned {
                block,
                epoch: self.epoch,
            });
        }

        Ok(())
    }
}

impl fmt::Display for PosaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "posa({})", json),
            Err(_) => f.write_str("posa"),
        }
    }
}

/// The consensus engine a schedule runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsensusEngineConfig {
    /// Proof-of-work placeholder.
    Ethash(EthashConfig),
    /// Proof-of-authority.
    Clique(CliqueConfig),
    /// Proof-of-stake-authority.
    Posa(PosaConfig),
}

impl ConsensusEngineConfig {
    /// Engine name as used in serialized configs.
    pub fn name(&self) -> &'static str {
        match self {
            ConsensusEngineConfig::Ethash(_) => "ethash",
            ConsensusEngineConfig::Clique(_) => "clique",
            ConsensusEngineConfig::Posa(_) => "posa",
        }
    }

    /// PoSA parameters, if this is the PoSA engine.
    pub fn posa(&self) -> Option<&PosaConfig> {
        match self {
            ConsensusEngineConfig::Posa(posa) => Some(posa),
            _ => None,
        }
    }
}

impl Default for ConsensusEngineConfig {
    fn default() -> Self {
        ConsensusEngineConfig::Ethash(EthashConfig::default())
    }
}

impl fmt::Display for ConsensusEngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsensusEngineConfig::Ethash(_) => f.write_str("ethash"),
            ConsensusEngineConfig::Clique(_) => f.write_str("clique"),
            ConsensusEngineConfig::Posa(posa) => posa.fmt(f),
        }
    }
}
