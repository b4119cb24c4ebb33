//! # Chain Config JSON
//!
//! Wire form of [`ForkSchedule`] for genesis files, persistence and RPC.
//!
//! Unset thresholds are omitted rather than written as `null`, and exactly
//! one engine section must be present.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::serde_as;
use shared_types::{Hash, PrefixedHex, ZERO_HASH};
use std::path::Path;

use crate::domain::{
    ChainId, CliqueConfig, ConfigLoadError, ConsensusEngineConfig, EthashConfig, ForkSchedule,
    ForkThreshold, PosaConfig,
};

/// Serialized chain config. Converted to and from [`ForkSchedule`] by serde.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfigJson {
    /// Chain id as written: a number of any width, a string, or null.
    /// Parsed into a [`ChainId`] on conversion.
    #[serde(deserialize_with = "deserialize_raw_chain_id")]
    chain_id: Option<Value>,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    homestead_block: ForkThreshold,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    dao_fork_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    dao_fork_support: bool,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    eip150_block: ForkThreshold,
    #[serde_as(as = "PrefixedHex")]
    #[serde(default, skip_serializing_if = "is_zero_hash")]
    eip150_hash: Hash,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    eip155_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    eip158_block: ForkThreshold,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    byzantium_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    constantinople_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    petersburg_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    istanbul_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    muir_glacier_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    berlin_block: ForkThreshold,

    #[serde(
        rename = "cve_2021_39137Block",
        default,
        skip_serializing_if = "ForkThreshold::is_unscheduled"
    )]
    cve_2021_39137_block: ForkThreshold,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    ishikari_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    ishikari_patch001_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    ishikari_patch002_block: ForkThreshold,

    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    yolo_v3_block: ForkThreshold,
    #[serde(default, skip_serializing_if = "ForkThreshold::is_unscheduled")]
    ewasm_block: ForkThreshold,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    ethash: Option<EthashConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    clique: Option<CliqueConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    posa: Option<PosaConfig>,
}

fn is_zero_hash(hash: &Hash) -> bool {
    *hash == ZERO_HASH
}

/// Parse a chain id from decimal or `0x`-prefixed hex text.
pub fn parse_chain_id(text: &str) -> Result<ChainId, ConfigLoadError> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => ChainId::from_str_radix(digits, 16).map_err(|e| format!("{:?}", e)),
        None => ChainId::from_dec_str(text).map_err(|e| format!("{:?}", e)),
    };
    parsed.map_err(|reason| ConfigLoadError::ChainId(format!("{}: {}", text, reason)))
}

/// Decode a raw chain id value. Numbers keep their literal text.
fn chain_id_from_value(value: Option<Value>) -> Result<Option<ChainId>, ConfigLoadError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => parse_chain_id(&number.to_string()).map(Some),
        Some(Value::String(text)) => parse_chain_id(&text).map(Some),
        Some(other) => Err(ConfigLoadError::ChainId(format!(
            "expected number or string, got {}",
            other
        ))),
    }
}

/// Numbers when they fit in 64 bits, decimal strings beyond.
fn chain_id_to_value(chain_id: Option<ChainId>) -> Option<Value> {
    chain_id.map(|id| {
        if id <= ChainId::from(u64::MAX) {
            Value::from(id.as_u64())
        } else {
            Value::String(id.to_string())
        }
    })
}

// A field with `deserialize_with` is required, so a missing `chainId` is an
// error while an explicit `null` is accepted.
fn deserialize_raw_chain_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)
}

impl TryFrom<ChainConfigJson> for ForkSchedule {
    type Error = ConfigLoadError;

    fn try_from(json: ChainConfigJson) -> Result<Self, Self::Error> {
        let engine = match (json.ethash, json.clique, json.posa) {
            (Some(ethash), None, None) => ConsensusEngineConfig::Ethash(ethash),
            (None, Some(clique), None) => ConsensusEngineConfig::Clique(clique),
            (None, None, Some(posa)) => ConsensusEngineConfig::Posa(posa),
            (ethash, clique, posa) => {
                let found = usize::from(ethash.is_some())
                    + usize::from(clique.is_some())
                    + usize::from(posa.is_some());
                return Err(ConfigLoadError::Engine { found });
            }
        };

        Ok(ForkSchedule {
            chain_id: chain_id_from_value(json.chain_id)?,
            homestead_block: json.homestead_block,
            dao_fork_block: json.dao_fork_block,
            dao_fork_support: json.dao_fork_support,
            eip150_block: json.eip150_block,
            eip150_hash: json.eip150_hash,
            eip155_block: json.eip155_block,
            eip158_block: json.eip158_block,
            byzantium_block: json.byzantium_block,
            constantinople_block: json.constantinople_block,
            petersburg_block: json.petersburg_block,
            istanbul_block: json.istanbul_block,
            muir_glacier_block: json.muir_glacier_block,
            berlin_block: json.berlin_block,
            cve_2021_39137_block: json.cve_2021_39137_block,
            ishikari_block: json.ishikari_block,
            ishikari_patch001_block: json.ishikari_patch001_block,
            ishikari_patch002_block: json.ishikari_patch002_block,
            yolo_v3_block: json.yolo_v3_block,
            ewasm_block: json.ewasm_block,
            engine,
        })
    }
}

impl From<ForkSchedule> for ChainConfigJson {
    fn from(schedule: ForkSchedule) -> Self {
        let mut json = ChainConfigJson {
            chain_id: chain_id_to_value(schedule.chain_id),
            homestead_block: schedule.homestead_block,
            dao_fork_block: schedule.dao_fork_block,
            dao_fork_support: schedule.dao_fork_support,
            eip150_block: schedule.eip150_block,
            eip150_hash: schedule.eip150_hash,
            eip155_block: schedule.eip155_block,
            eip158_block: schedule.eip158_block,
            byzantium_block: schedule.byzantium_block,
            constantinople_block: schedule.constantinople_block,
            petersburg_block: schedule.petersburg_block,
            istanbul_block: schedule.istanbul_block,
            muir_glacier_block: schedule.muir_glacier_block,
            berlin_block: schedule.berlin_block,
            cve_2021_39137_block: schedule.cve_2021_39137_block,
            ishikari_block: schedule.ishikari_block,
            ishikari_patch001_block: schedule.ishikari_patch001_block,
            ishikari_patch002_block: schedule.ishikari_patch002_block,
            yolo_v3_block: schedule.yolo_v3_block,
            ewasm_block: schedule.ewasm_block,
            ..ChainConfigJson::default()
        };
        match schedule.engine {
            ConsensusEngineConfig::Ethash(ethash) => json.ethash = Some(ethash),
            ConsensusEngineConfig::Clique(clique) => json.clique = Some(clique),
            ConsensusEngineConfig::Posa(posa) => json.posa = Some(posa),
        }
        json
    }
}

impl ForkSchedule {
    /// Decode a chain config from JSON.
    ///
    /// Engine and chain id problems come back as their own
    /// [`ConfigLoadError`] variants, not wrapped in a JSON error.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let raw: ChainConfigJson = serde_json::from_str(json)?;
        ForkSchedule::try_from(raw)
    }

    /// Read and decode a chain config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
