//! # Network Presets
//!
//! Genesis hashes and chain configs for the known networks, plus the
//! all-forks-at-genesis configs used by development chains and tests.

use shared_types::{address_from_hex, hash_from_hex, Address, Hash, ZERO_HASH};

use super::engine::{CliqueConfig, ConsensusEngineConfig, EthashConfig, PosaConfig};
use super::schedule::ForkSchedule;
use super::threshold::{ChainId, ForkThreshold};

/// Mainnet genesis hash.
pub const MAINNET_GENESIS_HASH: Hash =
    hash_from_hex("0xd179bc170ecd216166ba440a2cff697ba1ed4e203ddcb51214e52773906ca3fc");

/// Testnet genesis hash.
pub const TESTNET_GENESIS_HASH: Hash =
    hash_from_hex("0x3e98a8f1704be5accc0ce9abf3e852e24ec030a9dda6c1beaf72c600f85cd417");

/// Historical block affected by CVE-2021-39137 on mainnet.
pub const MAINNET_CVE_2021_39137_BLOCK: u64 = 2_509_228;

/// Mainnet Ishikari activation (and both patches).
pub const MAINNET_ISHIKARI_BLOCK: u64 = 11_171_299;

const MAINNET_ISHIKARI_VALIDATORS: [Address; 11] = [
    address_from_hex("0x1105c97ffbd985600e6dc8e06e477b99d0a9ff39"),
    address_from_hex("0xeac6d9b96c73a637ba9d7a54dc4faece0300fcb3"),
    address_from_hex("0x98a96f0db2185a9462c0cedd1a6259955fff7353"),
    address_from_hex("0x429663140a87d0ee4ac6b6d3cf8a538b46d18e49"),
    address_from_hex("0x6ee29fbbe3e0bdbf86773d71ebc6b5e38ce81e2e"),
    address_from_hex("0x87fcfadc3af29ab3197c81ec247c0b28f465fafe"),
    address_from_hex("0x43e3adc88f337e0596b47d4c1794294b99226e5f"),
    address_from_hex("0xe270d4fce42c7713f1ad9cc75d41b7a69558a169"),
    address_from_hex("0xbe5f2ffcbd26fc5304721de0c7279960c453b8f0"),
    address_from_hex("0x9d4a6f12d16c7950ff58ab7ea26cdd837697db6f"),
    address_from_hex("0xad291383864e1999fc7a36120562f1bb59dfea99"),
];

const MAINNET_ISHIKARI_MANAGERS: [Address; 11] = [
    address_from_hex("0x65E958D3EA7e60F33098dc665B0C8B7Dc563FA72"),
    address_from_hex("0x6586e16EB5574f79bA4Cfa46C3b37bAEAAC50f32"),
    address_from_hex("0xCCbb95B446e7CFd23fb80374b92d1F6F33e073E2"),
    address_from_hex("0x20fefFC0f3182Ec1F7507624Fe643a5B853Cb04D"),
    address_from_hex("0x55396D01b6383f7A576460fb33ef29ced3A744f8"),
    address_from_hex("0x914b49DBC9BDd151Cf3b76f7E19963b61e90DbEC"),
    address_from_hex("0x0Bcc6F86f105679881456699E91389fBd07e4cC3"),
    address_from_hex("0xD2081060FB57bF06668195979C6c200d31f7cb4B"),
    address_from_hex("0xC2fCf0C527E0642b14778876d57b8a6f582d25f5"),
    address_from_hex("0xb9D71eF2D3A31588EF9196e66d69EE20B7302af8"),
    address_from_hex("0x68A6a68d03D405af7E4676e5D92AD4BD7d1d004a"),
];

const MAINNET_ISHIKARI_ADMIN: Address =
    address_from_hex("0xD4139cc315164d4dcC696a18902F2e6b7B5D3de8");

const TESTNET_ISHIKARI_VALIDATORS: [Address; 4] = [
    address_from_hex("0x20b9a60c5a2137259ce81e45a1310a754270753b"),
    address_from_hex("0xe40c3ef8dc2dd6d3edecd8ebdc64a6b68f530589"),
    address_from_hex("0xce7878e800408d60e7b55d7d5c56519f329a77fc"),
    address_from_hex("0xbf8144aa88bea302548f51b3d776b8b7e4453449"),
];

const TESTNET_ISHIKARI_MANAGERS: [Address; 4] = [
    address_from_hex("0xc6C450C46F71AD568d8BfA16Ca597906eb017c71"),
    address_from_hex("0x9E207e1e0BB946d676fA5c86ed95cC997d6A6369"),
    address_from_hex("0x0B3c112e1dc42487302d3d8b5c0A714Ec5BeBe27"),
    address_from_hex("0x6862F46C4cf0E4ECCE9186651637F4c692015A7c"),
];

const TESTNET_ISHIKARI_ADMIN: Address =
    address_from_hex("0x22e4A5dfFee45CeaBd4d7c45814BfC27dF3776b4");

/// Every fork through Berlin, and the CVE fix, at genesis; later forks unset.
fn genesis_forks(chain_id: u64, engine: ConsensusEngineConfig) -> ForkSchedule {
    let at_genesis = ForkThreshold::At(0);
    ForkSchedule {
        chain_id: Some(ChainId::from(chain_id)),
        homestead_block: at_genesis,
        dao_fork_block: ForkThreshold::Unscheduled,
        dao_fork_support: false,
        eip150_block: at_genesis,
        eip150_hash: ZERO_HASH,
        eip155_block: at_genesis,
        eip158_block: at_genesis,
        byzantium_block: at_genesis,
        constantinople_block: at_genesis,
        petersburg_block: at_genesis,
        istanbul_block: at_genesis,
        muir_glacier_block: at_genesis,
        berlin_block: at_genesis,
        cve_2021_39137_block: at_genesis,
        ishikari_block: ForkThreshold::Unscheduled,
        ishikari_patch001_block: ForkThreshold::Unscheduled,
        ishikari_patch002_block: ForkThreshold::Unscheduled,
        yolo_v3_block: ForkThreshold::Unscheduled,
        ewasm_block: ForkThreshold::Unscheduled,
        engine,
    }
}

/// Main network.
pub fn mainnet() -> ForkSchedule {
    ForkSchedule {
        dao_fork_support: true,
        cve_2021_39137_block: ForkThreshold::At(MAINNET_CVE_2021_39137_BLOCK),
        ishikari_block: ForkThreshold::At(MAINNET_ISHIKARI_BLOCK),
        ishikari_patch001_block: ForkThreshold::At(MAINNET_ISHIKARI_BLOCK),
        ishikari_patch002_block: ForkThreshold::At(MAINNET_ISHIKARI_BLOCK),
        ..genesis_forks(
            126,
            ConsensusEngineConfig::Posa(PosaConfig {
                period: 3,
                epoch: 100,
                ishikari_initial_validators: MAINNET_ISHIKARI_VALIDATORS.to_vec(),
                ishikari_initial_managers: MAINNET_ISHIKARI_MANAGERS.to_vec(),
                ishikari_admin_multisig: MAINNET_ISHIKARI_ADMIN,
            }),
        )
    }
}

/// Public test network.
pub fn testnet() -> ForkSchedule {
    ForkSchedule {
        dao_fork_support: true,
        ishikari_block: ForkThreshold::At(11_321_699),
        ishikari_patch001_block: ForkThreshold::At(12_153_317),
        ishikari_patch002_block: ForkThreshold::At(12_162_886),
        ..genesis_forks(
            322,
            ConsensusEngineConfig::Posa(PosaConfig {
                period: 3,
                epoch: 100,
                ishikari_initial_validators: TESTNET_ISHIKARI_VALIDATORS.to_vec(),
                ishikari_initial_managers: TESTNET_ISHIKARI_MANAGERS.to_vec(),
                ishikari_admin_multisig: TESTNET_ISHIKARI_ADMIN,
            }),
        )
    }
}

/// Every accepted protocol change under proof-of-work.
pub fn all_ethash_protocol_changes() -> ForkSchedule {
    genesis_forks(1337, ConsensusEngineConfig::Ethash(EthashConfig::default()))
}

/// Every accepted protocol change under proof-of-authority.
pub fn all_clique_protocol_changes() -> ForkSchedule {
    genesis_forks(
        1337,
        ConsensusEngineConfig::Clique(CliqueConfig {
            period: 0,
            epoch: 30000,
        }),
    )
}

/// Minimal proof-of-work config for unit tests.
pub fn test_chain_config() -> ForkSchedule {
    genesis_forks(1, ConsensusEngineConfig::Ethash(EthashConfig::default()))
}

/// Look up a preset by name (`mainnet`, `testnet`, `dev-ethash`, `dev-clique`, `test`).
pub fn by_name(name: &str) -> Option<ForkSchedule> {
    match name {
        "mainnet" => Some(mainnet()),
        "testnet" => Some(testnet()),
        "dev-ethash" => Some(all_ethash_protocol_changes()),
        "dev-clique" => Some(all_clique_protocol_changes()),
        "test" => Some(test_chain_config()),
        _ => None,
    }
}
