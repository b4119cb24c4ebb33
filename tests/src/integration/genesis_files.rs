//! # Genesis Files
//!
//! Chain configs as operators write them: JSON files on disk, the built-in
//! network presets, and the checkpoint data keyed by their genesis hashes.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use qc_18_chain_config::{
        presets, CheckpointRegistry, ConfigLoadError, ConsensusEngineConfig, EngineParameterError,
        Fork, ForkSchedule, ForkThreshold, ScheduleOrderError, TrustedCheckpoint,
    };
    use shared_types::ZERO_HASH;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const POSA_GENESIS: &str = r#"{
        "chainId": 126,
        "homesteadBlock": 0,
        "eip150Block": 0,
        "eip155Block": 0,
        "eip158Block": 0,
        "byzantiumBlock": 0,
        "constantinopleBlock": 0,
        "petersburgBlock": 0,
        "istanbulBlock": 0,
        "muirGlacierBlock": 0,
        "berlinBlock": 0,
        "ishikariBlock": 199,
        "posa": {
            "period": 3,
            "epoch": 100,
            "ishikariInitialValidators": ["0x1105c97ffbd985600e6dc8e06e477b99d0a9ff39"],
            "ishikariInitialManagers": ["0x65E958D3EA7e60F33098dc665B0C8B7Dc563FA72"],
            "ishikariAdminAddress": "0xD4139cc315164d4dcC696a18902F2e6b7B5D3de8"
        }
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // =============================================================================
    // FILE LOADING
    // =============================================================================

    #[test]
    fn test_posa_genesis_file_loads_and_validates() {
        let file = write_temp(POSA_GENESIS);
        let schedule = ForkSchedule::from_file(file.path()).unwrap();

        assert_eq!(schedule.ishikari_block, ForkThreshold::At(199));
        assert!(schedule.cve_2021_39137_block.is_unscheduled());
        schedule.check_fork_order().unwrap();
        schedule.validate_engine().unwrap();

        let posa = schedule.engine.posa().unwrap();
        assert_eq!(posa.ishikari_initial_validators.len(), 1);
        assert_eq!(posa.ishikari_admin_multisig[0], 0xd4);
    }

    #[test]
    fn test_misaligned_ishikari_rejected() {
        let json = POSA_GENESIS.replace("\"ishikariBlock\": 199", "\"ishikariBlock\": 198");
        let schedule = ForkSchedule::from_json(&json).unwrap();

        assert_eq!(
            schedule.validate_engine(),
            Err(EngineParameterError::IshikariNotEpochAligned {
                block: 198,
                epoch: 100
            })
        );
    }

    #[test]
    fn test_fork_after_unset_mandatory_rejected() {
        let json = r#"{"chainId": 9, "homesteadBlock": 0, "byzantiumBlock": 10, "ethash": {}}"#;
        let schedule = ForkSchedule::from_json(json).unwrap();

        let err = schedule.check_fork_order().unwrap_err();
        assert!(matches!(
            err,
            ScheduleOrderError::SkippedFork {
                previous: Fork::Eip158,
                current: Fork::Byzantium,
                current_block: 10,
            }
        ));
    }

    #[test]
    fn test_engine_one_of_enforced_from_file() {
        let file = write_temp(r#"{"chainId": 1, "homesteadBlock": 0}"#);
        assert!(matches!(
            ForkSchedule::from_file(file.path()),
            Err(ConfigLoadError::Engine { found: 0 })
        ));
    }

    #[test]
    fn test_large_numeric_chain_id_from_file() {
        let json = POSA_GENESIS.replace(
            "\"chainId\": 126",
            "\"chainId\": 340282366920938463463374607431768211457",
        );
        let file = write_temp(&json);
        let schedule = ForkSchedule::from_file(file.path()).unwrap();

        let expected = shared_types::U256::from_dec_str("340282366920938463463374607431768211457").unwrap();
        assert_eq!(schedule.chain_id, Some(expected));
        assert_eq!(schedule.rules(0).chain_id, expected);
    }

    // =============================================================================
    // PRESETS
    // =============================================================================

    #[test]
    fn test_presets_round_trip_through_json() {
        for name in ["mainnet", "testnet", "dev-ethash", "dev-clique", "test"] {
            let preset = presets::by_name(name).unwrap();
            let decoded = ForkSchedule::from_json(&preset.to_json().unwrap()).unwrap();
            assert_eq!(decoded, preset, "{name}");
        }
    }

    #[test]
    fn test_named_networks_pass_all_checks() {
        for schedule in [presets::mainnet(), presets::testnet()] {
            schedule.check_fork_order().unwrap();
            schedule.validate_engine().unwrap();
            assert!(matches!(schedule.engine, ConsensusEngineConfig::Posa(_)));
        }
    }

    #[test]
    fn test_mainnet_cve_gate() {
        let mainnet = presets::mainnet();
        let block = presets::MAINNET_CVE_2021_39137_BLOCK;

        assert!(!mainnet.rules(block).is_cve_2021_39137_passed);
        assert!(mainnet.rules(block + 1).is_cve_2021_39137_passed);
        assert!(presets::testnet().rules(1).is_cve_2021_39137_passed);
    }

    // =============================================================================
    // CHECKPOINTS
    // =============================================================================

    #[test]
    fn test_registry_verifies_registered_checkpoint() {
        let checkpoint = TrustedCheckpoint {
            section_index: 300,
            section_head: [0x11; 32],
            cht_root: [0x22; 32],
            bloom_root: [0x33; 32],
        };
        let mut registry = CheckpointRegistry::with_known_networks();
        registry.insert_checkpoint(presets::MAINNET_GENESIS_HASH, checkpoint);

        assert!(registry.verify_checkpoint(&presets::MAINNET_GENESIS_HASH, &checkpoint.hash()));
        assert!(!registry.verify_checkpoint(&presets::TESTNET_GENESIS_HASH, &checkpoint.hash()));
        assert!(!registry.verify_checkpoint(&presets::MAINNET_GENESIS_HASH, &ZERO_HASH));
    }

    #[test]
    fn test_checkpoint_json_shape() {
        let json = format!(
            r#"{{"sectionIndex": 1, "sectionHead": "0x{h}", "chtRoot": "0x{h}", "bloomRoot": "0x{h}"}}"#,
            h = "ab".repeat(32)
        );
        let checkpoint: TrustedCheckpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(checkpoint.section_index, 1);
        assert!(!checkpoint.is_empty());
    }
}
