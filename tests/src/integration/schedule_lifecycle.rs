//! # Schedule Lifecycle
//!
//! A schedule is loaded at genesis, then replaced by operator-supplied
//! schedules as the chain grows. These scenarios drive the service through
//! the in-memory store and rewinder.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_18_chain_config::{
        presets, ChainConfigApi, ChainConfigError, ChainConfigService, ChainConfigServiceConfig,
        Conflict, Fork, ForkSchedule, ForkThreshold, ImportOutcome, InMemoryScheduleStore,
        RecordingRewinder, ScheduleStore,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Byzantium at genesis, Istanbul (and everything after it) at `istanbul`.
    fn schedule_with_istanbul(istanbul: u64) -> ForkSchedule {
        presets::all_ethash_protocol_changes()
            .with_fork(Fork::Istanbul, istanbul)
            .with_fork(Fork::MuirGlacier, istanbul)
            .with_fork(Fork::Berlin, istanbul)
    }

    fn service_with(
        config: ChainConfigServiceConfig,
        genesis: ForkSchedule,
    ) -> (
        ChainConfigService<InMemoryScheduleStore, RecordingRewinder>,
        Arc<InMemoryScheduleStore>,
        Arc<RecordingRewinder>,
    ) {
        let store = Arc::new(InMemoryScheduleStore::new());
        let rewinder = Arc::new(RecordingRewinder::new());
        let mut service = ChainConfigService::new(config, store.clone(), rewinder.clone());
        service.load_genesis(genesis).unwrap();
        (service, store, rewinder)
    }

    // =============================================================================
    // ISTANBUL RESCHEDULE
    // =============================================================================

    #[test]
    fn test_istanbul_reschedule_before_activation() {
        let s1 = schedule_with_istanbul(100);
        let s2 = schedule_with_istanbul(150);

        assert_eq!(s1.threshold(Fork::Byzantium), ForkThreshold::At(0));
        assert!(s1.check_compatible(&s2, 50).is_ok());
    }

    #[test]
    fn test_istanbul_reschedule_after_activation() {
        let s1 = schedule_with_istanbul(100);
        let s2 = schedule_with_istanbul(150);

        let err = s1.check_compatible(&s2, 120).unwrap_err();
        assert_eq!(err.what, Conflict::Fork(Fork::Istanbul));
        assert_eq!(err.stored, ForkThreshold::At(100));
        assert_eq!(err.new, ForkThreshold::At(150));
        assert_eq!(err.rewind_to, 99);
        assert_eq!(
            err.to_string(),
            "mismatching Istanbul fork block in database (have 100, want 150, rewindto 99)"
        );
    }

    #[test]
    fn test_service_walks_through_reschedules() {
        let (mut service, store, rewinder) = service_with(
            ChainConfigServiceConfig::for_testing(),
            schedule_with_istanbul(100),
        );

        // Still ahead of Istanbul: silent swap.
        assert_eq!(
            service.import_schedule(schedule_with_istanbul(150), 50).unwrap(),
            ImportOutcome::Accepted
        );
        assert!(!service.rules_at(120).unwrap().is_istanbul);

        // Past the new Istanbul: pulling it back rewinds below the earlier block.
        let outcome = service.import_schedule(schedule_with_istanbul(80), 200).unwrap();
        let ImportOutcome::Rewound { error } = outcome else {
            panic!("expected a rewind");
        };
        assert_eq!(error.rewind_to, 79);
        assert_eq!(rewinder.rewinds(), vec![79]);
        assert_eq!(store.load().unwrap(), schedule_with_istanbul(80));
        assert!(service.rules_at(80).unwrap().is_istanbul);
    }

    #[test]
    fn test_reject_policy_surfaces_conflict() {
        let (mut service, store, rewinder) = service_with(
            ChainConfigServiceConfig::default(),
            schedule_with_istanbul(100),
        );

        let err = service
            .import_schedule(schedule_with_istanbul(150), 120)
            .unwrap_err();
        assert!(matches!(err, ChainConfigError::Incompatible(ref e) if e.rewind_to == 99));
        assert_eq!(store.load().unwrap(), schedule_with_istanbul(100));
        assert!(rewinder.rewinds().is_empty());
    }

    // =============================================================================
    // CHAIN IDENTITY
    // =============================================================================

    #[test]
    fn test_chain_id_change_after_eip158() {
        let (mut service, _, rewinder) = service_with(
            ChainConfigServiceConfig::for_testing(),
            presets::all_ethash_protocol_changes(),
        );

        let mut renumbered = presets::all_ethash_protocol_changes();
        renumbered.chain_id = Some(7u64.into());

        let outcome = service.import_schedule(renumbered, 1_000).unwrap();
        let ImportOutcome::Rewound { error } = outcome else {
            panic!("expected a rewind");
        };
        assert_eq!(error.what, Conflict::ChainId);
        assert_eq!(error.rewind_to, 0);
        assert_eq!(rewinder.rewinds(), vec![0]);
    }

    #[test]
    fn test_mainnet_dao_flag_flip_is_ignored_without_dao_fork() {
        // Mainnet never schedules the DAO fork, so the support flag is inert.
        let mut flipped = presets::mainnet();
        flipped.dao_fork_support = false;
        assert!(presets::mainnet().check_compatible(&flipped, 20_000_000).is_ok());
    }

    #[test]
    fn test_mainnet_ishikari_postponement_conflicts() {
        let postponed = presets::mainnet()
            .with_fork(Fork::Ishikari, 11_171_399)
            .with_fork(Fork::IshikariPatch001, 11_171_399)
            .with_fork(Fork::IshikariPatch002, 11_171_399);

        let err = presets::mainnet()
            .check_compatible(&postponed, 12_000_000)
            .unwrap_err();
        assert_eq!(err.what, Conflict::Fork(Fork::Ishikari));
        assert_eq!(err.rewind_to, presets::MAINNET_ISHIKARI_BLOCK - 1);
    }
}
