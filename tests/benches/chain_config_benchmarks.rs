//! # Chain Config Benchmarks
//!
//! Hot paths of the chain config crate:
//!
//! | Operation | Called | Target |
//! |-----------|--------|--------|
//! | Rules snapshot | Once per block executed | < 1µs |
//! | Compatibility fixpoint | Once per schedule import | < 10µs |
//! | Checkpoint commitment | Once per checkpoint verified | < 5µs |
//! | Genesis JSON decode | Once per startup | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use qc_18_chain_config::{presets, Fork, ForkSchedule, TrustedCheckpoint};

// ============================================================================
// Rules snapshot
// ============================================================================

fn bench_rules_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain-config-rules");
    let mainnet = presets::mainnet();

    for height in [0u64, presets::MAINNET_CVE_2021_39137_BLOCK, presets::MAINNET_ISHIKARI_BLOCK] {
        group.bench_with_input(BenchmarkId::new("mainnet_rules", height), &height, |b, &h| {
            b.iter(|| black_box(mainnet.rules(black_box(h))))
        });
    }

    group.finish();
}

// ============================================================================
// Compatibility
// ============================================================================

fn bench_compatibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain-config-compatibility");
    let stored = presets::mainnet();

    let identical = presets::mainnet();
    group.bench_function("identical_schedules", |b| {
        b.iter(|| black_box(stored.check_compatible(black_box(&identical), 20_000_000)))
    });

    // Every fork moves, so the fixpoint walks back through several conflicts.
    let mut shifted = presets::all_ethash_protocol_changes();
    for (i, fork) in [Fork::Homestead, Fork::Eip150, Fork::Eip155, Fork::Eip158, Fork::Byzantium]
        .into_iter()
        .enumerate()
    {
        shifted = shifted.with_fork(fork, 10 * (i as u64 + 1));
    }
    let base = presets::all_ethash_protocol_changes();
    group.bench_function("fixpoint_rewind", |b| {
        b.iter(|| black_box(base.check_compatible(black_box(&shifted), 1_000)))
    });

    group.finish();
}

// ============================================================================
// Checkpoints and decoding
// ============================================================================

fn bench_checkpoint_hash(c: &mut Criterion) {
    let checkpoint = TrustedCheckpoint {
        section_index: 42,
        section_head: [0x11; 32],
        cht_root: [0x22; 32],
        bloom_root: [0x33; 32],
    };
    c.bench_function("checkpoint_hash", |b| b.iter(|| black_box(checkpoint.hash())));
}

fn bench_genesis_decode(c: &mut Criterion) {
    let json = presets::mainnet().to_json().unwrap_or_default();
    c.bench_function("mainnet_json_decode", |b| {
        b.iter(|| black_box(ForkSchedule::from_json(black_box(&json))))
    });
}

criterion_group!(
    benches,
    bench_rules_snapshot,
    bench_compatibility,
    bench_checkpoint_hash,
    bench_genesis_decode
);
criterion_main!(benches);
