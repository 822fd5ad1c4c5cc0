#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Criterion benchmarks for byte generation
//!
//! These separate the per-call cost of each entropy source from the cost
//! of the derivation layer, and measure the assembled facade both with
//! and without entropy verification.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strand_core::derive::DerivedBundle;
use strand_core::source::{self, EntropySource};
use strand_core::{GeneratorConfig, generate_with_config};

const LENGTHS: [usize; 3] = [16, 32, 64];

fn bench_source_fetch(c: &mut Criterion) {
    // Verification off isolates the raw fetch cost.
    let config = GeneratorConfig::for_development();

    let mut group = c.benchmark_group("source_fetch");

    for length in &LENGTHS {
        group.bench_with_input(BenchmarkId::new("secure_prng", length), length, |b, &length| {
            b.iter(|| {
                let bytes = source::fetch(EntropySource::SecurePrng, black_box(length), &config)
                    .expect("fetch should succeed");
                black_box(bytes);
            });
        });

        #[cfg(unix)]
        group.bench_with_input(BenchmarkId::new("raw_device", length), length, |b, &length| {
            b.iter(|| {
                let bytes = source::fetch(EntropySource::RawDevice, black_box(length), &config)
                    .expect("fetch should succeed");
                black_box(bytes);
            });
        });

        group.bench_with_input(BenchmarkId::new("library_prng", length), length, |b, &length| {
            b.iter(|| {
                let bytes = source::fetch(EntropySource::LibraryPrng, black_box(length), &config)
                    .expect("fetch should succeed");
                black_box(bytes);
            });
        });
    }

    group.finish();
}

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_bundle");

    for length in &LENGTHS {
        let raw = vec![0xa5u8; *length];
        group.bench_with_input(BenchmarkId::from_parameter(length), &raw, |b, raw| {
            b.iter(|| {
                let bundle = DerivedBundle::from_raw(black_box(raw.clone()));
                black_box(bundle);
            });
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let unchecked = GeneratorConfig::for_development();
    // The certification sample is drawn on the first verified call of the
    // process; iterations after that measure the steady-state screen.
    let checked = GeneratorConfig::default();

    let mut group = c.benchmark_group("generate");

    for length in &LENGTHS {
        group.bench_with_input(BenchmarkId::new("unverified", length), length, |b, &length| {
            b.iter(|| {
                let bundle =
                    generate_with_config(black_box(length), EntropySource::SecurePrng, &unchecked)
                        .expect("generation should succeed");
                black_box(bundle);
            });
        });

        group.bench_with_input(BenchmarkId::new("verified", length), length, |b, &length| {
            b.iter(|| {
                let bundle =
                    generate_with_config(black_box(length), EntropySource::SecurePrng, &checked)
                        .expect("generation should succeed");
                black_box(bundle);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_source_fetch, bench_derivation, bench_generate);
criterion_main!(benches);
