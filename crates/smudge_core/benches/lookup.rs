//! Benchmarks for code lookups.
//!
//! Hosts re-request the same code many times per tick, so the slot hit is the
//! path that matters most; map hits and cold generation are measured for
//! comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use smudge_core::generator::generate_full;
use smudge_core::{CodeConfig, CodeContext, CodeEngine, EntityId};

const SEED: u32 = 42;

fn config() -> CodeConfig {
    CodeConfig::new(5, 26, 2, 4).expect("valid config")
}

/// Same key every call: the bursty per-tick pattern.
fn bench_repeated_partial(c: &mut Criterion) {
    let mut engine = CodeEngine::new(config(), SEED);
    let entity = EntityId::new(7);
    engine.partial_code(entity, "ev-1");

    c.bench_function("partial_code_slot_hit", |b| {
        b.iter(|| {
            black_box(engine.partial_code(black_box(entity), black_box("ev-1")).len());
        });
    });
}

/// Alternating keys defeat the slot and fall through to the map.
fn bench_alternating_partial(c: &mut Criterion) {
    let mut engine = CodeEngine::new(config(), SEED);
    let (a, b_entity) = (EntityId::new(7), EntityId::new(8));
    engine.partial_code(a, "ev-1");
    engine.partial_code(b_entity, "ev-1");

    c.bench_function("partial_code_map_hit", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let entity = if flip { a } else { b_entity };
            black_box(engine.partial_code(entity, "ev-1").len());
        });
    });
}

/// Uncached generation across code lengths.
fn bench_generate_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_full");
    for length in [5usize, 16, 64] {
        let ctx = CodeContext::new(
            CodeConfig::new(length, 26, 0, 0).expect("valid config"),
            SEED,
        );
        group.bench_with_input(BenchmarkId::from_parameter(length), &ctx, |b, ctx| {
            b.iter(|| generate_full(ctx, black_box(EntityId::new(7))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_repeated_partial,
    bench_alternating_partial,
    bench_generate_full
);
criterion_main!(benches);
