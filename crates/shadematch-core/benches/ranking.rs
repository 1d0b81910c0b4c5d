//! Ranking Benchmarks
//!
//! Catalog scans at sizes on both sides of the parallel threshold, plus the
//! per-color conversions the scan is built from.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use shadematch_core::{
    CatalogEntry, LightingContext, RankOptions, Rgb8, analyze_color, hex_to_perceptual,
    rank_matches_with,
};

/// Generate a catalog spread over the skin-tone range
fn generate_catalog(count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let r = (255.0 - t * 150.0) as u8;
            let g = (220.0 - t * 160.0) as u8;
            let b = (180.0 - t * 150.0) as u8;
            let hex = Rgb8::new(r, g, b).to_hex();
            CatalogEntry::new("Bench", "Foundation", &format!("Shade {i}"), &hex)
        })
        .collect()
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("hex_to_perceptual", |b| {
        b.iter(|| hex_to_perceptual(black_box("#F1C27D")))
    });

    group.bench_function("analyze_color", |b| {
        b.iter(|| analyze_color(black_box(Rgb8::new(0xF1, 0xC2, 0x7D))))
    });

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_matches");
    let lighting = LightingContext::default();

    for size in [100, 1_000, 10_000, 100_000] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        let sequential = RankOptions {
            parallel_threshold: usize::MAX,
            ..RankOptions::default()
        };
        group.bench_with_input(BenchmarkId::new("sequential", size), &catalog, |b, catalog| {
            b.iter(|| rank_matches_with(black_box("#D9A066"), catalog, &lighting, 5, &sequential))
        });

        let parallel = RankOptions {
            parallel_threshold: 0,
            ..RankOptions::default()
        };
        group.bench_with_input(BenchmarkId::new("parallel", size), &catalog, |b, catalog| {
            b.iter(|| rank_matches_with(black_box("#D9A066"), catalog, &lighting, 5, &parallel))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_rank);
criterion_main!(benches);
