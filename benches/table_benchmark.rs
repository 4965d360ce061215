//! Benchmark tests for table construction and lookup
//!
//! These benchmarks measure a full registry build and the hot lookups a
//! decoder performs per frame.

use atrac9_tables::huffman::{CodebookDesc, HuffmanCodebook, Signedness};
use atrac9_tables::mdct::{imdct_window, mdct_window};
use atrac9_tables::{tables, Atrac9Tables, BuildConfig, SpectrumFamily, StandardGradientCurves};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_registry_build(c: &mut Criterion) {
    let config = BuildConfig::new().with_log_summary(false);

    c.bench_function("registry_build", |b| {
        b.iter(|| {
            let tables = Atrac9Tables::build_with(black_box(&config), &StandardGradientCurves).unwrap();
            black_box(tables);
        })
    });
}

fn benchmark_codebook_from_lengths(c: &mut Criterion) {
    let desc = CodebookDesc::new("bench", 2, Signedness::Signed);
    let lengths = [8u8; 256];

    c.bench_function("codebook_from_lengths_256", |b| {
        b.iter(|| {
            let book = HuffmanCodebook::from_lengths(black_box(&desc), black_box(&lengths)).unwrap();
            black_box(book);
        })
    });
}

fn benchmark_windows(c: &mut Criterion) {
    c.bench_function("mdct_window_256", |b| {
        b.iter(|| black_box(mdct_window(black_box(8)).unwrap()))
    });
    c.bench_function("imdct_window_256", |b| {
        b.iter(|| black_box(imdct_window(black_box(8)).unwrap()))
    });
}

fn benchmark_symbol_decode(c: &mut Criterion) {
    let book = tables().spectrum_codebook(SpectrumFamily::A, 2, 3).unwrap();
    let windows: Vec<u32> = (0..1024u32).map(|i| i.wrapping_mul(2654435761) >> 24).collect();

    c.bench_function("resolve_and_unpack", |b| {
        b.iter(|| {
            let mut sum = 0i32;
            for &window in &windows {
                let entry = book.resolve(black_box(window)).unwrap();
                sum += book.values(entry.symbol as usize).unwrap().as_slice().iter().sum::<i32>();
            }
            black_box(sum);
        })
    });
}

criterion_group!(
    benches,
    benchmark_registry_build,
    benchmark_codebook_from_lengths,
    benchmark_windows,
    benchmark_symbol_decode
);
criterion_main!(benches);
