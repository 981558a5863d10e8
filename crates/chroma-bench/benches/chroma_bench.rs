//! Benchmarks for chroma-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chroma_color::{
    tone_map_to_sdr, ColorConversionConfig, ColorConverter, GamutMappingMethod, ToneMapOperator,
    PARALLEL_THRESHOLD,
};
use chroma_core::{ColorSpaceId, RgbColor};
use chroma_hdr::{detect, detect_metadata, CodecHint};
use chroma_primaries::{ColorSpaceRegistry, MatrixEngine};
use chroma_transfer::pq;

fn gradient(size: usize) -> Vec<RgbColor> {
    (0..size)
        .map(|i| {
            let t = i as f32 / size as f32;
            RgbColor::new(t, 1.0 - t, (t * 7.0).fract())
        })
        .collect()
}

/// Batch conversion on both sides of the parallel threshold.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let converter = ColorConverter::default();
    let wide = ColorConversionConfig::new(ColorSpaceId::Bt709, ColorSpaceId::Bt2020);
    let narrow = ColorConversionConfig::new(ColorSpaceId::Bt2020, ColorSpaceId::Bt709)
        .with_method(GamutMappingMethod::SaturationPreserving);

    for size in [256, PARALLEL_THRESHOLD, 65_536] {
        let colors = gradient(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bt709_to_bt2020", size), &colors, |b, v| {
            b.iter(|| converter.convert(black_box(v), &wide))
        });

        group.bench_with_input(BenchmarkId::new("bt2020_to_bt709", size), &colors, |b, v| {
            b.iter(|| converter.convert(black_box(v), &narrow))
        });
    }

    group.finish();
}

/// Matrix construction from the registry.
fn bench_matrix(c: &mut Criterion) {
    let engine = MatrixEngine::new(ColorSpaceRegistry::shared());

    c.bench_function("conversion_matrix", |b| {
        b.iter(|| {
            engine.conversion_matrix(
                black_box(ColorSpaceId::DciP3),
                black_box(ColorSpaceId::Bt2020),
            )
        })
    });
}

/// Tone curves over linear HDR values.
fn bench_tonemap(c: &mut Criterion) {
    let mut group = c.benchmark_group("tonemap");

    for size in [1000, 10_000, 100_000] {
        let colors: Vec<RgbColor> = (0..size)
            .map(|i| RgbColor::gray(pq::to_linear(i as f32 / size as f32)))
            .collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sdr_1000nits", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|&c| tone_map_to_sdr(black_box(c), 1000.0)).collect::<Vec<_>>())
        });

        for op in [ToneMapOperator::REINHARD, ToneMapOperator::Aces, ToneMapOperator::HABLE] {
            group.bench_with_input(BenchmarkId::new(op.name(), size), &colors, |b, v| {
                b.iter(|| {
                    let mut buf = v.clone();
                    op.apply(black_box(&mut buf));
                    buf
                })
            });
        }
    }

    group.finish();
}

/// Stream detection and full metadata parsing.
fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    let mut hdr10 = vec![0u8; 64];
    hdr10[..5].copy_from_slice(b"HDR10");
    hdr10[5] = 0x10;
    hdr10[6] = 0x09;
    hdr10[16..20].copy_from_slice(&10_000_000u32.to_be_bytes());
    hdr10[20..24].copy_from_slice(&50u32.to_be_bytes());
    hdr10[24..26].copy_from_slice(&1000u16.to_be_bytes());

    let sdr = vec![0u8; 4096];

    group.bench_function("hdr10_signature", |b| {
        b.iter(|| detect(black_box(&hdr10), CodecHint::Hevc))
    });
    group.bench_function("sdr_miss", |b| {
        b.iter(|| detect(black_box(&sdr), CodecHint::Hevc))
    });
    group.bench_function("hdr10_metadata", |b| {
        b.iter(|| detect_metadata(black_box(&hdr10), CodecHint::Hevc))
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_matrix, bench_tonemap, bench_detect);
criterion_main!(benches);
