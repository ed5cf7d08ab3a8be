//! Benchmarks for the huffer pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huffer::render::{write_png, PngCompression};
use huffer::sprites::{character, environment, monster};
use huffer::{generate, Palettes, Sink};

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    let palettes = Palettes::STANDARD;

    group.bench_function("characters", |b| {
        b.iter(|| character::generate(black_box(&palettes.character)).unwrap())
    });

    group.bench_function("monsters", |b| {
        b.iter(|| monster::generate(black_box(&palettes)).unwrap())
    });

    group.bench_function("environment", |b| {
        b.iter(|| environment::generate(black_box(&palettes)).unwrap())
    });

    group.bench_function("catalogue", |b| {
        b.iter(|| generate(black_box(&palettes)).unwrap())
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let dir = tempfile::tempdir().unwrap();
    let sprite = monster::ghost_float(&Palettes::STANDARD.ghost, 0).unwrap();
    let path = dir.path().join("ghost_float_0.png");

    group.bench_function("png_standard", |b| {
        b.iter(|| write_png(black_box(&sprite), &path, PngCompression::Standard).unwrap())
    });

    group.bench_function("png_optimized", |b| {
        b.iter(|| write_png(black_box(&sprite), &path, PngCompression::Optimized).unwrap())
    });

    group.finish();
}

// -- Full run benchmarks --

fn bench_sinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sinks");
    group.sample_size(10);

    let dir = tempfile::tempdir().unwrap();
    let catalogue = generate(&Palettes::STANDARD).unwrap();
    let archive = Sink::archive(dir.path().join("output"));
    let assets = Sink::game_assets(dir.path().join("assets"));
    archive.prepare().unwrap();
    assets.prepare().unwrap();

    group.bench_function("write_archive", |b| {
        b.iter(|| archive.write(black_box(&catalogue)).unwrap())
    });

    group.bench_function("write_game_assets", |b| {
        b.iter(|| assets.write(black_box(&catalogue)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_encoding, bench_sinks);
criterion_main!(benches);
