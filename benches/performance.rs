//! Performance benchmarks for fracture-split
//!
//! # Running Benchmarks
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! Run a specific benchmark group:
//! ```bash
//! cargo bench --bench performance detection
//! cargo bench --bench performance split_pipeline
//! ```
//!
//! View HTML reports:
//! ```bash
//! open target/criterion/report/index.html
//! ```
//!
//! # Scale Targets
//!
//! - 1K cells: Small test case
//! - 10K cells: Medium test case
//! - 100K cells: Large test case
//! - 1M cells: Target scale (should complete in <=30s)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fracture_split::fracture::{detect_fracture_faces, SplitOptions};
use std::collections::HashSet;

use synthetic_mesh::{calculate_grid_dimensions, generate_hex_grid};

/// Benchmark fracture face detection alone, at different scales.
fn benchmark_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    let scales = vec![
        ("1K", 1_000),
        ("10K", 10_000),
        ("100K", 100_000),
        // ("1M", 1_000_000),
    ];

    for (name, target_cells) in scales {
        let (nx, ny, nz) = calculate_grid_dimensions(target_cells);
        let actual_cells = nx * ny * nz;
        let mesh = generate_hex_grid(nx, ny, nz, 1.0);
        let values: HashSet<i64> = [1, 2].into_iter().collect();

        group.throughput(Throughput::Elements(actual_cells as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &mesh, |b, mesh| {
            b.iter(|| {
                let faces = detect_fracture_faces(black_box(mesh), "region", &values).unwrap();
                black_box(faces);
            });
        });
    }

    group.finish();
}

/// Benchmark the full split pipeline end to end.
fn benchmark_split_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_pipeline");
    group.sample_size(10);

    let scales = vec![
        ("1K", 1_000),
        ("10K", 10_000),
        // ("100K", 100_000),
    ];

    for (name, target_cells) in scales {
        let (nx, ny, nz) = calculate_grid_dimensions(target_cells);
        let actual_cells = nx * ny * nz;
        let mesh = generate_hex_grid(nx, ny, nz, 1.0);
        let options = SplitOptions::new("region", [1, 2].into_iter().collect());

        group.throughput(Throughput::Elements(actual_cells as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(mesh, options),
            |b, (mesh, options)| {
                b.iter(|| {
                    let result = fracture_split::split(black_box(mesh), black_box(options)).unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark for the 1M-cell target (separate group for a long-running test).
#[allow(dead_code)]
fn benchmark_1m_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M_target");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(120));

    let (nx, ny, nz) = calculate_grid_dimensions(1_000_000);
    let actual_cells = nx * ny * nz;

    println!("Generating mesh with {} cells ({}x{}x{})", actual_cells, nx, ny, nz);
    let mesh = generate_hex_grid(nx, ny, nz, 1.0);
    println!("Mesh generated with {} points, {} cells", mesh.num_points(), mesh.num_cells());
    let options = SplitOptions::new("region", [1, 2].into_iter().collect());

    group.throughput(Throughput::Elements(actual_cells as u64));
    group.bench_function("split_1M", |b| {
        b.iter(|| {
            let result = fracture_split::split(black_box(&mesh), black_box(&options)).unwrap();
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_detection, benchmark_split_pipeline);

criterion_group!(
    name = long_benches;
    config = Criterion::default();
    targets = benchmark_1m_target
);

criterion_main!(benches);
