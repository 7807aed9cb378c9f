//! Criterion benchmarks for the generation pipeline.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use mtxgen::matrix::multiply::matmul_ikj;
use mtxgen::matrix::random::random_matrix;
use mtxgen::{FixtureConfig, generate};

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a = random_matrix(100, -2000, 2000, &mut rng);
    let b = random_matrix(100, -2000, 2000, &mut rng);

    c.bench_function("matmul_ikj_100", |bench| {
        bench.iter(|| {
            let mut out = vec![0i64; 100 * 100];
            matmul_ikj(black_box(a.as_slice()), black_box(b.as_slice()), &mut out, 100);
            out
        })
    });
}

fn bench_sampling(c: &mut Criterion) {
    c.bench_function("random_matrix_100", |bench| {
        let mut rng = StdRng::seed_from_u64(2);
        bench.iter(|| random_matrix(black_box(100), -2000, 2000, &mut rng))
    });
}

fn bench_full_trial(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let config = FixtureConfig {
        output_dir: dir.path().to_path_buf(),
        trial_count: 1,
        seed: Some(3),
        ..FixtureConfig::default()
    };

    c.bench_function("generate_single_trial_100", |bench| {
        bench.iter(|| generate(black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_multiply, bench_sampling, bench_full_trial);
criterion_main!(benches);
