use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use saikoro::{
    next_member_with_rng, next_string_with_rng, shuffle_with_rng, weighted_next_in_set_with_rng,
    weighted_next_with_rng,
};
use std::collections::HashSet;

fn bench_weighted_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_sequence");
    let sizes = [10, 100, 1_000];

    for &size in &sizes {
        let items: Vec<(u32, i32)> = (0..size).map(|i| (i, (i % 7 + 1) as i32)).collect();

        group.bench_function(format!("i32_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let pick = weighted_next_with_rng(black_box(&items), |&(_, w)| w, &mut rng);
                black_box(pick.ok());
            })
        });

        group.bench_function(format!("i64_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let pick =
                    weighted_next_with_rng(black_box(&items), |&(_, w)| i64::from(w), &mut rng);
                black_box(pick.ok());
            })
        });
    }
    group.finish();
}

fn bench_weighted_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_set");
    let sizes = [10, 100, 1_000];

    for &size in &sizes {
        let set: HashSet<(u32, i32)> = (0..size).map(|i| (i, (i % 7 + 1) as i32)).collect();

        group.bench_function(format!("weighted_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let pick = weighted_next_in_set_with_rng(black_box(&set), |&(_, w)| w, &mut rng);
                black_box(pick.ok());
            })
        });

        group.bench_function(format!("uniform_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                black_box(next_member_with_rng(black_box(&set), &mut rng).ok());
            })
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    let sizes = [10, 1_000, 100_000];

    for &size in &sizes {
        let mut v: Vec<u32> = (0..size).collect();
        group.bench_function(format!("vec_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                shuffle_with_rng(black_box(&mut v), &mut rng);
            })
        });
    }
    group.finish();
}

fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");
    let alphabet = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    for &length in &[8usize, 64, 512] {
        group.bench_function(format!("len{}", length), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                black_box(next_string_with_rng(alphabet, black_box(length), &mut rng).ok());
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_weighted_sequence,
    bench_weighted_set,
    bench_shuffle,
    bench_string
);
criterion_main!(benches);
