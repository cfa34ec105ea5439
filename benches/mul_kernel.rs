//! Classical vs. Karatsuba crossover benchmark, scoped to this crate's
//! three inner loops (mirrors the spirit of the teacher's
//! `benches/polynomial_benchmarks.rs`, but narrowed to `mul_kernel`
//! rather than the whole CAS).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box as bb;
use zpoly::poly::mul_kernel::{classical_multiply, multiply, square, KernelConfig};
use zpoly::Modulus;

fn seeded_coeffs(len: usize, modulus: &Modulus, seed: u64) -> Vec<u64> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            modulus.reduce_u64(state)
        })
        .collect()
}

fn bench_classical_vs_karatsuba(c: &mut Criterion) {
    let modulus = Modulus::new(2147483647);
    let mut group = c.benchmark_group("multiply_classical_vs_karatsuba");
    for &degree in &[16usize, 64, 256, 1024, 4096] {
        let a = seeded_coeffs(degree, &modulus, 0x9E3779B97F4A7C15);
        let b = seeded_coeffs(degree, &modulus, 0xC2B2AE3D27D4EB4F);

        group.bench_with_input(BenchmarkId::new("classical", degree), &degree, |bencher, _| {
            bencher.iter(|| classical_multiply(bb(&a), bb(&b), bb(&modulus)))
        });
        group.bench_with_input(BenchmarkId::new("karatsuba", degree), &degree, |bencher, _| {
            bencher.iter(|| multiply(bb(&a), bb(&b), bb(&modulus)))
        });
    }
    group.finish();
}

fn bench_square(c: &mut Criterion) {
    let modulus = Modulus::new(2147483647);
    let mut group = c.benchmark_group("square");
    for &degree in &[16usize, 256, 1024, 4096] {
        let a = seeded_coeffs(degree, &modulus, 0xD1B54A32D192ED03);
        group.bench_with_input(BenchmarkId::new("karatsuba_square", degree), &degree, |bencher, _| {
            bencher.iter(|| square(bb(&a), bb(&modulus)))
        });
        group.bench_with_input(BenchmarkId::new("multiply_self", degree), &degree, |bencher, _| {
            bencher.iter(|| multiply(bb(&a), bb(&a), bb(&modulus)))
        });
    }
    group.finish();
}

fn bench_threshold_sensitivity(c: &mut Criterion) {
    let modulus = Modulus::new(97); // small prime: exercises the unsafe accumulation path
    let mut group = c.benchmark_group("threshold_sensitivity");
    let degree = 512usize;
    let a = seeded_coeffs(degree, &modulus, 0xA24BAED4963EE407);
    let b = seeded_coeffs(degree, &modulus, 0x9FB21C651E98DF25);

    for &unsafe_threshold in &[64usize, 256, 1024, 65536] {
        let config = KernelConfig {
            unsafe_threshold,
            safe_threshold: unsafe_threshold,
        };
        group.bench_with_input(
            BenchmarkId::new("unsafe_threshold", unsafe_threshold),
            &unsafe_threshold,
            |bencher, _| {
                bencher.iter(|| {
                    zpoly::poly::mul_kernel::multiply_with_config(bb(&a), bb(&b), bb(&modulus), bb(&config))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_classical_vs_karatsuba,
    bench_square,
    bench_threshold_sensitivity
);
criterion_main!(benches);
