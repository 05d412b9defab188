use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sparq_core::{BitRange, FixedValueGreaterThan};
use sparq_state::{grover_iteration, SparseRegister};

fn uniform_register(search_bits: usize) -> SparseRegister {
    let mut reg = SparseRegister::new(search_bits).unwrap();
    reg.hadamard(0, search_bits).unwrap();
    reg
}

fn bench_grover_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover_iteration");

    for search_bits in [2usize, 4, 6, 8].iter() {
        let threshold = (1u64 << search_bits) - 2;
        let oracle = FixedValueGreaterThan::new(threshold);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_bits", search_bits)),
            search_bits,
            |b, &search_bits| {
                let reg = uniform_register(search_bits);
                b.iter(|| {
                    let mut reg_copy = reg.clone();
                    grover_iteration(
                        black_box(&mut reg_copy),
                        &oracle,
                        BitRange::new(0, search_bits),
                        &[],
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_partial_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_measurement");

    for search_bits in [4usize, 8, 10].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_bits", search_bits)),
            search_bits,
            |b, &search_bits| {
                let reg = uniform_register(search_bits);
                let mut rng = StdRng::seed_from_u64(42);
                let half = search_bits / 2;
                b.iter(|| {
                    let mut reg_copy = reg.clone();
                    reg_copy.measure(black_box(0), half, &mut rng).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_grover_iteration, bench_partial_measurement);
criterion_main!(benches);
