//! Measures the divisor sweep over a synthetic full-size number array at the budgets used by
//! the historical experiment runs.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::num::NonZero;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use divisor_bench::{IterationBudget, NUMBER_COUNT, NumberArray, run_sweep};
use new_zealand::nz;

const BUDGETS: [NonZero<u64>; 3] = [nz!(1_000_000), nz!(5_000_000), nz!(10_000_000)];

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    // Deterministic values spread over the same range as typical numbers.dat contents.
    let numbers = NumberArray::from(
        (0_u64..)
            .take(NUMBER_COUNT)
            .map(|index| {
                i32::try_from(index.wrapping_mul(2_654_435_761) % 1_000_000)
                    .expect("values below one million fit in i32")
            })
            .collect::<Vec<_>>(),
    );

    let mut group = c.benchmark_group("divisor_sweep");
    group.sample_size(10);

    for pairs in BUDGETS {
        let budget = IterationBudget::new(pairs);

        group.throughput(Throughput::Elements(pairs.get()));
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &budget, |b, &budget| {
            b.iter(|| run_sweep(black_box(&numbers), black_box(budget)));
        });
    }

    group.finish();
}
