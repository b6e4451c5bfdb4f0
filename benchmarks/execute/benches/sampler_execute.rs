use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use testprog_core::{sampler::SAMPLE_LEN, MatrixSampler, Workload};

fn benchmark_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");
    // One full pass over the grid, then a bound that wraps the offset once.
    for bound in [SAMPLE_LEN as u32, SAMPLE_LEN as u32 + 1] {
        group.throughput(Throughput::Elements(bound as u64));
        group.bench_with_input(BenchmarkId::new("execute", bound), &bound, |b, &bound| {
            b.iter(|| MatrixSampler.run(black_box(bound)))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = benchmark_function
}
criterion_main!(benches);
