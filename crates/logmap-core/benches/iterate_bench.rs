use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};
use logmap_core::iterate;

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for &steps in &[100i64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &n| {
            b.iter(|| {
                let o = iterate(n, black_box(0.4), black_box(0.6), black_box(3.9)).unwrap();
                black_box(o);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
