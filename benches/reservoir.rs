use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reservoir::Reservoir;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir_sample");
    let n = 100_000u64;
    group.throughput(Throughput::Elements(n));

    for capacity in [10usize, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut reservoir = Reservoir::with_seed(capacity, 42).unwrap();
                    reservoir.sample(black_box(0..n), None);
                    black_box(reservoir.seen())
                });
            },
        );
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir_add");
    group.throughput(Throughput::Elements(1));

    group.bench_function("full_buffer", |b| {
        let mut reservoir = Reservoir::with_seed(100, 7).unwrap();
        reservoir.sample(0..100u64, None);
        let mut i = 100u64;
        b.iter(|| {
            reservoir.add(black_box(i));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_resume(c: &mut Criterion) {
    c.bench_function("reservoir_resume_10_chunks", |b| {
        b.iter(|| {
            let mut reservoir = Reservoir::new(64).unwrap();
            reservoir.sample(0..10_000u64, Some(1));
            for chunk in 1..10u64 {
                reservoir.sample(chunk * 10_000..(chunk + 1) * 10_000, None);
            }
            black_box(reservoir.samples().len())
        });
    });
}

criterion_group!(benches, bench_sample, bench_add, bench_resume);
criterion_main!(benches);
