use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use midbench::bench::middle_insertions;
use midbench::List;

fn bench_middle_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle_insert");
    group.sample_size(10);

    for n in [100usize, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("vector", n), n, |b, &n| {
            b.iter(|| {
                let mut v: Vec<i32> = Vec::new();
                middle_insertions(&mut v, black_box(n));
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("list", n), n, |b, &n| {
            b.iter(|| {
                let mut l: List<i32> = List::new();
                middle_insertions(&mut l, black_box(n));
                l
            })
        });
        group.bench_with_input(
            BenchmarkId::new("preallocated_vector", n),
            n,
            |b, &n| {
                b.iter(|| {
                    let mut v: Vec<i32> = Vec::with_capacity(n);
                    middle_insertions(&mut v, black_box(n));
                    v
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_middle_insert);
criterion_main!(benches);
