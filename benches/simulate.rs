use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mirrorbox::{simulate, EdgeDescriptor, MirrorBox, Side};

fn benchmark_simulate_empty(c: &mut Criterion) {
    let mirror_box = MirrorBox::empty(26, 26).unwrap();
    let entries = mirror_box.entries();

    c.bench_function("simulate_empty_26x26", |b| {
        b.iter(|| {
            for &entry in &entries {
                black_box(simulate(&mirror_box, entry).unwrap());
            }
        })
    });
}

fn benchmark_simulate_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_density");
    for count in [0, 50, 200, 500] {
        let mut mirror_box = MirrorBox::empty(26, 26).unwrap();
        mirror_box.random_mirrors(count);
        let entry = EdgeDescriptor::new(Side::Left, 13);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &_count| {
            b.iter(|| black_box(simulate(&mirror_box, entry).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_simulate_empty, benchmark_simulate_density);
criterion_main!(benches);
