use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_densities(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.002 - 9.0).collect();

    c.bench_function("landau_pdf_batch_10k", |b| {
        b.iter(|| black_box(lst_prob::landau::pdf_batch(&xs, 1.0, 1.0).unwrap()))
    });

    c.bench_function("landau_scaled_batch_10k", |b| {
        b.iter(|| black_box(lst_prob::landau::scaled_batch(&xs, 1.0, 1.0, 1.0).unwrap()))
    });

    let grid: Vec<f64> = (0..1_000).map(|i| (i as f64) * 0.02 - 9.0).collect();
    c.bench_function("langau_scaled_batch_1k", |b| {
        b.iter(|| black_box(lst_prob::langau::scaled_batch(&grid, 1.0, 1.0, 1.0, 1.0).unwrap()))
    });
}

criterion_group!(benches, bench_densities);
criterion_main!(benches);
