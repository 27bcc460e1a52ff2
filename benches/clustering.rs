use criterion::{black_box, criterion_group, criterion_main, Criterion};
use denscan::cluster::{Clustering, Dbscan, Euclidean};
use rand::prelude::*;

fn blobs(rng: &mut StdRng, n: usize, d: usize, centers: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            let offset = (i % centers) as f64 * 10.0;
            (0..d).map(|_| offset + rng.random::<f64>()).collect()
        })
        .collect()
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let data = blobs(&mut rng, 1000, 16, 10);

    group.bench_function("fit_n1000_d16_blobs10", |b| {
        b.iter(|| {
            let model = Dbscan::new(2.0, 5);
            model.fit(black_box(&data), &Euclidean).unwrap();
        })
    });

    let dense: Vec<Vec<f32>> = data
        .iter()
        .map(|row| row.iter().map(|&x| x as f32).collect())
        .collect();

    group.bench_function("fit_predict_n1000_d16_blobs10", |b| {
        b.iter(|| {
            let model = Dbscan::new(2.0, 5);
            model.fit_predict(black_box(&dense)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
