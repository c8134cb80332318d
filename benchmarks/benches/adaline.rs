use adaline_rs::{AdalineConfig, AdalineGD, Backend, CpuBackend};
use benchmarks::{Blobs, Standardizer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const EPOCHS: usize = 20;

fn standardized_blobs(n_samples: usize, n_features: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let blobs = Blobs::generate(n_samples, n_features, 7);
    let x = Standardizer::fit(&blobs.features).transform(&blobs.features);
    (x, blobs.labels)
}

fn bench_fit_backend<B: Backend>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("fit/{name}"));
    for &(n_samples, n_features) in &[(100, 2), (1_000, 2), (1_000, 8), (10_000, 8)] {
        let (x, y) = standardized_blobs(n_samples, n_features);
        group.throughput(Throughput::Elements((n_samples * EPOCHS) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{n_samples}x{n_features}")),
            &(x, y),
            |b, (x, y)| {
                b.iter(|| {
                    let mut clf =
                        AdalineGD::<B>::from_config(AdalineConfig::new(0.0001, EPOCHS));
                    clf.fit(black_box(x), black_box(y)).expect("fit failed");
                    clf
                });
            },
        );
    }
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    bench_fit_backend::<CpuBackend>(c, "cpu");
    #[cfg(feature = "ndarray")]
    bench_fit_backend::<adaline_rs::backend::NdarrayBackend>(c, "ndarray");
}

fn bench_epochs(c: &mut Criterion) {
    let (x, y) = standardized_blobs(1_000, 4);
    let mut group = c.benchmark_group("fit_epochs");
    for epochs in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(epochs), &epochs, |b, &epochs| {
            b.iter(|| {
                let mut clf = AdalineGD::new(AdalineConfig::new(0.0001, epochs));
                clf.fit(&x, &y).expect("fit failed");
                clf
            });
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let (x, y) = standardized_blobs(10_000, 8);
    let mut clf = AdalineGD::new(AdalineConfig::new(0.0001, EPOCHS));
    clf.fit(&x, &y).expect("fit failed");

    let mut group = c.benchmark_group("predict");
    for n in [1, 100, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let batch = &x[..n];
            b.iter(|| clf.predict(black_box(batch)).expect("predict failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit, bench_epochs, bench_predict);
criterion_main!(benches);
