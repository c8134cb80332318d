//! Sweeps the learning rate on standardised synthetic blobs and reports, for each
//! rate, the cost trajectory, held-out accuracy and fit time.
//!
//! Rates that are too large make the un-averaged batch gradient diverge; the sweep
//! shows where that happens for a given sample count.

use adaline_rs::{metrics::accuracy, AdalineConfig, AdalineGD};
use benchmarks::{benchmark_with_warmup, Blobs, Standardizer};

const N_SAMPLES: usize = 1_000;
const N_FEATURES: usize = 4;
const EPOCHS: usize = 50;
const LEARNING_RATES: [f64; 6] = [1e-5, 1e-4, 5e-4, 1e-3, 5e-3, 1e-2];

fn main() -> adaline_rs::Result<()> {
    let (train, test) = Blobs::generate(N_SAMPLES, N_FEATURES, 42).split(0.8);
    let scaler = Standardizer::fit(&train.features);
    let train_x = scaler.transform(&train.features);
    let test_x = scaler.transform(&test.features);

    println!(
        "{} train / {} test samples, {} features, {} epochs",
        train.len(),
        test.len(),
        N_FEATURES,
        EPOCHS
    );
    println!(
        "{:>10} {:>14} {:>14} {:>10} {:>12}",
        "eta", "first cost", "last cost", "accuracy", "fit ms"
    );

    for eta in LEARNING_RATES {
        let config = AdalineConfig::new(eta, EPOCHS);
        let (fitted, stats) = benchmark_with_warmup(1, 5, || -> adaline_rs::Result<AdalineGD> {
            let mut clf = AdalineGD::new(config);
            clf.fit(&train_x, &train.labels)?;
            Ok(clf)
        });
        let Some(clf) = fitted.into_iter().next().transpose()? else {
            continue;
        };

        let costs = clf.cost_history().map(|h| (h.first(), h.last()));
        let (first, last) = costs.unwrap_or((None, None));
        let acc = accuracy(&test.labels, &clf.predict(&test_x)?)?;

        println!(
            "{:>10.0e} {:>14.6e} {:>14.6e} {:>10.4} {:>12.3}",
            eta,
            first.unwrap_or(f64::NAN),
            last.unwrap_or(f64::NAN),
            acc,
            stats.mean_ms
        );
    }

    Ok(())
}
