//! Synthetic two-class data for timing and learning-rate sweeps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two linearly separable Gaussian-free blobs with labels `-1.0` / `+1.0`.
///
/// Class `-1` is centred at `-1.5` on every axis, class `+1` at `+1.5`, each coordinate
/// jittered uniformly in `[-1, 1)`. The blobs are separated by the hyperplane
/// `Σ xⱼ = 0`.
#[derive(Debug, Clone)]
pub struct Blobs {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl Blobs {
    /// Generates `n_samples` rows of `n_features` values, alternating classes.
    pub fn generate(n_samples: usize, n_features: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut features = Vec::with_capacity(n_samples);
        let mut labels = Vec::with_capacity(n_samples);

        for i in 0..n_samples {
            let label = if i % 2 == 0 { -1.0 } else { 1.0 };
            let row = (0..n_features)
                .map(|_| 1.5 * label + rng.gen_range(-1.0..1.0))
                .collect();
            features.push(row);
            labels.push(label);
        }

        Self { features, labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Splits off the first `train_fraction` of rows for training.
    pub fn split(&self, train_fraction: f64) -> (Blobs, Blobs) {
        let n_train = (self.len() as f64 * train_fraction) as usize;
        let train = Blobs {
            features: self.features[..n_train].to_vec(),
            labels: self.labels[..n_train].to_vec(),
        };
        let test = Blobs {
            features: self.features[n_train..].to_vec(),
            labels: self.labels[n_train..].to_vec(),
        };
        (train, test)
    }
}

/// Per-column z-score statistics fitted on one set of rows.
#[derive(Debug, Clone)]
pub struct Standardizer {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl Standardizer {
    /// Population mean and standard deviation of each column. Constant columns get a
    /// standard deviation of `1.0`.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let n = rows.len() as f64;
        let d = rows.first().map_or(0, Vec::len);
        let mut means = vec![0.0; d];
        let mut stds = vec![0.0; d];

        for j in 0..d {
            means[j] = rows.iter().map(|r| r[j]).sum::<f64>() / n;
            let var = rows.iter().map(|r| (r[j] - means[j]).powi(2)).sum::<f64>() / n;
            let std = var.sqrt();
            stds[j] = if std > 1e-12 { std } else { 1.0 };
        }

        Self { means, stds }
    }

    pub fn transform(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter()
            .map(|r| {
                r.iter()
                    .zip(self.means.iter().zip(&self.stds))
                    .map(|(x, (m, s))| (x - m) / s)
                    .collect()
            })
            .collect()
    }
}
