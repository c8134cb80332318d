//! Dataset abstractions for Adaline training.
//!
//! A dataset is a source of `(X, y)` pairs where `X` is a feature matrix of shape
//! `(n_samples, n_features)` and `y` is a label vector of shape `(n_samples,)`,
//! labels being `-1.0` or `+1.0`.
//!
//! Training is full-batch, so the only access pattern is loading the whole dataset
//! into backend tensors at once via [`Dataset::full_batch`].
//!
//! # Example
//!
//! ```rust
//! use adaline_rs::backend::CpuBackend;
//! use adaline_rs::dataset::{Dataset, InMemoryDataset};
//!
//! let x = vec![vec![1.0, 1.0], vec![4.0, 5.0]];
//! let y = vec![-1.0, 1.0];
//! let dataset = InMemoryDataset::new(&x, &y).unwrap();
//!
//! let (features, labels) = dataset.full_batch::<CpuBackend>();
//! assert_eq!(features.shape(), (2, 2));
//! assert_eq!(labels.to_vec(), vec![-1.0, 1.0]);
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};

pub mod memory;
pub use self::memory::InMemoryDataset;

/// Abstract interface for a labelled training set.
///
/// Implementors guarantee that every sample has [`n_features`](Dataset::n_features)
/// features and that the label count equals [`len`](Dataset::len).
///
/// # Example Implementation
///
/// ```rust
/// use adaline_rs::backend::{Backend, Tensor1D, Tensor2D};
/// use adaline_rs::dataset::Dataset;
///
/// /// Points on the diagonal, labelled by which side of `x = 0` they fall on.
/// struct Diagonal { n: usize }
///
/// impl Dataset for Diagonal {
///     fn len(&self) -> usize { self.n }
///     fn n_features(&self) -> usize { 1 }
///
///     fn full_batch<B: Backend>(&self) -> (Tensor2D<B>, Tensor1D<B>) {
///         let xs: Vec<f64> = (0..self.n).map(|i| i as f64 - self.n as f64 / 2.0).collect();
///         let ys = xs.iter().map(|&x| if x >= 0.0 { 1.0 } else { -1.0 }).collect();
///         (Tensor2D::new(xs, self.n, 1), Tensor1D::new(ys))
///     }
/// }
///
/// assert_eq!(Diagonal { n: 4 }.len(), 4);
/// ```
pub trait Dataset {
    /// Total number of samples.
    fn len(&self) -> usize;

    /// Dimension of every feature vector.
    fn n_features(&self) -> usize;

    /// Checks whether the dataset holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads every sample as one feature matrix and one label vector.
    ///
    /// Shapes are fixed when the dataset is built, so loading cannot fail.
    fn full_batch<B: Backend>(&self) -> (Tensor2D<B>, Tensor1D<B>);
}
