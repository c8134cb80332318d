use crate::backend::tensor2d::flatten_rows;
use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{AdalineError, Result};

/// A dataset held in host memory as one row-major feature buffer plus labels.
///
/// Construction enforces the shape invariants: as many labels as rows, at least one
/// row, at least one feature, every row of the same dimension. Label values are not
/// inspected; anything other than `±1.0` trains but yields a meaningless boundary.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    x: Vec<f64>,
    y: Vec<f64>,
    n_samples: usize,
    n_features: usize,
}

impl InMemoryDataset {
    /// Copies the rows into a single row-major buffer.
    pub fn new(x: &[Vec<f64>], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(AdalineError::LabelCountMismatch {
                samples: x.len(),
                labels: y.len(),
            });
        }
        let Some(first) = x.first() else {
            return Err(AdalineError::EmptyDataset);
        };
        let n_features = first.len();
        if n_features == 0 {
            return Err(AdalineError::NoFeatures);
        }
        let data = flatten_rows(x, n_features).map_err(|(row, got)| {
            AdalineError::RaggedFeatures {
                row,
                expected: n_features,
                got,
            }
        })?;
        Ok(Self {
            x: data,
            y: y.to_vec(),
            n_samples: x.len(),
            n_features,
        })
    }
}

impl Dataset for InMemoryDataset {
    fn len(&self) -> usize {
        self.n_samples
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn full_batch<B: Backend>(&self) -> (Tensor2D<B>, Tensor1D<B>) {
        let x_tensor = Tensor2D::<B>::new(self.x.clone(), self.n_samples, self.n_features);
        let y_tensor = Tensor1D::<B>::new(self.y.clone());
        (x_tensor, y_tensor)
    }
}
