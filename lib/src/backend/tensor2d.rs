use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Row-major copy of `rows`, every one of which must hold `cols` values.
///
/// On failure returns `(index, len)` of the first row of another length, leaving the
/// caller to pick the error that fits its context.
pub(crate) fn flatten_rows(rows: &[Vec<f64>], cols: usize) -> Result<Vec<f64>, (usize, usize)> {
    let mut data = Vec::with_capacity(rows.len() * cols);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err((i, row.len()));
        }
        data.extend_from_slice(row);
    }
    Ok(data)
}

/// Backend-typed 2D tensor holding a feature matrix (one sample per row).
#[derive(Clone, Debug)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Creates a matrix from a row-major buffer.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    /// Number of samples.
    pub fn rows(&self) -> usize {
        self.shape().0
    }

    /// Number of features per sample.
    pub fn cols(&self) -> usize {
        self.shape().1
    }

    /// Matrix-vector product `self · v`.
    pub fn dot(&self, v: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec(&self.data, &v.data))
    }

    /// Transposed matrix-vector product `selfᵀ · v`.
    pub fn tdot(&self, v: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec_transposed(&self.data, &v.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    type M = Tensor2D<CpuBackend>;

    #[test]
    fn test_flatten_rows_is_row_major() {
        let data = flatten_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]], 2).unwrap();
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let x = M::new(data, 3, 2);
        assert_eq!(x.shape(), (3, 2));
        assert_eq!(x.rows(), 3);
        assert_eq!(x.cols(), 2);
    }

    #[test]
    fn test_flatten_rows_empty() {
        assert!(flatten_rows(&[], 4).unwrap().is_empty());
        assert_eq!(M::new(Vec::new(), 0, 4).shape(), (0, 4));
    }

    #[test]
    fn test_flatten_rows_reports_first_offending_row() {
        let err = flatten_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0], vec![]], 2);
        assert_eq!(err, Err((2, 1)));
    }

    #[test]
    fn test_dot_and_tdot() {
        let x = M::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let v = Tensor1D::<CpuBackend>::new(vec![0.5, 0.25]);
        // [[1, 2], [3, 4]] @ [0.5, 0.25]
        assert_eq!(x.dot(&v).to_vec(), vec![1.0, 2.5]);
        // [[1, 3], [2, 4]] @ [0.5, 0.25]
        assert_eq!(x.tdot(&v).to_vec(), vec![1.25, 2.0]);
    }
}
