use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native 1D tensor representation (`B::Tensor1D`) and tags it with
/// the backend type. Used for feature weights, net inputs, errors and labels.
///
/// # Example
/// ```
/// use adaline_rs::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.len(), 3);
///
/// let y = x.scale(&Scalar::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a new 1D tensor from host values.
    pub fn new(data: Vec<f64>) -> Self {
        Self::from_raw(B::from_vec_1d(data))
    }

    /// Creates a 1D tensor filled with zeros.
    ///
    /// ```
    /// use adaline_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let zeros: Tensor1D<CpuBackend> = Tensor1D::zeros(4);
    /// assert_eq!(zeros.to_vec(), vec![0.0; 4]);
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self::from_raw(B::zeros_1d(len))
    }

    pub(crate) fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    /// Returns `true` when the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element-wise `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_raw(B::add_1d(&self.data, &other.data))
    }

    /// Element-wise `self - other`.
    ///
    /// ```
    /// use adaline_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let y = Tensor1D::<CpuBackend>::new(vec![1.0, -1.0]);
    /// let net = Tensor1D::<CpuBackend>::new(vec![0.25, 0.5]);
    /// assert_eq!(y.sub(&net).to_vec(), vec![0.75, -1.5]);
    /// ```
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    /// Element-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_raw(B::mul_1d(&self.data, &other.data))
    }

    /// Multiplies every element by `a`.
    pub fn scale(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::mul_scalar_1d(&self.data, &a.data))
    }

    /// Adds `a` to every element.
    pub fn add_scalar(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::add_scalar_1d(&self.data, &a.data))
    }

    /// Unit-step quantizer: `1.0` where the element is `>= threshold`, `-1.0` elsewhere.
    ///
    /// ```
    /// use adaline_rs::backend::{CpuBackend, Scalar, Tensor1D};
    ///
    /// let net = Tensor1D::<CpuBackend>::new(vec![-2.0, 0.0, 0.3]);
    /// assert_eq!(net.threshold(&Scalar::zero()).to_vec(), vec![-1.0, 1.0, 1.0]);
    /// ```
    pub fn threshold(&self, threshold: &Scalar<B>) -> Self {
        Self::from_raw(B::threshold_1d(&self.data, &threshold.data))
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Dot product `Σᵢ selfᵢ · otherᵢ`.
    ///
    /// ```
    /// use adaline_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).to_f64(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Scalar<B> {
        self.mul(other).sum()
    }

    /// Copies the tensor into a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    type T = Tensor1D<CpuBackend>;

    #[test]
    fn test_new_and_len() {
        let t = T::new(vec![1.0, 2.0]);
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
        assert!(T::new(vec![]).is_empty());
    }

    #[test]
    fn test_squared_error_via_dot() {
        let errors = T::new(vec![1.0, -2.0, 0.5]);
        // 1 + 4 + 0.25
        assert_eq!(errors.dot(&errors).to_f64(), 5.25);
    }

    #[test]
    fn test_add_scalar_and_add() {
        let t = T::new(vec![1.0, 2.0]).add_scalar(&Scalar::new(0.5));
        assert_eq!(t.to_vec(), vec![1.5, 2.5]);
        assert_eq!(t.add(&T::new(vec![-1.5, -2.5])).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(T::zeros(0).sum().to_f64(), 0.0);
    }
}
