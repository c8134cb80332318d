//! # Backend Abstraction
//!
//! This module provides a trait-based abstraction over the dense linear-algebra
//! primitives the Adaline training loop needs, so the same model and trainer code
//! runs on a pure-Rust implementation or on top of `ndarray`.
//!
//! ## Design Philosophy
//!
//! - **Minimal trait surface**: only the operations used by training and inference
//!   are exposed (matrix-vector products, element-wise arithmetic, reductions and
//!   thresholding).
//! - **Zero-cost generics**: backend selection happens at compile time via type
//!   parameters, avoiding runtime dispatch.
//! - **Type-safe tensor handling**: each backend defines its own storage types, and the
//!   [`Scalar`], [`Tensor1D`] and [`Tensor2D`] wrappers tag values with their backend so
//!   they cannot be mixed.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Use Case                           |
//! |------------------|-----------|------------------------------------|
//! | `CpuBackend`     | always on | Default, explicit loops over `Vec` |
//! | `NdarrayBackend` | `ndarray` | Interop with the `ndarray` crate   |
//!
//! ## Example
//!
//! ```rust
//! use adaline_rs::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor2D<CpuBackend> = Tensor2D::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
//! let w: Tensor1D<CpuBackend> = Tensor1D::new(vec![0.5, -0.5]);
//!
//! // [[1, 2], [3, 4]] @ [0.5, -0.5] = [-0.5, -0.5]
//! assert_eq!(x.dot(&w).to_vec(), vec![-0.5, -0.5]);
//! ```

pub mod cpu;
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate for ecosystem interoperability.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

use std::fmt::Debug;

/// Abstraction over tensor storage and the numeric kernels used by Adaline.
///
/// Implementations provide concrete tensor types while the rest of the crate only
/// talks to this trait (usually through the [`Tensor1D`] / [`Tensor2D`] wrappers).
///
/// # Shape checking
///
/// Binary operations and matrix-vector products assume compatible shapes. The CPU
/// backend asserts on mismatch, `ndarray` panics on its own. Callers inside this crate
/// validate shapes before reaching the backend, so a panic here indicates a bug.
///
/// # Example Implementation Sketch
///
/// ```ignore
/// use adaline_rs::backend::Backend;
///
/// #[derive(Clone, Copy, Debug)]
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     type Scalar = f64;
///     type Tensor1D = Vec<f64>;
///     type Tensor2D = MyMatrix;
///     // ... implement all required methods
/// }
/// ```
pub trait Backend: Clone + Copy + Debug + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Debug + Send + Sync;

    /// Two-dimensional tensor type (row-major semantics).
    type Tensor2D: Clone + Debug + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations (1D) ---

    /// Element-wise addition of two 1D tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction `a - b`.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two 1D tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor (bias broadcast).
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Maps every element to `1.0` when it is `>= threshold`, else `-1.0`.
    fn threshold_1d(t: &Self::Tensor1D, threshold: &Self::Scalar) -> Self::Tensor1D;

    // --- Reductions ---

    /// Computes the sum of all elements in a 1D tensor.
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    // --- Scalars and data access ---

    /// Creates a backend-specific scalar from an f64 value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    /// Copies a 1D tensor into a host `Vec<f64>`.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Returns the shape of a 2D tensor as `(rows, cols)`.
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    // --- Linear algebra ---

    /// Matrix-vector multiplication `A · x`, `(m × n) · (n,) -> (m,)`.
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Transposed matrix-vector multiplication `Aᵀ · x`, `(m × n)ᵀ · (m,) -> (n,)`.
    ///
    /// # Panics
    /// If `A.rows() != x.len()`.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;
}
