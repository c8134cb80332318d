//! The ADAptive LInear NEuron.
//!
//! Adaline scores a sample with the net input `z = w·x + b`, trains on the identity
//! activation `φ(z) = z`, and classifies with a unit-step quantizer on top of it
//! (`+1` when `z >= 0`, `-1` otherwise). Training the continuous activation rather
//! than the quantized output is what separates it from the perceptron.
//!
//! Two type states share one struct:
//! - [`Adaline`] = `AdalineModel<B, Unfitted>` implements [`TrainableModel`].
//! - `AdalineModel<B, Fitted>` implements [`InferenceModel`] and has no training
//!   hyperparameters.
pub use crate::backend::scalar::{Scalar, ScalarOps};
pub use crate::backend::tensor1d::Tensor1D;
pub use crate::backend::tensor2d::Tensor2D;
pub use crate::backend::Backend;
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use std::marker::PhantomData;

/// Trainable parameters: feature weights and bias.
///
/// Also used as the gradient type, since gradients have the same shape.
#[derive(Clone, Debug)]
pub struct AdalineParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: Scalar<B>,
}

impl<B: Backend> AdalineParams<B> {
    /// All-zero parameters for `n_features` inputs.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Tensor1D::zeros(n_features),
            bias: Scalar::zero(),
        }
    }

    /// Number of feature weights (excluding the bias).
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Flat `D + 1` view with the bias at index 0.
    ///
    /// ```
    /// use adaline_rs::backend::{CpuBackend, Scalar, Tensor1D};
    /// use adaline_rs::model::AdalineParams;
    ///
    /// let params = AdalineParams::<CpuBackend> {
    ///     weights: Tensor1D::new(vec![0.5, -0.25]),
    ///     bias: Scalar::new(1.0),
    /// };
    /// assert_eq!(params.to_weight_vector(), vec![1.0, 0.5, -0.25]);
    /// ```
    pub fn to_weight_vector(&self) -> Vec<f64> {
        let mut w = Vec::with_capacity(self.n_features() + 1);
        w.push(self.bias.to_f64());
        w.extend(self.weights.to_vec());
        w
    }
}

impl<B: Backend> ParamOps<B> for AdalineParams<B> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: self.weights.add(&other.weights),
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, scalar: Scalar<B>) -> Self {
        Self {
            weights: self.weights.scale(&scalar),
            bias: self.bias * scalar,
        }
    }
}

/// An Adaline neuron with its training state encoded at the type level.
///
/// Calling `predict` on an untrained model does not compile:
///
/// ```compile_fail
/// use adaline_rs::backend::{CpuBackend, Tensor1D};
/// use adaline_rs::model::{Adaline, InferenceModel};
///
/// let model = Adaline::<CpuBackend>::new(2);
/// model.predict(&Tensor1D::new(vec![1.0, 2.0]));
/// ```
#[derive(Clone, Debug)]
pub struct AdalineModel<B: Backend, S> {
    params: AdalineParams<B>,
    _state: PhantomData<S>,
}

impl<B: Backend, S> AdalineModel<B, S> {
    /// Net input `X·w + b` for every row of `x`.
    pub fn net_input(&self, x: &Tensor2D<B>) -> Tensor1D<B> {
        x.dot(&self.params.weights).add_scalar(&self.params.bias)
    }

    /// Linear activation. Identity on the net input.
    pub fn activation(&self, x: &Tensor2D<B>) -> Tensor1D<B> {
        self.net_input(x)
    }

    pub fn n_features(&self) -> usize {
        self.params.n_features()
    }
}

impl<B: Backend> AdalineModel<B, Fitted> {
    /// Wraps trained parameters.
    pub fn new(params: AdalineParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> &AdalineParams<B> {
        &self.params
    }

    /// Raw score `w·x + b` for one sample.
    pub fn decision_function(&self, x: &Tensor1D<B>) -> Scalar<B> {
        self.params.weights.dot(x) + self.params.bias
    }

    /// Raw scores for every row of `x`.
    pub fn decision_function_batch(&self, x: &Tensor2D<B>) -> Tensor1D<B> {
        self.net_input(x)
    }
}

/// Classification: `+1` when the net input is `>= 0.0`, `-1` otherwise.
///
/// # Panics
/// Inputs are not shape-checked here. A sample whose length differs from
/// [`n_features`](AdalineModel::n_features), or a batch with that many columns, trips
/// the backend's length assertion. [`AdalineGD`](crate::classifier::AdalineGD) checks
/// rows first and reports [`FeatureMismatch`](crate::error::AdalineError::FeatureMismatch).
impl<B: Backend> InferenceModel<B> for AdalineModel<B, Fitted> {
    type InputSingle = Tensor1D<B>;
    type InputBatch = Tensor2D<B>;
    type OutputSingle = Scalar<B>;
    type OutputBatch = Tensor1D<B>;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle {
        let z = self.decision_function(input).to_f64();
        Scalar::new(if z >= 0.0 { 1.0 } else { -1.0 })
    }

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch {
        self.activation(input).threshold(&Scalar::zero())
    }
}

/// Forward pass: `X·w + b`.
/// Backward pass: `∇w = Xᵀ·g`, `∇b = Σ g`.
impl<B: Backend> TrainableModel<B> for AdalineModel<B, Unfitted> {
    type Params = AdalineParams<B>;
    type Gradients = AdalineParams<B>;
    type Prediction = Tensor1D<B>;
    type Input = Tensor2D<B>;
    type Output = AdalineModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        self.activation(x)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        AdalineParams {
            weights: x.tdot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn input_dim(&self) -> usize {
        self.n_features()
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn into_fitted(self) -> AdalineModel<B, Fitted> {
        AdalineModel::<B, Fitted>::new(self.params)
    }
}

/// An untrained Adaline neuron.
pub type Adaline<B> = AdalineModel<B, Unfitted>;

impl<B: Backend> Adaline<B> {
    /// Zero-initialised weights and bias for `n_features` inputs.
    pub fn new(n_features: usize) -> Self {
        Self::from_params(AdalineParams::zeros(n_features))
    }

    /// Starts from explicit parameters.
    pub fn from_params(params: AdalineParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}
