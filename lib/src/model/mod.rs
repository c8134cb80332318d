pub mod state;
pub use state::{Fitted, Unfitted};

pub mod adaline;
pub use adaline::{Adaline, AdalineModel, AdalineParams};

use crate::backend::{Backend, Scalar};

/// Training-time view of a model: forward pass, gradients, parameter updates.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    /// Computes the model output for a batch.
    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Gradients of the loss w.r.t. the parameters, given its gradient w.r.t. the output.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    /// Number of input features the model expects.
    fn input_dim(&self) -> usize;

    fn params(&self) -> &Self::Params;
    fn update_params(&mut self, new_params: &Self::Params);

    /// Consumes the trainable model and returns the inference-only one.
    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic over parameter sets, used by optimizers.
pub trait ParamOps<B: Backend>: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, scalar: Scalar<B>) -> Self;
}

/// Inference-time view of a trained model.
pub trait InferenceModel<B: Backend> {
    type InputSingle;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;
    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;
}
