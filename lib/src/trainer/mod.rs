use crate::{
    backend::{Backend, Tensor1D, Tensor2D},
    dataset::Dataset,
    error::{AdalineError, Result},
    loss::Loss,
    model::TrainableModel,
    optimizer::Optimizer,
};
use log::{debug, trace};
use std::marker::PhantomData;

mod history;
pub use history::CostHistory;

/// Epoch count used when the builder is not told otherwise.
pub const DEFAULT_EPOCHS: usize = 10;

/// Orchestrates full-batch gradient descent for a [`TrainableModel`].
///
/// Every epoch computes one forward pass over the whole dataset, records the cost of
/// that pass, and applies exactly one parameter update computed from it. The loop
/// always runs for the configured number of epochs; there is no convergence check.
///
/// Built via [`TrainerBuilder`]; immutable afterwards and reusable across models.
pub struct Trainer<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    pub(crate) epochs: usize,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for [`Trainer`].
///
/// Defaults:
/// - `epochs`: [`DEFAULT_EPOCHS`]
pub struct TrainerBuilder<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    epochs: usize,
    loss_fn: L,
    optimizer: O,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

impl<B, L, O, M, P> TrainerBuilder<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    pub fn new(loss_fn: L, optimizer: O) -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            loss_fn,
            optimizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }

    /// Number of full passes over the training set.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn build(self) -> Trainer<B, L, O, M, P> {
        Trainer {
            epochs: self.epochs,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }
}

/// A trained model together with the per-epoch costs that produced it.
#[derive(Debug, Clone)]
pub struct TrainingOutcome<F> {
    pub model: F,
    pub cost_history: CostHistory,
}

impl<B, L, O, M, P> Trainer<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B, Target = Tensor1D<B>, Prediction = Tensor1D<B>>,
    M: TrainableModel<B, Input = Tensor2D<B>, Prediction = Tensor1D<B>, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    /// Trains `model` on the whole of `dataset` for exactly `epochs` epochs.
    ///
    /// # Errors
    /// - [`AdalineError::EmptyDataset`] if the dataset has no samples,
    /// - [`AdalineError::FeatureMismatch`] if the model width differs from the dataset's.
    pub fn fit<D>(&self, mut model: M, dataset: &D) -> Result<TrainingOutcome<M::Output>>
    where
        D: Dataset,
    {
        // InMemoryDataset cannot be empty, but other Dataset impls can.
        if dataset.is_empty() {
            return Err(AdalineError::EmptyDataset);
        }
        if dataset.n_features() != model.input_dim() {
            return Err(AdalineError::FeatureMismatch {
                expected: model.input_dim(),
                got: dataset.n_features(),
            });
        }

        let (x, y) = dataset.full_batch::<B>();
        debug!(
            "fitting on {} samples x {} features for {} epochs",
            x.rows(),
            x.cols(),
            self.epochs
        );

        let mut cost_history = CostHistory::with_capacity(self.epochs);
        for epoch in 0..self.epochs {
            let output = model.forward(&x);
            let cost = self.loss_fn.loss(&output, &y).to_f64();
            let grad_output = self.loss_fn.grad_wrt_prediction(&output, &y);
            let grads = model.backward(&x, &grad_output);
            let new_params = self.optimizer.step(model.params(), &grads);
            model.update_params(&new_params);

            trace!("epoch {}: cost = {}", epoch, cost);
            cost_history.push(cost);
        }

        if let (Some(first), Some(last)) = (cost_history.first(), cost_history.last()) {
            debug!("training finished: cost {} -> {}", first, last);
        }

        Ok(TrainingOutcome {
            model: model.into_fitted(),
            cost_history,
        })
    }
}

impl<B, L, O, M, P> Trainer<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    /// Equivalent to `TrainerBuilder::new(...)`.
    pub fn builder(loss_fn: L, optimizer: O) -> TrainerBuilder<B, L, O, M, P> {
        TrainerBuilder::new(loss_fn, optimizer)
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }
}
