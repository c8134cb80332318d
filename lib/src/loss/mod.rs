use crate::backend::{Backend, Scalar, Tensor1D};

/// A differentiable loss over a batch of predictions.
///
/// - [`loss`](Loss::loss) gives the scalar cost recorded per epoch.
/// - [`grad_wrt_prediction`](Loss::grad_wrt_prediction) is what gets passed to the
///   model's `backward()`.
pub trait Loss<B: Backend> {
    type Prediction;
    type Target;

    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> Scalar<B>;

    /// Computes `∂L/∂pred`.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Halved sum of squared errors, the Adaline cost:
/// `J = ½ Σᵢ (targetᵢ − predᵢ)²`.
///
/// Gradient w.r.t. prediction: `∂J/∂pred = pred − target`. The sum is not averaged
/// over samples, so the learning rate multiplies the full batch gradient.
///
/// ```
/// use adaline_rs::backend::{CpuBackend, Tensor1D};
/// use adaline_rs::loss::{HalfSquaredError, Loss};
///
/// let pred = Tensor1D::<CpuBackend>::new(vec![0.0, 0.5]);
/// let target = Tensor1D::<CpuBackend>::new(vec![1.0, -1.0]);
/// // ½ (1² + 1.5²)
/// let cost = Loss::<CpuBackend>::loss(&HalfSquaredError, &pred, &target);
/// assert_eq!(cost.to_f64(), 1.625);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSquaredError;

impl<B: Backend> Loss<B> for HalfSquaredError {
    type Prediction = Tensor1D<B>;
    type Target = Tensor1D<B>;

    fn loss(&self, pred: &Self::Prediction, target: &Self::Target) -> Scalar<B> {
        let errors = target.sub(pred);
        errors.dot(&errors) * Scalar::new(0.5)
    }

    fn grad_wrt_prediction(&self, pred: &Self::Prediction, target: &Self::Target) -> Tensor1D<B> {
        pred.sub(target)
    }
}
