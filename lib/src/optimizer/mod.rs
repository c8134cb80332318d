use crate::backend::scalar::Scalar;
use crate::backend::Backend;
use crate::model::adaline::AdalineParams;
use crate::model::ParamOps;

/// Trait for gradient-based optimizers.
///
/// Optimizers turn the current parameters and the loss gradients into the next
/// parameters. The trainer owns the loop; the optimizer only owns the update rule.
///
/// # Type Parameters
/// * `B` — computation backend implementing [`Backend`]
/// * `P` — model parameters type (e.g., [`AdalineParams`])
pub trait Optimizer<B: Backend, P> {
    /// Returns the updated parameters without mutating the inputs.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Plain gradient descent: `θ ← θ − η · ∇J(θ)`.
///
/// Paired with [`HalfSquaredError`](crate::loss::HalfSquaredError) and the full batch,
/// this is the Adaline rule `w += η · Xᵀ(y − ŷ)`, `b += η · Σ(y − ŷ)`.
///
/// # Example
/// ```rust
/// use adaline_rs::backend::{CpuBackend, Scalar, Tensor1D};
/// use adaline_rs::model::AdalineParams;
/// use adaline_rs::optimizer::{GradientDescent, Optimizer};
///
/// let gd = GradientDescent::<CpuBackend>::new(0.5);
/// let params = AdalineParams::<CpuBackend>::zeros(2);
/// let grads = AdalineParams {
///     weights: Tensor1D::new(vec![2.0, -4.0]),
///     bias: Scalar::new(1.0),
/// };
/// let next = gd.step(&params, &grads);
/// assert_eq!(next.to_weight_vector(), vec![-0.5, -1.0, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct GradientDescent<B: Backend> {
    lr: Scalar<B>,
}

impl<B: Backend> GradientDescent<B> {
    /// Creates the optimizer. The learning rate is used as given.
    pub fn new(lr: f64) -> Self {
        Self {
            lr: Scalar::<B>::new(lr),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }
}

impl<B: Backend> Optimizer<B, AdalineParams<B>> for GradientDescent<B> {
    fn step(&self, params: &AdalineParams<B>, grads: &AdalineParams<B>) -> AdalineParams<B> {
        let neg_lr = Scalar::<B>::zero() - self.lr;
        params.add(&grads.scale(neg_lr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CpuBackend, Tensor1D};

    fn params(w: Vec<f64>, b: f64) -> AdalineParams<CpuBackend> {
        AdalineParams {
            weights: Tensor1D::new(w),
            bias: Scalar::new(b),
        }
    }

    #[test]
    fn test_learning_rate_accessor() {
        assert_eq!(GradientDescent::<CpuBackend>::new(0.0001).learning_rate(), 0.0001);
    }

    #[test]
    fn test_step_moves_against_gradient() {
        let gd = GradientDescent::<CpuBackend>::new(0.1);
        let next = gd.step(&params(vec![1.0, 1.0], 0.0), &params(vec![10.0, -10.0], 5.0));
        assert_eq!(next.to_weight_vector(), vec![-0.5, 0.0, 2.0]);
    }

    #[test]
    fn test_zero_gradient_is_fixed_point() {
        let gd = GradientDescent::<CpuBackend>::new(0.3);
        let p = params(vec![0.25, -0.75], 1.5);
        let next = gd.step(&p, &AdalineParams::zeros(2));
        assert_eq!(next.to_weight_vector(), p.to_weight_vector());
    }

    #[test]
    fn test_zero_learning_rate_keeps_params() {
        let gd = GradientDescent::<CpuBackend>::new(0.0);
        let p = params(vec![3.0], -1.0);
        let next = gd.step(&p, &params(vec![100.0], 100.0));
        assert_eq!(next.to_weight_vector(), vec![-1.0, 3.0]);
    }
}
