//! Stateful `fit` / `predict` front end over the typed model layer.
//!
//! [`AdalineGD`] owns its hyperparameters and, once trained, the fitted model and the
//! cost recorded at every epoch. It accepts plain row vectors and validates their
//! shapes before touching any state.

use crate::{
    backend::{tensor2d::flatten_rows, Backend, CpuBackend, Tensor2D},
    config::AdalineConfig,
    dataset::{Dataset, InMemoryDataset},
    error::{AdalineError, Result},
    loss::HalfSquaredError,
    model::{Adaline, AdalineModel, AdalineParams, Fitted, InferenceModel},
    optimizer::GradientDescent,
    trainer::{CostHistory, Trainer, TrainingOutcome},
};
use log::debug;

type AdalineTrainer<B> =
    Trainer<B, HalfSquaredError, GradientDescent<B>, Adaline<B>, AdalineParams<B>>;

#[derive(Debug, Clone)]
enum State<B: Backend> {
    Untrained,
    Trained {
        model: AdalineModel<B, Fitted>,
        cost_history: CostHistory,
    },
}

/// Adaline binary classifier trained by full-batch gradient descent.
///
/// Labels are expected to be `-1.0` or `+1.0`. Training starts from zero weights,
/// runs exactly `epoch_count` epochs and records one cost per epoch. Prediction
/// returns `+1.0` when the net input is `>= 0.0` and `-1.0` otherwise.
///
/// ```
/// use adaline_rs::{AdalineConfig, AdalineGD};
///
/// let x = vec![
///     vec![1.0, 1.0],
///     vec![2.0, 1.0],
///     vec![1.0, 2.0],
///     vec![4.0, 5.0],
///     vec![5.0, 4.0],
///     vec![4.0, 4.0],
/// ];
/// let y = vec![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
///
/// let mut clf = AdalineGD::new(AdalineConfig::new(0.01, 50));
/// clf.fit(&x, &y)?;
///
/// assert_eq!(clf.predict(&x)?, y);
/// assert_eq!(clf.cost_history().map(|h| h.len()), Some(50));
/// # Ok::<(), adaline_rs::AdalineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdalineGD<B: Backend = CpuBackend> {
    config: AdalineConfig,
    state: State<B>,
}

impl<B: Backend> Default for AdalineGD<B> {
    fn default() -> Self {
        Self::from_config(AdalineConfig::default())
    }
}

impl AdalineGD<CpuBackend> {
    /// Creates an untrained classifier on the default backend.
    pub fn new(config: AdalineConfig) -> Self {
        Self::from_config(config)
    }
}

impl<B: Backend> AdalineGD<B> {
    /// Creates an untrained classifier on backend `B`.
    ///
    /// ```
    /// use adaline_rs::{AdalineConfig, AdalineGD, CpuBackend};
    ///
    /// let clf = AdalineGD::<CpuBackend>::from_config(AdalineConfig::default());
    /// assert!(!clf.is_fitted());
    /// ```
    pub fn from_config(config: AdalineConfig) -> Self {
        Self {
            config,
            state: State::Untrained,
        }
    }

    pub fn config(&self) -> &AdalineConfig {
        &self.config
    }

    /// Trains on `features` (N rows of D values) and `labels` (N values).
    ///
    /// Any previous training result is discarded: weights restart from zero and the
    /// cost history from empty. If the input is rejected the classifier is left exactly
    /// as it was.
    ///
    /// # Errors
    /// - [`AdalineError::LabelCountMismatch`] if `labels.len() != features.len()`,
    /// - [`AdalineError::EmptyDataset`] if there are no rows,
    /// - [`AdalineError::NoFeatures`] if the rows are empty,
    /// - [`AdalineError::RaggedFeatures`] if the rows differ in length.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[f64]) -> Result<&mut Self> {
        let dataset = InMemoryDataset::new(features, labels)?;
        debug!(
            "AdalineGD::fit: eta = {}, epochs = {}, {} x {}",
            self.config.learning_rate,
            self.config.epoch_count,
            dataset.len(),
            dataset.n_features()
        );

        let trainer: AdalineTrainer<B> = Trainer::builder(
            HalfSquaredError,
            GradientDescent::new(self.config.learning_rate),
        )
        .epochs(self.config.epoch_count)
        .build();
        let TrainingOutcome {
            model,
            cost_history,
        } = trainer.fit(Adaline::new(dataset.n_features()), &dataset)?;

        self.state = State::Trained {
            model,
            cost_history,
        };
        Ok(self)
    }

    /// Class labels (`+1.0` / `-1.0`) for each row of `features`.
    ///
    /// An empty slice yields an empty vector.
    ///
    /// # Errors
    /// - [`AdalineError::NotFitted`] before a successful `fit`,
    /// - [`AdalineError::FeatureMismatch`] if a row's length differs from the training
    ///   dimension.
    pub fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        let model = self.trained()?;
        let x = Self::to_matrix(model, features)?;
        Ok(model.predict_batch(&x).to_vec())
    }

    /// Raw linear scores `bias + w·x` for each row of `features`.
    pub fn net_input(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        let model = self.trained()?;
        let x = Self::to_matrix(model, features)?;
        Ok(model.decision_function_batch(&x).to_vec())
    }

    /// Linear activation; identical to [`net_input`](Self::net_input).
    pub fn activation(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        let model = self.trained()?;
        let x = Self::to_matrix(model, features)?;
        Ok(model.activation(&x).to_vec())
    }

    /// Learned weights, `D + 1` long with the bias at index 0.
    pub fn weights(&self) -> Option<Vec<f64>> {
        self.fitted_model()
            .map(|model| model.params().to_weight_vector())
    }

    /// Cost of every training epoch, in order.
    pub fn cost_history(&self) -> Option<&CostHistory> {
        match &self.state {
            State::Trained { cost_history, .. } => Some(cost_history),
            State::Untrained => None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, State::Trained { .. })
    }

    /// Feature dimension seen during training.
    pub fn n_features(&self) -> Option<usize> {
        self.fitted_model().map(AdalineModel::n_features)
    }

    /// The inference-only model produced by the last `fit`.
    pub fn fitted_model(&self) -> Option<&AdalineModel<B, Fitted>> {
        match &self.state {
            State::Trained { model, .. } => Some(model),
            State::Untrained => None,
        }
    }

    fn trained(&self) -> Result<&AdalineModel<B, Fitted>> {
        self.fitted_model().ok_or(AdalineError::NotFitted)
    }

    fn to_matrix(model: &AdalineModel<B, Fitted>, features: &[Vec<f64>]) -> Result<Tensor2D<B>> {
        let expected = model.n_features();
        let data = flatten_rows(features, expected)
            .map_err(|(_, got)| AdalineError::FeatureMismatch { expected, got })?;
        Ok(Tensor2D::new(data, features.len(), expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_points() -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![
                vec![1.0, 1.0],
                vec![2.0, 1.0],
                vec![1.0, 2.0],
                vec![4.0, 5.0],
                vec![5.0, 4.0],
                vec![4.0, 4.0],
            ],
            vec![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0],
        )
    }

    fn standardized(x: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let n = x.len() as f64;
        let d = x[0].len();
        let mut out = x.to_vec();
        for j in 0..d {
            let mean = x.iter().map(|r| r[j]).sum::<f64>() / n;
            let var = x.iter().map(|r| (r[j] - mean).powi(2)).sum::<f64>() / n;
            let std = var.sqrt();
            for row in out.iter_mut() {
                row[j] = (row[j] - mean) / std;
            }
        }
        out
    }

    fn trained(eta: f64, epochs: usize) -> AdalineGD {
        let (x, y) = six_points();
        let mut clf = AdalineGD::new(AdalineConfig::new(eta, epochs));
        clf.fit(&x, &y).unwrap();
        clf
    }

    // === construction ===

    #[test]
    fn test_new_is_untrained() {
        let clf = AdalineGD::<CpuBackend>::default();
        assert!(!clf.is_fitted());
        assert!(clf.weights().is_none());
        assert!(clf.cost_history().is_none());
        assert!(clf.n_features().is_none());
        assert_eq!(*clf.config(), AdalineConfig::default());
    }

    // === fit ===

    #[test]
    fn test_small_rate_scenario() {
        let clf = trained(0.0001, 20);
        let costs = clf.cost_history().unwrap();

        assert_eq!(clf.weights().unwrap().len(), 3);
        assert_eq!(costs.len(), 20);
        assert_eq!(costs.first(), Some(3.0));
        assert!(costs.as_slice()[19] < costs.as_slice()[0]);
        assert!(costs.as_slice().windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_separable_data_has_zero_training_error() {
        let (x, y) = six_points();
        let clf = trained(0.01, 50);
        assert_eq!(clf.predict(&x).unwrap(), y);
        assert!(clf.cost_history().unwrap().improved());
    }

    #[test]
    fn test_cost_decreases_on_standardized_data() {
        let (x, y) = six_points();
        let x = standardized(&x);
        let mut clf = AdalineGD::new(AdalineConfig::new(0.01, 30));
        clf.fit(&x, &y).unwrap();

        let costs = clf.cost_history().unwrap().as_slice();
        assert!(costs.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(clf.predict(&x).unwrap(), y);
    }

    #[test]
    fn test_single_sample_single_feature() {
        let mut clf = AdalineGD::new(AdalineConfig::new(0.5, 1));
        clf.fit(&[vec![0.0]], &[1.0]).unwrap();

        let w = clf.weights().unwrap();
        assert_eq!(w.len(), 2);
        assert!(w.iter().all(|v| v.is_finite()));
        assert_eq!(w, vec![0.5, 0.0]);
        assert_eq!(clf.cost_history().unwrap().as_slice(), &[0.5]);
    }

    #[test]
    fn test_history_length_matches_epoch_count() {
        for epochs in [0, 1, 10, 33] {
            let clf = trained(0.001, epochs);
            assert_eq!(clf.cost_history().unwrap().len(), epochs);
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (a, b) = (trained(0.01, 25), trained(0.01, 25));
        let bits = |w: &[f64]| w.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.weights().unwrap()), bits(&b.weights().unwrap()));
        assert_eq!(
            bits(a.cost_history().unwrap().as_slice()),
            bits(b.cost_history().unwrap().as_slice())
        );
    }

    #[test]
    fn test_fit_returns_self_for_chaining() {
        let (x, y) = six_points();
        let mut clf = AdalineGD::new(AdalineConfig::new(0.01, 50));
        let predictions = clf.fit(&x, &y).unwrap().predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn test_refit_starts_from_zero() {
        let (x, y) = six_points();
        let mut clf = trained(0.01, 25);
        let once = clf.weights().unwrap();

        clf.fit(&x, &y).unwrap();
        assert_eq!(clf.weights().unwrap(), once);
        assert_eq!(clf.cost_history().unwrap().len(), 25);

        clf.fit(&[vec![0.0]], &[1.0]).unwrap();
        assert_eq!(clf.n_features(), Some(1));
        assert_eq!(clf.weights().unwrap().len(), 2);
    }

    #[test]
    fn test_rejected_fit_keeps_previous_state() {
        let mut clf = trained(0.01, 25);
        let before = clf.weights().unwrap();

        let err = clf.fit(&[vec![1.0, 2.0]], &[1.0, -1.0]).unwrap_err();
        assert_eq!(
            err,
            AdalineError::LabelCountMismatch {
                samples: 1,
                labels: 2
            }
        );
        assert_eq!(clf.weights().unwrap(), before);
        assert_eq!(clf.cost_history().unwrap().len(), 25);
    }

    #[test]
    fn test_fit_shape_errors() {
        let mut clf = AdalineGD::<CpuBackend>::default();

        assert_eq!(clf.fit(&[], &[]).unwrap_err(), AdalineError::EmptyDataset);
        assert_eq!(
            clf.fit(&[vec![], vec![]], &[1.0, -1.0]).unwrap_err(),
            AdalineError::NoFeatures
        );
        let ragged = clf
            .fit(&[vec![1.0, 2.0], vec![3.0]], &[1.0, -1.0])
            .unwrap_err();
        assert!(matches!(ragged, AdalineError::RaggedFeatures { row: 1, .. }));
        assert!(ragged.is_shape_mismatch());
        assert!(!clf.is_fitted());
    }

    // === predict ===

    #[test]
    fn test_predict_before_fit() {
        let clf = AdalineGD::<CpuBackend>::default();
        assert_eq!(clf.predict(&[vec![1.0]]).unwrap_err(), AdalineError::NotFitted);
        assert_eq!(clf.net_input(&[vec![1.0]]).unwrap_err(), AdalineError::NotFitted);
    }

    #[test]
    fn test_predict_feature_mismatch() {
        let clf = trained(0.01, 5);
        let err = clf.predict(&[vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]).unwrap_err();
        assert_eq!(
            err,
            AdalineError::FeatureMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_predict_empty_input() {
        let clf = trained(0.01, 5);
        assert!(clf.predict(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_predict_is_idempotent() {
        let (x, _) = six_points();
        let clf = trained(0.0001, 20);
        let before = clf.weights().unwrap();
        let first = clf.predict(&x).unwrap();
        let second = clf.predict(&x).unwrap();
        assert_eq!(first, second);
        assert_eq!(clf.weights().unwrap(), before);
    }

    #[test]
    fn test_predict_outputs_are_labels() {
        let clf = trained(0.0001, 20);
        let out = clf.predict(&[vec![-10.0, 3.5], vec![0.0, 0.0], vec![100.0, 100.0]]).unwrap();
        assert!(out.iter().all(|&v| v == 1.0 || v == -1.0));
    }

    #[test]
    fn test_net_input_matches_weights() {
        let clf = trained(0.01, 10);
        let w = clf.weights().unwrap();
        let sample = vec![2.0, -3.0];
        let expected = w[0] + w[1] * sample[0] + w[2] * sample[1];

        let z = clf.net_input(&[sample.clone()]).unwrap();
        assert!((z[0] - expected).abs() < 1e-12);
        assert_eq!(clf.activation(&[sample]).unwrap(), z);
    }

    #[test]
    fn test_zero_score_predicts_positive() {
        let clf = trained(0.01, 0);
        assert_eq!(clf.predict(&[vec![3.0, -7.0]]).unwrap(), vec![1.0]);
    }
}
