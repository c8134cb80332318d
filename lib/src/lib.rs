//! # adaline-rs
//!
//! An ADAptive LInear NEuron (Adaline) binary classifier trained by full-batch gradient
//! descent on the halved sum of squared errors, built on pluggable tensor backends.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: the typed model carries its training state in the type
//!   system (`Unfitted` vs `Fitted`), so predicting with an untrained model does not
//!   compile.
//! - **Training/Inference Separation**: fitted models hold only the weights; the update
//!   rule lives in separate components (loss, optimizer, trainer).
//! - **Backend Agnosticism**: the `Backend` trait lets the same model run on plain
//!   `Vec<f64>` kernels or on `ndarray`.
//! - **Fail fast on shapes**: mismatched or ragged inputs are reported as
//!   [`AdalineError`] before any state changes.
//!
//! ## Quick Start
//!
//! ```rust
//! use adaline_rs::{AdalineConfig, AdalineGD};
//!
//! let x = vec![
//!     vec![1.0, 1.0],
//!     vec![2.0, 1.0],
//!     vec![1.0, 2.0],
//!     vec![4.0, 5.0],
//!     vec![5.0, 4.0],
//!     vec![4.0, 4.0],
//! ];
//! let y = vec![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
//!
//! let mut clf = AdalineGD::new(AdalineConfig::new(0.0001, 20));
//! clf.fit(&x, &y)?;
//!
//! assert_eq!(clf.weights().unwrap().len(), 3);
//! let costs = clf.cost_history().unwrap();
//! assert_eq!(costs.len(), 20);
//! assert!(costs.improved());
//! # Ok::<(), adaline_rs::AdalineError>(())
//! ```
//!
//! The same training run, spelled out with the typed layer:
//!
//! ```rust
//! use adaline_rs::backend::CpuBackend;
//! use adaline_rs::dataset::InMemoryDataset;
//! use adaline_rs::loss::HalfSquaredError;
//! use adaline_rs::model::{Adaline, AdalineParams};
//! use adaline_rs::optimizer::GradientDescent;
//! use adaline_rs::trainer::Trainer;
//!
//! let dataset = InMemoryDataset::new(&[vec![0.0]], &[1.0])?;
//! type Gd = GradientDescent<CpuBackend>;
//! let trainer: Trainer<CpuBackend, HalfSquaredError, Gd, Adaline<CpuBackend>, AdalineParams<CpuBackend>> =
//!     Trainer::builder(HalfSquaredError, GradientDescent::new(0.5))
//!         .epochs(1)
//!         .build();
//!
//! let outcome = trainer.fit(Adaline::new(1), &dataset)?;
//! assert_eq!(outcome.model.params().to_weight_vector(), vec![0.5, 0.0]);
//! assert_eq!(outcome.cost_history.as_slice(), &[0.5]);
//! # Ok::<(), adaline_rs::AdalineError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `backend` — tensor abstractions and computation primitives
//! - `dataset` — shape-checked in-memory training data
//! - `model` — Adaline with type-state parameters
//! - `loss` — the halved squared-error cost and its gradient
//! - `optimizer` — the gradient-descent update rule
//! - `trainer` — the full-batch epoch loop and its cost history
//! - `classifier` — the stateful `fit` / `predict` front end
//! - `config` — training hyperparameters
//! - `metrics` — accuracy and error counts
//!
//! ## Logging
//!
//! Training emits records through the [`log`] facade: run summaries at `debug` and one
//! line per epoch at `trace`. Install any `log`-compatible logger to see them.

pub mod backend;

/// Stateful classifier front end.
pub mod classifier;

/// Training hyperparameters.
pub mod config;

/// Data loading utilities and dataset abstractions.
pub mod dataset;

/// Crate error type.
pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Classification metrics.
pub mod metrics;

/// Machine learning models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

/// High-level training loop orchestration.
pub mod trainer;

/// Re-export of core backend types for convenient usage.
pub use backend::{Backend, CpuBackend, ScalarOps, Tensor1D, Tensor2D};
pub use classifier::AdalineGD;
pub use config::AdalineConfig;
pub use error::{AdalineError, Result};
pub use trainer::CostHistory;
