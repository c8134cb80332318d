//! Metrics for evaluating classifier predictions.
//!
//! Labels are compared with exact equality, which is sound for the `±1.0` values the
//! classifier emits.

use crate::error::{AdalineError, Result};

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(AdalineError::LabelCountMismatch {
            samples: y_true.len(),
            labels: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(AdalineError::EmptyDataset);
    }
    Ok(())
}

/// Number of positions where the predicted label differs from the true one.
///
/// # Errors
/// [`AdalineError::LabelCountMismatch`] on differing lengths,
/// [`AdalineError::EmptyDataset`] on empty input.
pub fn misclassified(y_true: &[f64], y_pred: &[f64]) -> Result<usize> {
    check_lengths(y_true, y_pred)?;
    Ok(y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t != p)
        .count())
}

/// Fraction of predictions equal to the true label, in `[0.0, 1.0]`.
///
/// ```
/// use adaline_rs::metrics::accuracy;
///
/// let acc = accuracy(&[1.0, -1.0, 1.0, 1.0], &[1.0, -1.0, -1.0, 1.0]).unwrap();
/// assert_eq!(acc, 0.75);
/// ```
pub fn accuracy(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    let wrong = misclassified(y_true, y_pred)?;
    Ok((y_true.len() - wrong) as f64 / y_true.len() as f64)
}
