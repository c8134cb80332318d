/// A marker type indicating that a model is **not yet trained**.
///
/// Used in generic parameters (e.g. `AdalineModel<B, Unfitted>`) to enforce at compile
/// time that:
/// - training methods (like [`Trainer::fit`](crate::trainer::Trainer::fit)) take an
///   `Unfitted` model,
/// - inference methods (`predict`) are not available until the model becomes `Fitted`.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// A marker type indicating that a model has been **fully trained**.
///
/// A `Fitted` model holds only inference parameters (bias and feature weights). The
/// learning rate, epoch count and cost history stay with the trainer and classifier.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
