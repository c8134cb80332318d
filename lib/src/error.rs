//! Error types for training and inference.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AdalineError>;

/// Errors returned by dataset construction, training and prediction.
///
/// Arithmetic never fails: a diverging learning rate yields infinite or NaN weights,
/// not an error. Only malformed input shapes and use-before-fit are reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdalineError {
    /// Number of labels differs from the number of feature rows.
    #[error("label count mismatch: {samples} samples but {labels} labels")]
    LabelCountMismatch { samples: usize, labels: usize },

    /// A feature row has a different dimension than the first row.
    #[error("ragged feature matrix: row {row} has {got} features, expected {expected}")]
    RaggedFeatures {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Input dimension differs from the dimension the model was trained with.
    #[error("feature mismatch: expected {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    /// No samples were provided where at least one is required.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Samples have zero features.
    #[error("samples must have at least one feature")]
    NoFeatures,

    /// Prediction was requested before any successful `fit`.
    #[error("classifier is not fitted; call `fit` before `predict`")]
    NotFitted,

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AdalineError {
    /// Returns `true` for every variant describing malformed input shapes.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            AdalineError::LabelCountMismatch { .. }
                | AdalineError::RaggedFeatures { .. }
                | AdalineError::FeatureMismatch { .. }
                | AdalineError::EmptyDataset
                | AdalineError::NoFeatures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_label_count() {
        let err = AdalineError::LabelCountMismatch {
            samples: 6,
            labels: 5,
        };
        assert_eq!(
            err.to_string(),
            "label count mismatch: 6 samples but 5 labels"
        );
    }

    #[test]
    fn test_error_display_feature_mismatch() {
        let err = AdalineError::FeatureMismatch {
            expected: 2,
            got: 3,
        };
        assert!(err.to_string().contains("expected 2 features, got 3"));
    }

    #[test]
    fn test_error_display_not_fitted() {
        assert!(AdalineError::NotFitted.to_string().contains("not fitted"));
    }

    #[test]
    fn test_shape_mismatch_grouping() {
        assert!(AdalineError::EmptyDataset.is_shape_mismatch());
        assert!(AdalineError::NoFeatures.is_shape_mismatch());
        assert!(AdalineError::RaggedFeatures {
            row: 1,
            expected: 2,
            got: 1
        }
        .is_shape_mismatch());
        assert!(AdalineError::LabelCountMismatch {
            samples: 2,
            labels: 1
        }
        .is_shape_mismatch());
        assert!(AdalineError::FeatureMismatch {
            expected: 2,
            got: 3
        }
        .is_shape_mismatch());
        assert!(!AdalineError::NotFitted.is_shape_mismatch());
        assert!(!AdalineError::InvalidConfig("eof".into()).is_shape_mismatch());
    }

    #[test]
    fn test_error_is_std_error() {
        let err = AdalineError::NotFitted;
        let _: &dyn std::error::Error = &err;
    }
}
