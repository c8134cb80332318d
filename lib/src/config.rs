//! Hyperparameters for [`AdalineGD`](crate::classifier::AdalineGD).

/// Learning rate used when none is given.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Number of full passes over the training set used when none is given.
pub const DEFAULT_EPOCH_COUNT: usize = crate::trainer::DEFAULT_EPOCHS;

/// Training hyperparameters.
///
/// Neither value is validated. A learning rate outside `(0.0, 1.0]` trains but may
/// diverge, and an epoch count of zero leaves the weights at zero.
///
/// ```
/// use adaline_rs::AdalineConfig;
///
/// let config = AdalineConfig::default()
///     .with_learning_rate(0.0001)
///     .with_epoch_count(20);
/// assert_eq!(config.learning_rate, 0.0001);
/// assert_eq!(config.epoch_count, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdalineConfig {
    /// Step size `η` of each gradient-descent update.
    pub learning_rate: f64,
    /// Number of epochs; also the length of the recorded cost history.
    pub epoch_count: usize,
}

impl Default for AdalineConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epoch_count: DEFAULT_EPOCH_COUNT,
        }
    }
}

impl AdalineConfig {
    pub fn new(learning_rate: f64, epoch_count: usize) -> Self {
        Self {
            learning_rate,
            epoch_count,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epoch_count(mut self, epoch_count: usize) -> Self {
        self.epoch_count = epoch_count;
        self
    }
}

#[cfg(feature = "serde")]
impl AdalineConfig {
    /// Parses a JSON object with optional `learning_rate` and `epoch_count` fields.
    ///
    /// Missing fields take their default values.
    ///
    /// ```
    /// use adaline_rs::AdalineConfig;
    ///
    /// let config = AdalineConfig::from_json_str(r#"{ "epoch_count": 50 }"#).unwrap();
    /// assert_eq!(config.epoch_count, 50);
    /// assert_eq!(config.learning_rate, 0.01);
    /// ```
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::AdalineError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AdalineConfig::default();
        assert_eq!(c.learning_rate, 0.01);
        assert_eq!(c.epoch_count, 10);
    }

    #[test]
    fn test_new_keeps_values_unvalidated() {
        let c = AdalineConfig::new(-3.0, 0);
        assert_eq!(c.learning_rate, -3.0);
        assert_eq!(c.epoch_count, 0);
    }

    #[test]
    fn test_setters_chain() {
        let c = AdalineConfig::default()
            .with_epoch_count(1)
            .with_learning_rate(0.5);
        assert_eq!(c, AdalineConfig::new(0.5, 1));
    }

    #[cfg(feature = "serde")]
    mod json {
        use super::*;
        use crate::error::AdalineError;

        #[test]
        fn test_full_document() {
            let c = AdalineConfig::from_json_str(r#"{"learning_rate": 0.0001, "epoch_count": 20}"#)
                .unwrap();
            assert_eq!(c, AdalineConfig::new(0.0001, 20));
        }

        #[test]
        fn test_empty_object_is_default() {
            assert_eq!(
                AdalineConfig::from_json_str("{}").unwrap(),
                AdalineConfig::default()
            );
        }

        #[test]
        fn test_malformed_document() {
            let err = AdalineConfig::from_json_str(r#"{"epoch_count": -1}"#).unwrap_err();
            assert!(matches!(err, AdalineError::InvalidConfig(_)));
        }

        #[test]
        fn test_serialize_field_names() {
            let json = serde_json::to_string(&AdalineConfig::new(0.5, 3)).unwrap();
            assert_eq!(json, r#"{"learning_rate":0.5,"epoch_count":3}"#);
        }
    }
}
