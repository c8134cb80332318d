/// Cost recorded at each training epoch, in epoch order.
///
/// Entry `i` is the cost of the forward pass made with the parameters that were
/// current at the start of epoch `i`, i.e. before that epoch's update.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CostHistory(Vec<f64>);

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(epochs: usize) -> Self {
        Self(Vec::with_capacity(epochs))
    }

    pub(crate) fn push(&mut self, cost: f64) {
        self.0.push(cost);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cost before any update was applied.
    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Cost of the final epoch's forward pass.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// `true` when the last recorded cost is strictly below the first.
    ///
    /// ```
    /// use adaline_rs::trainer::CostHistory;
    ///
    /// assert!(!CostHistory::new().improved());
    /// assert!(CostHistory::from(vec![3.0, 2.5]).improved());
    /// assert!(!CostHistory::from(vec![3.0, 4.0]).improved());
    /// ```
    pub fn improved(&self) -> bool {
        matches!((self.first(), self.last()), (Some(first), Some(last)) if last < first)
    }
}

impl From<Vec<f64>> for CostHistory {
    fn from(costs: Vec<f64>) -> Self {
        Self(costs)
    }
}

impl From<CostHistory> for Vec<f64> {
    fn from(history: CostHistory) -> Self {
        history.0
    }
}

impl<'a> IntoIterator for &'a CostHistory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
