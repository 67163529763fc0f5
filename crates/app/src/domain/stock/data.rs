//! Stock Data

/// Units to add to and remove from a product's stock in one step.
///
/// Both sides apply together: the resulting stock is `current + add - remove`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockAdjustment {
    pub add: u64,
    pub remove: u64,
}

impl StockAdjustment {
    /// Adjustment that only adds stock.
    #[must_use]
    pub fn add(units: u64) -> Self {
        Self {
            add: units,
            remove: 0,
        }
    }

    /// Adjustment that only removes stock.
    #[must_use]
    pub fn remove(units: u64) -> Self {
        Self {
            add: 0,
            remove: units,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add == 0 && self.remove == 0
    }

    /// Stock after applying this adjustment to `current`, if it stays within range.
    #[must_use]
    pub fn apply(&self, current: u64) -> Option<u64> {
        current.checked_add(self.add)?.checked_sub(self.remove)
    }
}
