//! Stock levels

use std::fmt;

/// Highest quantity still reported as [`StockStatus::Low`].
pub const LOW_STOCK_LIMIT: u64 = 5;

/// Highest quantity still reported as [`StockStatus::Normal`].
pub const NORMAL_STOCK_LIMIT: u64 = 20;

/// How well stocked a product is, judged from its quantity on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StockStatus {
    /// Nothing left to sell.
    OutOfStock,

    /// Between one unit and [`LOW_STOCK_LIMIT`].
    Low,

    /// Up to [`NORMAL_STOCK_LIMIT`].
    Normal,

    /// Anything above [`NORMAL_STOCK_LIMIT`].
    High,
}

impl StockStatus {
    /// Classify a quantity on hand.
    pub fn of(quantity: u64) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity <= LOW_STOCK_LIMIT {
            Self::Low
        } else if quantity <= NORMAL_STOCK_LIMIT {
            Self::Normal
        } else {
            Self::High
        }
    }

    /// Whether the product should be reordered.
    pub fn needs_restock(self) -> bool {
        matches!(self, Self::OutOfStock | Self::Low)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfStock => "out of stock",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_shelf_is_out_of_stock() {
        assert_eq!(StockStatus::of(0), StockStatus::OutOfStock);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(StockStatus::of(1), StockStatus::Low);
        assert_eq!(StockStatus::of(5), StockStatus::Low);
        assert_eq!(StockStatus::of(6), StockStatus::Normal);
        assert_eq!(StockStatus::of(20), StockStatus::Normal);
        assert_eq!(StockStatus::of(21), StockStatus::High);
        assert_eq!(StockStatus::of(u64::MAX), StockStatus::High);
    }

    #[test]
    fn only_low_and_empty_shelves_need_restocking() {
        assert!(StockStatus::OutOfStock.needs_restock());
        assert!(StockStatus::Low.needs_restock());
        assert!(!StockStatus::Normal.needs_restock());
        assert!(!StockStatus::High.needs_restock());
    }

    #[test]
    fn statuses_display_as_labels() {
        assert_eq!(StockStatus::of(0).to_string(), "out of stock");
        assert_eq!(StockStatus::of(30).to_string(), "high");
    }
}
