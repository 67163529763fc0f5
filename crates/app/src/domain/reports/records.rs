//! Report Records

/// Dashboard figures across the catalog and the sales ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    /// Live products.
    pub products: u64,
    pub customers: u64,
    pub suppliers: u64,
    pub transactions: u64,

    /// Units in stock across live products.
    pub units_in_stock: u64,

    /// Sum of tax-inclusive totals in the ledger.
    pub total_revenue: u64,

    /// Sum of recorded profit in the ledger. Negative when goods were sold below cost.
    pub total_profit: i64,
}
