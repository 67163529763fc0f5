//! Checkout Receipt

use stockroom::amounts::AmountError;

use crate::domain::{customers::records::CustomerRecord, transactions::records::TransactionRecord};

/// Summary of a committed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub customer: CustomerRecord,
    pub line_count: usize,
    pub total_units: u64,
    pub subtotal: u64,
    pub tax_amount: u64,
    pub total_with_tax: u64,
    pub profit_amount: i64,

    /// One entry per cart line, in cart order.
    pub lines: Vec<ReceiptLine>,
}

/// A ledger row written by checkout, with the product name the cart line carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub product_name: String,
    pub transaction: TransactionRecord,
}

impl Receipt {
    /// Total the lines sold to `customer`.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::OutOfRange`] if a total overflows.
    pub fn from_lines(
        customer: CustomerRecord,
        lines: Vec<ReceiptLine>,
    ) -> Result<Self, AmountError> {
        let mut receipt = Self {
            customer,
            line_count: lines.len(),
            total_units: 0,
            subtotal: 0,
            tax_amount: 0,
            total_with_tax: 0,
            profit_amount: 0,
            lines: Vec::new(),
        };

        for ReceiptLine { transaction, .. } in &lines {
            receipt.total_units = checked_sum(receipt.total_units, transaction.quantity, "units")?;
            receipt.subtotal = checked_sum(receipt.subtotal, transaction.subtotal, "subtotal")?;
            receipt.tax_amount =
                checked_sum(receipt.tax_amount, transaction.tax_amount, "tax amount")?;
            receipt.total_with_tax = checked_sum(
                receipt.total_with_tax,
                transaction.total_with_tax,
                "total with tax",
            )?;
            receipt.profit_amount = receipt
                .profit_amount
                .checked_add(transaction.profit_amount)
                .ok_or(AmountError::OutOfRange("profit"))?;
        }

        receipt.lines = lines;

        Ok(receipt)
    }
}

fn checked_sum(total: u64, amount: u64, what: &'static str) -> Result<u64, AmountError> {
    total.checked_add(amount).ok_or(AmountError::OutOfRange(what))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::{
        customers::records::CustomerUuid, products::records::ProductUuid,
        transactions::records::TransactionUuid,
    };

    use super::*;

    fn customer() -> CustomerRecord {
        CustomerRecord {
            uuid: CustomerUuid::new(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn line(quantity: u64, unit_price: u64, tax_amount: u64, profit: i64) -> ReceiptLine {
        let transaction = TransactionRecord {
            uuid: TransactionUuid::new(),
            product: ProductUuid::new(),
            customer: CustomerUuid::new(),
            quantity,
            unit_price,
            subtotal: unit_price * quantity,
            tax_amount,
            total_with_tax: unit_price * quantity + tax_amount,
            profit_amount: profit,
            created_at: Timestamp::now(),
        };

        ReceiptLine {
            product_name: format!("Product x{quantity}"),
            transaction,
        }
    }

    #[test]
    fn totals_are_summed_across_lines() -> TestResult {
        let receipt =
            Receipt::from_lines(customer(), vec![line(2, 50, 18, 40), line(5, 20, 0, -10)])?;

        assert_eq!(receipt.line_count, 2);
        assert_eq!(receipt.total_units, 7);
        assert_eq!(receipt.subtotal, 200);
        assert_eq!(receipt.tax_amount, 18);
        assert_eq!(receipt.total_with_tax, 218);
        assert_eq!(receipt.profit_amount, 30);
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[1].product_name, "Product x5");

        Ok(())
    }

    #[test]
    fn overflowing_totals_are_rejected() {
        let mut big = line(1, 0, 0, 0);
        big.transaction.subtotal = u64::MAX;

        let result = Receipt::from_lines(customer(), vec![big.clone(), big]);

        assert_eq!(result, Err(AmountError::OutOfRange("subtotal")));
    }
}
