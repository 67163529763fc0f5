//! Line Amounts
//!
//! Money arithmetic for a single sale line. All amounts are integer minor units; profit is
//! signed since a line may sell below cost.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use thiserror::Error;

/// Errors raised while calculating sale amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// A calculated amount fell outside the representable range.
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
}

/// Tax applied to the subtotal of each sale line.
#[derive(Debug, Clone, Copy)]
pub struct TaxPolicy {
    rate: Percentage,
}

impl TaxPolicy {
    /// Create a policy charging `rate` on every subtotal.
    pub fn new(rate: Percentage) -> Self {
        Self { rate }
    }

    /// A policy that charges no tax.
    pub fn exempt() -> Self {
        Self::new(Percentage::from(0.0))
    }

    /// The configured rate.
    pub fn rate(&self) -> Percentage {
        self.rate
    }

    /// Tax due on `subtotal`, rounded to whole minor units (midpoint away from zero).
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::OutOfRange`] if the result overflows or is negative.
    pub fn tax_on(&self, subtotal: u64) -> Result<u64, AmountError> {
        let subtotal = Decimal::from_u64(subtotal).ok_or(AmountError::OutOfRange("subtotal"))?;

        // decimal_percentage doesn't expose the underlying Decimal
        (self.rate * Decimal::ONE)
            .checked_mul(subtotal)
            .ok_or(AmountError::OutOfRange("tax amount"))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .ok_or(AmountError::OutOfRange("tax amount"))
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::exempt()
    }
}

/// Amounts recorded against one committed sale line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    /// Unit price multiplied by quantity.
    pub subtotal: u64,

    /// Tax charged on the subtotal.
    pub tax_amount: u64,

    /// Subtotal plus tax.
    pub tax_inclusive_total: u64,

    /// Unit price less cost price, multiplied by quantity.
    pub profit_amount: i64,
}

impl LineAmounts {
    /// Calculate the amounts for selling `quantity` units at `unit_price` when each unit cost
    /// `cost_price`.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::OutOfRange`] when any amount overflows its type.
    pub fn compute(
        unit_price: u64,
        cost_price: u64,
        quantity: u64,
        tax: &TaxPolicy,
    ) -> Result<Self, AmountError> {
        let subtotal = unit_price
            .checked_mul(quantity)
            .ok_or(AmountError::OutOfRange("subtotal"))?;

        let tax_amount = tax.tax_on(subtotal)?;

        let tax_inclusive_total = subtotal
            .checked_add(tax_amount)
            .ok_or(AmountError::OutOfRange("total with tax"))?;

        Ok(Self {
            subtotal,
            tax_amount,
            tax_inclusive_total,
            profit_amount: profit(unit_price, cost_price, quantity)?,
        })
    }
}

fn profit(unit_price: u64, cost_price: u64, quantity: u64) -> Result<i64, AmountError> {
    let margin = i128::from(unit_price) - i128::from(cost_price);

    margin
        .checked_mul(i128::from(quantity))
        .and_then(|profit| i64::try_from(profit).ok())
        .ok_or(AmountError::OutOfRange("profit"))
}

/// Markup of `selling_price` over `cost_price` as a percentage, to one decimal place.
///
/// Returns `None` when there is no cost to mark up from.
pub fn markup_percent(selling_price: u64, cost_price: u64) -> Option<Decimal> {
    if cost_price == 0 {
        return None;
    }

    let selling_price = Decimal::from_u64(selling_price)?;
    let cost_price = Decimal::from_u64(cost_price)?;

    selling_price
        .checked_sub(cost_price)?
        .checked_div(cost_price)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|markup| markup.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

/// Whether selling at `selling_price` earns nothing over `cost_price`.
pub fn sells_at_a_loss(selling_price: u64, cost_price: u64) -> bool {
    selling_price <= cost_price
}
