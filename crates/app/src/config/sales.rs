//! Sales Config

use std::str::FromStr;

use clap::Args;
use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use stockroom::amounts::TaxPolicy;

/// Currency amounts are displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayCurrency {
    /// Indian rupee.
    Inr,

    /// US dollar.
    Usd,

    /// Euro.
    Eur,

    /// Pound sterling.
    Gbp,
}

impl DisplayCurrency {
    #[must_use]
    pub fn iso(self) -> &'static Currency {
        match self {
            Self::Inr => iso::INR,
            Self::Usd => iso::USD,
            Self::Eur => iso::EUR,
            Self::Gbp => iso::GBP,
        }
    }
}

/// Tax and currency settings.
#[derive(Debug, Args)]
pub struct SalesConfig {
    /// Tax charged on each sale line, as a fraction (0.18 is 18%)
    #[arg(long, env = "TAX_RATE", default_value = "0", value_parser = parse_tax_rate)]
    pub tax_rate: Decimal,

    /// Currency used when displaying amounts
    #[arg(
        long,
        env = "CURRENCY",
        value_enum,
        ignore_case = true,
        default_value_t = DisplayCurrency::Inr
    )]
    pub currency: DisplayCurrency,
}

impl SalesConfig {
    /// Tax policy built from the configured rate.
    #[must_use]
    pub fn tax_policy(&self) -> TaxPolicy {
        TaxPolicy::new(Percentage::from(self.tax_rate))
    }
}

/// Parse a tax rate given as a non-negative decimal fraction.
///
/// # Errors
///
/// Returns a message when the value is not a number or is negative.
pub fn parse_tax_rate(value: &str) -> Result<Decimal, String> {
    let rate = Decimal::from_str(value.trim()).map_err(|e| format!("invalid tax rate: {e}"))?;

    if rate.is_sign_negative() {
        return Err("tax rate cannot be negative".to_string());
    }

    Ok(rate)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn tax_rate_accepts_fractions() -> TestResult {
        assert_eq!(parse_tax_rate("0.18")?, Decimal::new(18, 2));
        assert_eq!(parse_tax_rate(" 0 ")?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn tax_rate_rejects_negative_and_garbage() {
        assert!(parse_tax_rate("-0.1").is_err());
        assert!(parse_tax_rate("eighteen").is_err());
    }

    #[test]
    fn configured_rate_drives_tax_policy() -> TestResult {
        let config = SalesConfig {
            tax_rate: parse_tax_rate("0.18")?,
            currency: DisplayCurrency::Inr,
        };

        assert_eq!(config.tax_policy().tax_on(3_000)?, 540);

        Ok(())
    }
}
