use rusty_money::Money;
use stockroom_app::config::sales::DisplayCurrency;

/// Format a non-negative amount of minor units in `currency`.
pub(crate) fn amount(minor: u64, currency: DisplayCurrency) -> String {
    i64::try_from(minor).map_or_else(
        |_| format!("{minor} minor units"),
        |minor| signed_amount(minor, currency),
    )
}

/// Format a signed amount of minor units, such as a profit, in `currency`.
pub(crate) fn signed_amount(minor: i64, currency: DisplayCurrency) -> String {
    format!("{}", Money::from_minor(minor, currency.iso()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_shown_in_major_units() {
        assert_eq!(amount(1_250, DisplayCurrency::Gbp), "£12.50");
        assert_eq!(amount(999, DisplayCurrency::Usd), "$9.99");
        assert_eq!(amount(0, DisplayCurrency::Gbp), "£0.00");
    }

    #[test]
    fn amounts_beyond_money_range_fall_back_to_minor_units() {
        assert_eq!(
            amount(u64::MAX, DisplayCurrency::Usd),
            format!("{} minor units", u64::MAX)
        );
    }
}
