//! Cart stock limit behaviour across sequences of additions.

use stockroom::prelude::*;
use testresult::TestResult;

fn widget(quantity: u64) -> NewCartLine<&'static str> {
    NewCartLine {
        product: "widget",
        product_name: "Widget".to_string(),
        unit_price: 250,
        quantity,
    }
}

#[test]
fn accepted_additions_sum_to_cart_quantity() -> TestResult {
    let mut cart = Cart::new();
    let requests = [1, 4, 2, 3];
    let mut expected = 0;

    for requested in requests {
        expected += requested;

        let in_cart = cart.add_line(widget(requested), 10)?;

        assert_eq!(in_cart, expected);
    }

    assert_eq!(cart.quantity_of("widget"), 10);
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.subtotal(), 2_500);

    Ok(())
}

#[test]
fn rejected_addition_does_not_count_towards_later_ones() -> TestResult {
    let mut cart = Cart::new();

    cart.add_line(widget(6), 8)?;

    assert!(cart.add_line(widget(3), 8).is_err());

    let in_cart = cart.add_line(widget(2), 8)?;

    assert_eq!(in_cart, 8);

    Ok(())
}

#[test]
fn stock_snapshot_is_per_call() -> TestResult {
    let mut cart = Cart::new();

    cart.add_line(widget(5), 10)?;

    // a later, lower stock figure applies to the projected total
    let result = cart.add_line(widget(1), 5);

    assert_eq!(
        result,
        Err(CartError::InsufficientStock {
            available: 5,
            in_cart: 5,
            requested: 1,
        })
    );

    Ok(())
}

#[test]
fn line_amounts_for_cart_lines() -> TestResult {
    let mut cart = Cart::new();

    cart.add_line(widget(3), 10)?;

    let tax = TaxPolicy::exempt();

    let totals = cart
        .lines()
        .iter()
        .map(|line| LineAmounts::compute(line.unit_price(), 200, line.quantity(), &tax))
        .collect::<Result<Vec<_>, _>>()?;

    let profit: i64 = totals.iter().map(|amounts| amounts.profit_amount).sum();

    assert_eq!(profit, 150);

    Ok(())
}
