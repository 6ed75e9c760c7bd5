//! Prices

use rust_decimal::{Decimal, RoundingStrategy};

use crate::items::Item;

/// Number of decimal places money is displayed and totalled with.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round an amount to cents, half away from zero (`0.005` becomes `0.01`).
///
/// Zero is always returned unsigned, so `-0.004` rounds to `0.00` rather than `-0.00`.
pub fn round_money(amount: Decimal) -> Decimal {
    let rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Format an amount rounded to cents, always with two decimal places.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount))
}

/// Calculates the total price of a list of items, discounts included.
///
/// Item totals are summed unrounded and the grand total is rounded once.
pub fn total_price<'a>(items: impl IntoIterator<Item = &'a Item>) -> Decimal {
    round_money(items.into_iter().map(Item::total).sum())
}

/// Calculates the undiscounted price of a list of items.
pub fn subtotal_price<'a>(items: impl IntoIterator<Item = &'a Item>) -> Decimal {
    round_money(items.into_iter().map(Item::price).sum())
}
