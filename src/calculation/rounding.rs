//! Monetary rounding policy.
//!
//! Every component of a severance breakdown is rounded to cents with
//! midpoint-away-from-zero rounding before it is summed, so the total is
//! always the exact sum of the amounts shown.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fraction digits kept for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to cents, half away from zero, with exactly two fraction digits.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("83.335").unwrap()).to_string(), "83.34");
/// assert_eq!(round_currency(Decimal::from(1500)).to_string(), "1500.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Formats an amount as a fixed two-digit decimal string.
pub fn format_currency(amount: Decimal) -> String {
    round_currency(amount).to_string()
}
