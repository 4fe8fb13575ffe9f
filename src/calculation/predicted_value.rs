//! Predicted-value heuristic.
//!
//! Maps a severance total to the amount likely to be realized in a negotiated
//! exit, shown in the console as "40%–70% of the full estimate". This is a
//! forecasting aid for display only and has no legal meaning.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::config::PredictedValueRules;
use crate::models::PredictedBand;

/// Returns the predicted value under the default 40%–70% band.
///
/// The point estimate is the band's midpoint (55%) of the total, rounded to
/// cents. The result is non-decreasing in `total`, never negative and never
/// above `total`; negative totals yield zero.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::predicted_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(predicted_value(Decimal::from(12848)), Decimal::new(706640, 2));
/// assert_eq!(predicted_value(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn predicted_value(total: Decimal) -> Decimal {
    predicted_value_with_rules(total, &PredictedValueRules::default())
}

/// Returns the predicted value under an explicit band.
pub fn predicted_value_with_rules(total: Decimal, rules: &PredictedValueRules) -> Decimal {
    share_of(total, rules.midpoint())
}

/// Returns the whole predicted band under the default 40%–70% band.
pub fn predicted_band(total: Decimal) -> PredictedBand {
    predicted_band_with_rules(total, &PredictedValueRules::default())
}

/// Returns the whole predicted band under an explicit band.
pub fn predicted_band_with_rules(total: Decimal, rules: &PredictedValueRules) -> PredictedBand {
    PredictedBand {
        low: share_of(total, rules.low),
        point: share_of(total, rules.midpoint()),
        high: share_of(total, rules.high),
    }
}

/// `total x share`, rounded to cents and clamped to `[0, total]`.
fn share_of(total: Decimal, share: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return round_currency(Decimal::ZERO);
    }
    // rounding up can overshoot totals below one cent
    round_currency(total * share).min(total)
}
