//! Common rounding helpers for savings calculations.
//!
//! Displayed figures follow the browser's `Math.round` convention: half-way
//! values always move toward positive infinity, so `2.5` becomes `3` and
//! `-2.5` becomes `-2`. This differs from the usual financial
//! "away from zero" rule only for negative midpoints, which do occur in the
//! five-year projection when the payback period is longer than five years.

use rust_decimal::Decimal;

/// Rounds a decimal value to the nearest whole number, half-way values
/// rounding toward positive infinity.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(1641.6)), dec!(1642));
/// assert_eq!(round_whole(dec!(2.5)), dec!(3));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// Rounds a decimal value to one decimal place, half-way values rounding
/// toward positive infinity.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_tenth;
///
/// assert_eq!(round_tenth(dec!(4.934)), dec!(4.9));
/// assert_eq!(round_tenth(dec!(4.95)), dec!(5.0));
/// ```
pub fn round_tenth(value: Decimal) -> Decimal {
    round_whole(value * Decimal::TEN) / Decimal::TEN
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}
