//! Decimal rounding of binary floats.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `digits` decimal places, ties to even.
///
/// The decision is made on the exact binary value of `value`, so `0.15`
/// (stored as 0.1499999...) rounds to `0.1` while `0.25` (exact) rounds to
/// `0.2`. Values a `Decimal` cannot hold (NaN, infinities, out of range) are
/// returned unchanged.
pub fn round_half_even(value: f64, digits: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| {
            exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
        })
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}
