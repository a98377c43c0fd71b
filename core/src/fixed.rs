//! Fixed-point arithmetic discipline (spec §9).
//!
//! "Floating point discipline… all intermediates use fixed-point arithmetic
//! with 4 decimal places… This is load-bearing: without it, large-weapon-
//! count Clan OmniMechs drift by ±1 BV across runtimes." Every subtotal in
//! this crate is a [`rust_decimal::Decimal`]; only [`crate::assemble`]'s
//! very last step rounds to an integer.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Round to 4 decimal places, half-away-from-zero — the intermediate
/// precision spec §9 mandates.
#[must_use]
pub fn round4(value: Decimal) -> Decimal {
	value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest integer, half-up, per §4.9's final rounding rule.
#[must_use]
pub fn round_half_up_to_i64(value: Decimal) -> i64 {
	let rounded = value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
	rounded.to_i64().unwrap_or(i64::MAX)
}

/// As [`round_half_up_to_i64`], clamped to a minimum of 1 (`finalBV ≥ 1`,
/// spec §3.1).
#[must_use]
pub fn round_half_up_to_i64_min1(value: Decimal) -> i64 {
	round_half_up_to_i64(value).max(1)
}

/// Truncate toward negative infinity (BV 2.0's `floor()` calls, e.g. MASC's
/// `floor(walk × 0.5)`), returning a non-negative integer.
#[must_use]
pub fn floor_to_u32(value: Decimal) -> u32 {
	value.floor().to_u32().unwrap_or(0)
}

/// Round down to the nearest 0.01 (§4.7 step 1: a heat-halved weapon's BV
/// rounds down to the nearest 0.01, not to 4dp).
#[must_use]
pub fn floor_to_2dp(value: Decimal) -> Decimal {
	value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::ToZero)
}

/// Round to the nearest integer, half-away-from-zero, keeping the `Decimal`
/// type (§4.8's `round(effectiveRunMP / 2)`).
#[must_use]
pub fn round_to_integer(value: Decimal) -> Decimal {
	value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round4_truncates_beyond_four_places() {
		let v = Decimal::new(123_456_789, 7); // 12.3456789
		assert_eq!(round4(v), Decimal::new(123_457, 4)); // 4dp = 12.3457
	}

	#[test]
	fn round_half_up_min1_clamps_zero() {
		assert_eq!(round_half_up_to_i64_min1(Decimal::ZERO), 1);
		assert_eq!(round_half_up_to_i64_min1(Decimal::new(4999, 3)), 5);
	}
}
