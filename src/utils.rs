use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a value to display precision (2 decimal places), half away from
/// zero. Every limit and percentage the crate emits goes through this, so the
/// strategy is part of the persisted contract and must not change.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
