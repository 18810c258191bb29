use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{LiveBonus, ScoringConfig};

/// Score bonus steps: +1 per full `step` points of score
pub fn score_bonus(score: u32, step: u32) -> u32 {
    score / step
}

/// Truncate toward zero at two fractional digits (1.005 -> 1.00, -1.005 -> -1.00)
pub fn truncate_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::ToZero)
}

/// Event points earned for one play.
///
/// ```text
/// scaled = trunc2((100 + score / step) * (100 + event_bonus_pct) / 100)
/// basic  = floor(scaled * event_rate / 100)
/// points = basic * boost[boost_tier]
/// ```
///
/// The intermediate steps use exact decimal arithmetic.
pub fn compute_event_points(
    score: u32,
    event_rate: u32,
    bonus: LiveBonus,
    config: &ScoringConfig,
) -> u32 {
    let score_bonus = Decimal::from(score_bonus(score, config.score_bonus_step));
    let event_bonus = Decimal::from(bonus.event_bonus_pct);

    let scaled = truncate_2dp(
        (Decimal::ONE_HUNDRED + score_bonus) * (Decimal::ONE_HUNDRED + event_bonus)
            / Decimal::ONE_HUNDRED,
    );
    let basic = (scaled * Decimal::from(event_rate) / Decimal::ONE_HUNDRED)
        .trunc()
        .to_u32()
        .unwrap_or(u32::MAX);

    basic.saturating_mul(config.boost.multiplier(bonus.boost_tier))
}
