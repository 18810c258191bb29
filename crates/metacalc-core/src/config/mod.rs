//! Scoring configuration.
//!
//! This module contains the tunable inputs of the score and point models:
//! - `ScoringConfig` - the full set of constants handed to the derivation engine
//! - `SkillTable`, `SkillPairing` - per-mode skill multipliers and pairing rule
//! - `BoostTable`, `LiveBonus` - boost multipliers and event bonus settings
//! - Standard constant values

mod scoring;

pub use scoring::*;

/// Standard team and event constants.
///
/// Solo/auto: 250000 team power, lead slot at 120%, other slots at 100%.
/// Multiplayer: 250000 team power, every slot at 200%.
pub mod defaults {
    /// Team power applied to every mode.
    pub const POWER: f64 = 250_000.0;

    pub const SOLO_SKILLS: [f64; 5] = [1.20, 1.00, 1.00, 1.00, 1.00];
    pub const AUTO_SKILLS: [f64; 5] = [1.20, 1.00, 1.00, 1.00, 1.00];
    pub const MULTI_SKILLS: [f64; 5] = [2.00, 2.00, 2.00, 2.00, 2.00];

    /// Share of the fever score counted in multiplayer.
    pub const FEVER_WEIGHT: f64 = 0.5;

    /// Fixed multiplayer combo bonus added to the score percentage.
    pub const MULTI_COMBO_BONUS: f64 = 0.01875;

    /// Score needed for each +1% event point bonus step.
    pub const SCORE_BONUS_STEP: u32 = 20_000;

    /// Point multiplier for boost tiers 0..=3.
    pub const BOOST_MULTIPLIERS: [u32; 4] = [1, 5, 10, 15];

    /// Event bonus (%) and boost tier for the "max boost" figures.
    pub const MAX_EVENT_BONUS_PCT: u32 = 200;
    pub const MAX_BOOST_TIER: u8 = 3;

    /// Loading/menu overhead per attempt, in seconds.
    pub const INTERVAL_AUTO_SECS: f64 = 35.0;
    pub const INTERVAL_MULTI_SECS: f64 = 45.0;

    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}
