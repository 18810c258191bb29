use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{Error, Result};
use crate::score::PlayMode;

/// How slot skill scores are matched with the multiplier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillPairing {
    /// Strongest skill score gets the largest multiplier, and so on down.
    #[default]
    Sorted,
    /// Slot `i` gets multiplier `i`.
    Positional,
}

/// Skill multipliers for the five character slots of one play mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillTable {
    pub multipliers: [f64; 5],
    #[serde(default)]
    pub pairing: SkillPairing,
}

impl SkillTable {
    pub fn new(multipliers: [f64; 5], pairing: SkillPairing) -> Self {
        Self {
            multipliers,
            pairing,
        }
    }

    /// Largest multiplier in the table, applied to the fixed extra contribution
    pub fn lead(&self) -> f64 {
        self.multipliers
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Point multipliers indexed by boost tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoostTable(pub [u32; 4]);

impl BoostTable {
    /// Multiplier for `tier`; tiers outside the table count as 1
    pub fn multiplier(&self, tier: u8) -> u32 {
        self.0.get(tier as usize).copied().unwrap_or(1)
    }
}

impl Default for BoostTable {
    fn default() -> Self {
        Self(defaults::BOOST_MULTIPLIERS)
    }
}

/// Event bonus percentage and boost tier used for one point figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiveBonus {
    pub event_bonus_pct: u32,
    pub boost_tier: u8,
}

impl LiveBonus {
    /// No event bonus, no boost
    pub const ZERO: Self = Self {
        event_bonus_pct: 0,
        boost_tier: 0,
    };

    /// Full event bonus at the highest boost tier
    pub const MAX: Self = Self {
        event_bonus_pct: defaults::MAX_EVENT_BONUS_PCT,
        boost_tier: defaults::MAX_BOOST_TIER,
    };
}

/// Constants of the score, point and throughput models.
///
/// Read from TOML with [`ScoringConfig::load`]; every key is optional and falls
/// back to the standard value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub power: f64,
    pub fever_weight: f64,
    pub multi_combo_bonus: f64,
    pub score_bonus_step: u32,
    pub interval_auto_secs: f64,
    pub interval_multi_secs: f64,
    pub boost: BoostTable,
    pub zero_boost: LiveBonus,
    pub max_boost: LiveBonus,
    pub solo: SkillTable,
    pub auto: SkillTable,
    pub multi: SkillTable,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            power: defaults::POWER,
            fever_weight: defaults::FEVER_WEIGHT,
            multi_combo_bonus: defaults::MULTI_COMBO_BONUS,
            score_bonus_step: defaults::SCORE_BONUS_STEP,
            interval_auto_secs: defaults::INTERVAL_AUTO_SECS,
            interval_multi_secs: defaults::INTERVAL_MULTI_SECS,
            boost: BoostTable::default(),
            zero_boost: LiveBonus::ZERO,
            max_boost: LiveBonus::MAX,
            solo: SkillTable::new(defaults::SOLO_SKILLS, SkillPairing::Sorted),
            auto: SkillTable::new(defaults::AUTO_SKILLS, SkillPairing::Sorted),
            multi: SkillTable::new(defaults::MULTI_SKILLS, SkillPairing::Positional),
        }
    }
}

impl ScoringConfig {
    pub fn builder() -> ScoringConfigBuilder {
        ScoringConfigBuilder::new()
    }

    pub fn skill_table(&self, mode: PlayMode) -> &SkillTable {
        match mode {
            PlayMode::Solo => &self.solo,
            PlayMode::Auto => &self.auto,
            PlayMode::Multi => &self.multi,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.score_bonus_step == 0 {
            return Err(Error::ConfigParseError(
                "score_bonus_step must be positive".to_string(),
            ));
        }
        if !(self.power.is_finite() && self.power > 0.0) {
            return Err(Error::ConfigParseError(
                "power must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for overriding individual constants of [`ScoringConfig`]
#[derive(Debug, Clone, Default)]
pub struct ScoringConfigBuilder {
    config: ScoringConfig,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_power(mut self, power: f64) -> Self {
        self.config.power = power;
        self
    }

    pub fn with_skill_table(mut self, mode: PlayMode, table: SkillTable) -> Self {
        match mode {
            PlayMode::Solo => self.config.solo = table,
            PlayMode::Auto => self.config.auto = table,
            PlayMode::Multi => self.config.multi = table,
        }
        self
    }

    pub fn with_pairing(mut self, mode: PlayMode, pairing: SkillPairing) -> Self {
        match mode {
            PlayMode::Solo => self.config.solo.pairing = pairing,
            PlayMode::Auto => self.config.auto.pairing = pairing,
            PlayMode::Multi => self.config.multi.pairing = pairing,
        }
        self
    }

    pub fn with_boost_table(mut self, boost: BoostTable) -> Self {
        self.config.boost = boost;
        self
    }

    pub fn with_max_boost(mut self, bonus: LiveBonus) -> Self {
        self.config.max_boost = bonus;
        self
    }

    /// Set the per-attempt overhead in seconds for auto and multiplayer
    pub fn with_intervals(mut self, auto_secs: f64, multi_secs: f64) -> Self {
        self.config.interval_auto_secs = auto_secs;
        self.config.interval_multi_secs = multi_secs;
        self
    }

    pub fn build(self) -> ScoringConfig {
        self.config
    }
}
