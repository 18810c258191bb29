//! Score and event point models.
//!
//! This module contains the pure per-chart formulas:
//! - `PlayMode` - solo, auto and multiplayer play
//! - `compute_raw_score` - score for one chart in one mode
//! - `compute_event_points` - event points earned from a score

mod points;
mod raw;

pub use points::*;
pub use raw::*;

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PlayMode {
    Solo,
    Auto,
    Multi,
}

impl PlayMode {
    pub const ALL: [PlayMode; 3] = [PlayMode::Solo, PlayMode::Auto, PlayMode::Multi];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
