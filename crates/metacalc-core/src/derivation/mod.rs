//! Per-chart derivation of scores, event points and farming throughput.

use std::str::FromStr;

use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::chart::{ChartKey, ChartMetadata};
use crate::config::{LiveBonus, ScoringConfig, defaults};
use crate::metric::{Metric, RelativeIndices};
use crate::round::round_half_even;
use crate::score::{PlayMode, compute_event_points, compute_raw_score};

/// Fields written by [`derive_record`]; input keys with these names are replaced
pub const DERIVED_FIELDS: [&str; 13] = [
    "solo_score",
    "solo_pt_0fire",
    "solo_pt_max",
    "auto_score",
    "auto_pt_0fire",
    "auto_pt_max",
    "multi_score",
    "multi_pt_0fire",
    "multi_pt_max",
    "cycles_auto",
    "cycles_multi",
    "pt_per_hour_auto",
    "pt_per_hour_multi",
];

/// Chart metadata plus every figure derived from it.
///
/// Serializes flat: the input record's fields first, then the derived fields
/// and any `pspi_*` indices that have been attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRecord {
    #[serde(skip)]
    pub chart: ChartMetadata,
    /// Input fields written back, minus those the derivation replaces
    #[serde(flatten)]
    pub input: Map<String, JsonValue>,
    pub solo_score: u32,
    pub solo_pt_0fire: u32,
    pub solo_pt_max: u32,
    pub auto_score: u32,
    pub auto_pt_0fire: u32,
    pub auto_pt_max: u32,
    pub multi_score: u32,
    pub multi_pt_0fire: u32,
    pub multi_pt_max: u32,
    pub cycles_auto: f64,
    pub cycles_multi: f64,
    pub pt_per_hour_auto: u32,
    pub pt_per_hour_multi: u32,
    #[serde(flatten)]
    pub pspi: RelativeIndices,
}

impl DerivedRecord {
    pub fn key(&self) -> ChartKey {
        self.chart.key()
    }

    pub fn music_id(&self) -> u32 {
        self.chart.music_id
    }
}

/// Scores and points for one play mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ModeFigures {
    score: u32,
    pt_0fire: u32,
    pt_max: u32,
}

fn mode_figures(chart: &ChartMetadata, mode: PlayMode, config: &ScoringConfig) -> ModeFigures {
    let score = compute_raw_score(chart, mode, config);
    let event_rate = chart.event_rate();
    ModeFigures {
        score,
        pt_0fire: compute_event_points(score, event_rate, config.zero_boost, config),
        pt_max: compute_event_points(score, event_rate, config.max_boost, config),
    }
}

/// Whether an input key is overwritten by a derived field or a relative index
pub fn is_derived_field(key: &str) -> bool {
    DERIVED_FIELDS.contains(&key)
        || key
            .strip_prefix("pspi_")
            .and_then(|metric| Metric::from_str(metric).ok())
            .is_some_and(|metric| metric.has_relative_index())
}

/// Attempts completable in one hour, one decimal
pub fn cycles_per_hour(music_time: f64, interval_secs: f64) -> f64 {
    round_half_even(defaults::SECONDS_PER_HOUR / (music_time + interval_secs), 1)
}

/// Points per hour, rounded to the nearest integer (ties to even)
pub fn points_per_hour(cycles: f64, points: u32) -> u32 {
    round_half_even(cycles * points as f64, 0) as u32
}

/// Derive every figure for one chart
pub fn derive_record(chart: &ChartMetadata, config: &ScoringConfig) -> DerivedRecord {
    let solo = mode_figures(chart, PlayMode::Solo, config);
    let auto = mode_figures(chart, PlayMode::Auto, config);
    let multi = mode_figures(chart, PlayMode::Multi, config);

    let music_time = chart.music_time();
    let cycles_auto = cycles_per_hour(music_time, config.interval_auto_secs);
    let cycles_multi = cycles_per_hour(music_time, config.interval_multi_secs);

    let mut input = chart.to_json_map();
    input.retain(|key, _| !is_derived_field(key));

    DerivedRecord {
        chart: chart.clone(),
        input,
        solo_score: solo.score,
        solo_pt_0fire: solo.pt_0fire,
        solo_pt_max: solo.pt_max,
        auto_score: auto.score,
        auto_pt_0fire: auto.pt_0fire,
        auto_pt_max: auto.pt_max,
        multi_score: multi.score,
        multi_pt_0fire: multi.pt_0fire,
        multi_pt_max: multi.pt_max,
        cycles_auto,
        cycles_multi,
        pt_per_hour_auto: points_per_hour(cycles_auto, auto.pt_max),
        pt_per_hour_multi: points_per_hour(cycles_multi, multi.pt_max),
        pspi: RelativeIndices::default(),
    }
}

/// Derive all charts in parallel; output order matches input order
pub fn derive_all(charts: &[ChartMetadata], config: &ScoringConfig) -> Vec<DerivedRecord> {
    charts
        .par_iter()
        .map(|chart| derive_record(chart, config))
        .collect()
}

/// Event points for one chart under an arbitrary bonus, e.g. a partial boost
pub fn event_points_for(
    chart: &ChartMetadata,
    mode: PlayMode,
    bonus: LiveBonus,
    config: &ScoringConfig,
) -> u32 {
    let score = compute_raw_score(chart, mode, config);
    compute_event_points(score, chart.event_rate(), bonus, config)
}
