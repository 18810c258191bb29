//! Leaderboards over derived records.
//!
//! Two views are produced for each ranked metric: every chart, and the single
//! best chart of each song. Both sort descending with ties kept in input order.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::chart::Difficulty;
use crate::derivation::DerivedRecord;
use crate::metric::{Metric, MetricValue};

/// Metrics that get a leaderboard, in output order
pub const RANKING_METRICS: [Metric; 9] = [
    Metric::PtPerHourMulti,
    Metric::PtPerHourAuto,
    Metric::AutoScore,
    Metric::SoloScore,
    Metric::MultiScore,
    Metric::AutoPtMax,
    Metric::SoloPtMax,
    Metric::MultiPtMax,
    Metric::CyclesMulti,
];

/// Format of the `generated_at` timestamp
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    /// 1-based position
    pub rank: usize,
    pub music_id: u32,
    pub difficulty: Difficulty,
    pub value: MetricValue,
    #[serde(rename = "pspi", skip_serializing_if = "Option::is_none")]
    pub relative_index: Option<f64>,
}

/// Ordered leaderboards, serialized as `{ metric_name: [entry, ...] }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rankings(Vec<(Metric, Vec<RankingEntry>)>);

impl Rankings {
    pub fn get(&self, metric: Metric) -> Option<&[RankingEntry]> {
        self.0
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, entries)| entries.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &[RankingEntry])> {
        self.0.iter().map(|(m, entries)| (*m, entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Rankings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (metric, entries) in &self.0 {
            map.serialize_entry(metric.as_str(), entries)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllChartsRanking {
    pub total_charts: usize,
    pub generated_at: String,
    pub rankings: Rankings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPerSongRanking {
    pub total_songs: usize,
    pub generated_at: String,
    pub rankings: Rankings,
}

fn entry(rank: usize, record: &DerivedRecord, metric: Metric) -> RankingEntry {
    RankingEntry {
        rank,
        music_id: record.music_id(),
        difficulty: record.chart.difficulty,
        value: metric.value(record),
        relative_index: record.pspi.get(metric),
    }
}

/// Stable descending sort on `metric`, then 1-based ranks
fn rank_records(mut records: Vec<&DerivedRecord>, metric: Metric) -> Vec<RankingEntry> {
    records.sort_by(|a, b| {
        metric
            .value(b)
            .partial_cmp(&metric.value(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| entry(i + 1, record, metric))
        .collect()
}

/// Rank every record on `metric`
pub fn rank_all_charts(records: &[DerivedRecord], metric: Metric) -> Vec<RankingEntry> {
    rank_records(records.iter().collect(), metric)
}

/// Highest-valued record per song, in order of each song's first appearance.
///
/// A later record replaces the current best only when strictly greater.
pub fn best_per_song(records: &[DerivedRecord], metric: Metric) -> Vec<&DerivedRecord> {
    let mut slots: HashMap<u32, usize> = HashMap::new();
    let mut best: Vec<&DerivedRecord> = Vec::new();

    for record in records {
        match slots.get(&record.music_id()) {
            Some(&slot) => {
                if metric.value(record) > metric.value(best[slot]) {
                    best[slot] = record;
                }
            }
            None => {
                slots.insert(record.music_id(), best.len());
                best.push(record);
            }
        }
    }

    best
}

/// Rank the best record of each song on `metric`
pub fn rank_best_per_song(records: &[DerivedRecord], metric: Metric) -> Vec<RankingEntry> {
    rank_records(best_per_song(records, metric), metric)
}

pub fn all_charts_ranking(
    records: &[DerivedRecord],
    generated_at: NaiveDateTime,
) -> AllChartsRanking {
    AllChartsRanking {
        total_charts: records.len(),
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        rankings: Rankings(
            RANKING_METRICS
                .iter()
                .map(|&metric| (metric, rank_all_charts(records, metric)))
                .collect(),
        ),
    }
}

pub fn best_per_song_ranking(
    records: &[DerivedRecord],
    generated_at: NaiveDateTime,
) -> BestPerSongRanking {
    let mut songs: Vec<u32> = records.iter().map(DerivedRecord::music_id).collect();
    songs.sort_unstable();
    songs.dedup();

    BestPerSongRanking {
        total_songs: songs.len(),
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        rankings: Rankings(
            RANKING_METRICS
                .iter()
                .map(|&metric| (metric, rank_best_per_song(records, metric)))
                .collect(),
        ),
    }
}
