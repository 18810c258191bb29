//! # metacalc-core
//!
//! Core library for the chart meta calculator.
//!
//! This crate provides:
//! - Chart metadata parsing (ChartMetadata, ChartKey, Difficulty)
//! - Score and event point models for solo, auto and multiplayer play
//! - Per-chart derivation of scores, points, cycles and points per hour
//! - Relative index normalization against a baseline chart
//! - All-charts and best-per-song leaderboards
//! - JSON output of the derived records and leaderboards

pub mod chart;
pub mod config;
pub mod derivation;
pub mod error;
pub mod export;
pub mod metric;
pub mod normalize;
pub mod pipeline;
pub mod ranking;
pub mod round;
pub mod score;

// Re-export from chart module
pub use chart::{ChartKey, ChartMetadata, Difficulty, load_chart_metadata, parse_chart_metadata};

// Re-export from config module
pub use config::{
    BoostTable, LiveBonus, ScoringConfig, ScoringConfigBuilder, SkillPairing, SkillTable,
};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from score module
pub use score::{PlayMode, compute_event_points, compute_raw_score};

// Re-export from derivation module
pub use derivation::{DerivedRecord, derive_all, derive_record, event_points_for};

// Re-export from metric module
pub use metric::{Metric, MetricValue, RelativeIndices};

// Re-export from normalize module
pub use normalize::{
    BaselineMetrics, BaselinePredicate, BaselineSelector, BaselineStrategy, normalize,
    normalize_with, relative_index,
};

// Re-export from ranking module
pub use ranking::{
    AllChartsRanking, BestPerSongRanking, RANKING_METRICS, RankingEntry, Rankings,
    all_charts_ranking, best_per_song_ranking, rank_all_charts, rank_best_per_song,
};

// Re-export from pipeline module
pub use pipeline::{MetaCalculator, PipelineOutput};

// Re-export from export module
pub use export::{OutputPaths, write_outputs};
