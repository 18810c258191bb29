//! End-to-end calculation: derive, normalize, sort, rank.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::chart::{ChartKey, ChartMetadata};
use crate::config::ScoringConfig;
use crate::derivation::{DerivedRecord, derive_all};
use crate::error::{Error, Result};
use crate::normalize::{BaselineSelector, BaselineStrategy, normalize_with};
use crate::ranking::{
    AllChartsRanking, BestPerSongRanking, all_charts_ranking, best_per_song_ranking,
};

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Derived records, sorted by `multi_pt_max` descending
    pub records: Vec<DerivedRecord>,
    pub rankings_all: AllChartsRanking,
    pub rankings_best: BestPerSongRanking,
    pub baseline: ChartKey,
}

pub struct MetaCalculator {
    config: ScoringConfig,
    baseline: Box<dyn BaselineStrategy + Send + Sync>,
}

impl MetaCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            baseline: Box::new(BaselineSelector::default()),
        }
    }

    pub fn with_baseline<S>(mut self, strategy: S) -> Self
    where
        S: BaselineStrategy + Send + Sync + 'static,
    {
        self.baseline = Box::new(strategy);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Derive records without normalizing or ranking
    pub fn derive(&self, charts: &[ChartMetadata]) -> Vec<DerivedRecord> {
        derive_all(charts, &self.config)
    }

    pub fn run(
        &self,
        charts: &[ChartMetadata],
        generated_at: NaiveDateTime,
    ) -> Result<PipelineOutput> {
        if charts.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut records = self.derive(charts);
        info!("Processed {} entries", records.len());

        let baseline = normalize_with(&mut records, self.baseline.as_ref())?;
        info!("Baseline: {}", baseline.key);

        sort_by_multi_pt_max(&mut records);

        let rankings_all = all_charts_ranking(&records, generated_at);
        let rankings_best = best_per_song_ranking(&records, generated_at);
        debug!(
            "Ranked {} charts across {} songs",
            rankings_all.total_charts, rankings_best.total_songs
        );

        Ok(PipelineOutput {
            records,
            rankings_all,
            rankings_best,
            baseline: baseline.key,
        })
    }
}

impl Default for MetaCalculator {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Stable sort, highest `multi_pt_max` first
pub fn sort_by_multi_pt_max(records: &mut [DerivedRecord]) {
    records.sort_by(|a, b| b.multi_pt_max.cmp(&a.multi_pt_max));
}
