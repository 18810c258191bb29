//! Run command for the full calculation.

use anyhow::{Context, Result};
use chrono::Local;
use metacalc_core::{
    BaselineSelector, ChartKey, Difficulty, MetaCalculator, Metric, RankingEntry, write_outputs,
};
use tracing::info;

use super::{load_charts, load_config};

/// Number of leaderboard entries echoed after a run
const SUMMARY_ENTRIES: usize = 5;

pub fn run(
    input: &str,
    output: &str,
    config: Option<&str>,
    baseline_id: u32,
    baseline_difficulty: Difficulty,
    fallback_first: bool,
) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    info!("metacalc {} - {}", current_version, Local::now().format("%Y-%m-%d %H:%M:%S"));

    let config = load_config(config)?;
    let charts = load_charts(input)?;
    info!("Loaded {} entries from {}", charts.len(), input);

    let key = ChartKey::new(baseline_id, baseline_difficulty);
    let selector = if fallback_first {
        BaselineSelector::ChartOrFirst(key)
    } else {
        BaselineSelector::Chart(key)
    };

    let result = MetaCalculator::new(config)
        .with_baseline(selector)
        .run(&charts, Local::now().naive_local())?;

    write_outputs(output, &result)
        .with_context(|| format!("Failed to write output to {}", output))?;

    if let Some(top) = result.rankings_all.rankings.get(Metric::PtPerHourMulti) {
        info!("Top {} by multi pt/hour:", SUMMARY_ENTRIES);
        for entry in top.iter().take(SUMMARY_ENTRIES) {
            info!("  {}", format_summary_line(entry));
        }
    }

    Ok(())
}

fn format_summary_line(entry: &RankingEntry) -> String {
    format!(
        "{}. ID={} {}: {} pt/h (PSPI={})",
        entry.rank,
        entry.music_id,
        entry.difficulty,
        entry.value,
        entry.relative_index.unwrap_or(0.0)
    )
}
