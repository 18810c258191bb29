//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod config;
pub mod run;
pub mod score;

use anyhow::{Context, Result};
use metacalc_core::{ChartMetadata, ScoringConfig, load_chart_metadata};

/// Load the scoring configuration from a TOML file, or the defaults
pub fn load_config(path: Option<&str>) -> Result<ScoringConfig> {
    match path {
        Some(path) => ScoringConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Ok(ScoringConfig::default()),
    }
}

pub fn load_charts(path: &str) -> Result<Vec<ChartMetadata>> {
    load_chart_metadata(path)
        .with_context(|| format!("Failed to read chart metadata from {}", path))
}
