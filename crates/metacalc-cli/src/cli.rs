//! CLI argument definitions for metacalc.

use clap::{Parser, Subcommand};
use metacalc_core::Difficulty;

#[derive(Parser)]
#[command(name = "metacalc")]
#[command(
    about = "Chart meta calculator: scores, event points, relative indices and rankings",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive all charts and write records and rankings
    Run {
        /// Chart metadata file (JSON array)
        #[arg(short, long, default_value = "music_metas.json")]
        input: String,
        /// Output directory
        #[arg(short, long, default_value = "output", env = "METACALC_OUTPUT_DIR")]
        output: String,
        /// Scoring configuration (TOML)
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
        /// Baseline song ID
        #[arg(long, default_value = "1")]
        baseline_id: u32,
        /// Baseline difficulty
        #[arg(long, default_value = "easy")]
        baseline_difficulty: Difficulty,
        /// Use the first record when the baseline chart is missing
        #[arg(long)]
        fallback_first: bool,
    },
    /// Print the derived figures of one chart
    Score {
        /// Chart metadata file (JSON array)
        #[arg(short, long, default_value = "music_metas.json")]
        input: String,
        /// Song ID
        #[arg(long)]
        music_id: u32,
        /// Difficulty
        #[arg(long)]
        difficulty: Difficulty,
        /// Event bonus percentage for the extra point figures
        #[arg(long)]
        event_bonus: Option<u32>,
        /// Boost tier (0-3) for the extra point figures
        #[arg(long)]
        boost_tier: Option<u8>,
        /// Scoring configuration (TOML)
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
    },
    /// Print the default scoring configuration as TOML
    Config,
}
