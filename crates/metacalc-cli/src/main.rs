mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("metacalc=info,metacalc_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Run {
            input,
            output,
            config,
            baseline_id,
            baseline_difficulty,
            fallback_first,
        } => commands::run::run(
            &input,
            &output,
            config.as_deref(),
            baseline_id,
            baseline_difficulty,
            fallback_first,
        ),
        Command::Score {
            input,
            music_id,
            difficulty,
            event_bonus,
            boost_tier,
            config,
        } => commands::score::run(
            &input,
            music_id,
            difficulty,
            event_bonus,
            boost_tier,
            config.as_deref(),
        ),
        Command::Config => commands::config::run(),
    }
}
