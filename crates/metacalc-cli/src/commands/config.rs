//! Config command for printing the default scoring configuration.

use anyhow::Result;
use metacalc_core::ScoringConfig;

pub fn run() -> Result<()> {
    print!("{}", ScoringConfig::default().to_toml()?);
    Ok(())
}
