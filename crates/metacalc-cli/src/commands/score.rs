//! Score command for inspecting a single chart.

use anyhow::{Result, bail};
use metacalc_core::{ChartKey, Difficulty, LiveBonus, PlayMode, derive_record, event_points_for};
use serde_json::{Map, Value, json};

use super::{load_charts, load_config};

pub fn run(
    input: &str,
    music_id: u32,
    difficulty: Difficulty,
    event_bonus: Option<u32>,
    boost_tier: Option<u8>,
    config: Option<&str>,
) -> Result<()> {
    let config = load_config(config)?;
    let charts = load_charts(input)?;

    let key = ChartKey::new(music_id, difficulty);
    let Some(chart) = charts.iter().find(|chart| chart.key() == key) else {
        bail!("Chart {} not found in {}", key, input);
    };

    let mut value = serde_json::to_value(derive_record(chart, &config))?;

    if event_bonus.is_some() || boost_tier.is_some() {
        let bonus = LiveBonus {
            event_bonus_pct: event_bonus.unwrap_or(0),
            boost_tier: boost_tier.unwrap_or(0),
        };
        let mut points = Map::new();
        for mode in PlayMode::ALL {
            points.insert(
                mode.as_str().to_string(),
                json!(event_points_for(chart, mode, bonus, &config)),
            );
        }
        if let Value::Object(record) = &mut value {
            record.insert("custom_bonus".to_string(), json!(bonus));
            record.insert("custom_points".to_string(), Value::Object(points));
        }
    }

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
