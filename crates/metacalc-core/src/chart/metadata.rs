use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::chart::Difficulty;
use crate::error::{Error, Result};

pub const DEFAULT_MUSIC_TIME: f64 = 120.0;
pub const DEFAULT_EVENT_RATE: u32 = 100;
pub const DEFAULT_BASE_SCORE_AUTO: f64 = 0.7;

/// Fields a record cannot be scored without
pub const REQUIRED_FIELDS: [&str; 6] = [
    "music_id",
    "difficulty",
    "base_score",
    "skill_score_solo",
    "skill_score_multi",
    "fever_score",
];

/// Identifies one chart (song + difficulty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub music_id: u32,
    pub difficulty: Difficulty,
}

impl ChartKey {
    pub fn new(music_id: u32, difficulty: Difficulty) -> Self {
        Self {
            music_id,
            difficulty,
        }
    }
}

impl std::fmt::Display for ChartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID={} {}", self.music_id, self.difficulty)
    }
}

/// Metadata for one chart as published in the music meta feed.
///
/// Optional fields keep their absence; use the accessors for the effective
/// values. Keys this struct does not model are kept in `extra`, and the record
/// as read is kept in `source` so it can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartMetadata {
    pub music_id: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub music_time: Option<f64>,
    #[serde(default)]
    pub event_rate: Option<u32>,
    pub base_score: f64,
    #[serde(default)]
    pub base_score_auto: Option<f64>,
    pub skill_score_solo: [f64; 6],
    #[serde(default)]
    pub skill_score_auto: Option<[f64; 6]>,
    pub skill_score_multi: [f64; 6],
    pub fever_score: f64,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
    #[serde(skip)]
    pub source: Option<Map<String, JsonValue>>,
}

impl ChartMetadata {
    pub fn key(&self) -> ChartKey {
        ChartKey::new(self.music_id, self.difficulty)
    }

    /// Playback duration in seconds
    pub fn music_time(&self) -> f64 {
        self.music_time.unwrap_or(DEFAULT_MUSIC_TIME)
    }

    pub fn event_rate(&self) -> u32 {
        self.event_rate.unwrap_or(DEFAULT_EVENT_RATE)
    }

    pub fn base_score_auto(&self) -> f64 {
        self.base_score_auto.unwrap_or(DEFAULT_BASE_SCORE_AUTO)
    }

    /// Auto skill scores, falling back to the solo ones
    pub fn skill_score_auto(&self) -> &[f64; 6] {
        self.skill_score_auto.as_ref().unwrap_or(&self.skill_score_solo)
    }

    /// The record as a JSON object: the source object when the record was
    /// parsed, otherwise one rebuilt from the typed fields
    pub fn to_json_map(&self) -> Map<String, JsonValue> {
        if let Some(source) = &self.source {
            return source.clone();
        }

        let mut map = self.extra.clone();
        map.insert("music_id".to_string(), self.music_id.into());
        map.insert("difficulty".to_string(), self.difficulty.as_str().into());
        if let Some(music_time) = self.music_time {
            map.insert("music_time".to_string(), music_time.into());
        }
        if let Some(event_rate) = self.event_rate {
            map.insert("event_rate".to_string(), event_rate.into());
        }
        map.insert("base_score".to_string(), self.base_score.into());
        if let Some(base_score_auto) = self.base_score_auto {
            map.insert("base_score_auto".to_string(), base_score_auto.into());
        }
        map.insert("skill_score_solo".to_string(), self.skill_score_solo.to_vec().into());
        if let Some(skill_score_auto) = self.skill_score_auto {
            map.insert("skill_score_auto".to_string(), skill_score_auto.to_vec().into());
        }
        map.insert("skill_score_multi".to_string(), self.skill_score_multi.to_vec().into());
        map.insert("fever_score".to_string(), self.fever_score.into());
        map
    }
}

/// Parse a JSON array of chart records.
///
/// Every record is checked for the fields in [`REQUIRED_FIELDS`] before it is
/// deserialized, so a missing field is reported with its record index.
pub fn parse_chart_metadata(json: &str) -> Result<Vec<ChartMetadata>> {
    let value: JsonValue = serde_json::from_str(json)?;
    let JsonValue::Array(items) = value else {
        return Err(Error::InvalidInput(
            "expected a JSON array of chart records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| chart_from_value(index, item))
        .collect()
}

/// Read and parse a chart metadata file
pub fn load_chart_metadata<P: AsRef<Path>>(path: P) -> Result<Vec<ChartMetadata>> {
    let content = fs::read_to_string(path)?;
    parse_chart_metadata(&content)
}

fn chart_from_value(index: usize, value: JsonValue) -> Result<ChartMetadata> {
    let Some(object) = value.as_object() else {
        return Err(Error::InvalidRecord {
            index,
            message: "expected a JSON object".to_string(),
        });
    };

    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|field| object.get(*field).is_none_or(JsonValue::is_null))
    {
        return Err(Error::MissingField { index, field });
    }

    let source = object.clone();
    let mut chart: ChartMetadata =
        serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
            index,
            message: e.to_string(),
        })?;
    chart.source = Some(source);
    Ok(chart)
}
