//! JSON output files

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::pipeline::PipelineOutput;

pub const RECORDS_FILE: &str = "music_metas.json";
pub const RANKINGS_ALL_FILE: &str = "rankings_all.json";
pub const RANKINGS_BEST_FILE: &str = "rankings_best.json";

/// Paths of the files written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub records: PathBuf,
    pub rankings_all: PathBuf,
    pub rankings_best: PathBuf,
}

impl OutputPaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            records: dir.join(RECORDS_FILE),
            rankings_all: dir.join(RANKINGS_ALL_FILE),
            rankings_best: dir.join(RANKINGS_BEST_FILE),
        }
    }
}

/// Write a value as pretty-printed JSON (two-space indent)
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the record list and both ranking documents into `dir`, creating it if needed
pub fn write_outputs<P: AsRef<Path>>(dir: P, output: &PipelineOutput) -> Result<OutputPaths> {
    fs::create_dir_all(dir.as_ref())?;
    let paths = OutputPaths::in_dir(dir);

    write_json(&paths.records, &output.records)?;
    info!("Saved: {}", paths.records.display());

    write_json(&paths.rankings_all, &output.rankings_all)?;
    info!(
        "Saved: {} ({} charts)",
        paths.rankings_all.display(),
        output.rankings_all.total_charts
    );

    write_json(&paths.rankings_best, &output.rankings_best)?;
    info!(
        "Saved: {} ({} songs)",
        paths.rankings_best.display(),
        output.rankings_best.total_songs
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse_chart_metadata;
    use crate::pipeline::MetaCalculator;
    use chrono::NaiveDate;
    use serde_json::Value;
    use tempfile::TempDir;

    const CHARTS: &str = r#"[
        {
            "music_id": 1, "difficulty": "easy", "music_time": 90, "title": "Tell Your World",
            "base_score": 0.3, "base_score_auto": 0.3,
            "skill_score_solo": [0.02, 0.02, 0.02, 0.02, 0.02, 0.01],
            "skill_score_multi": [0.02, 0.02, 0.02, 0.02, 0.02, 0.01],
            "fever_score": 0.05
        },
        {
            "music_id": 3, "difficulty": "append",
            "base_score": 1.0,
            "skill_score_solo": [0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
            "skill_score_multi": [0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
            "fever_score": 0.1
        }
    ]"#;

    fn output() -> PipelineOutput {
        let charts = parse_chart_metadata(CHARTS).unwrap();
        let at = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        MetaCalculator::default().run(&charts, at).unwrap()
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_write_outputs_creates_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("out");

        let paths = write_outputs(&dir, &output()).unwrap();
        assert_eq!(paths, OutputPaths::in_dir(&dir));

        let records = read(&paths.records);
        assert_eq!(records.as_array().unwrap().len(), 2);
        assert_eq!(records[0]["music_id"], 3);
        assert_eq!(records[1]["title"], "Tell Your World");
        assert_eq!(records[1]["pspi_solo_score"], 1000.0);

        let all = read(&paths.rankings_all);
        assert_eq!(all["total_charts"], 2);
        assert_eq!(all["generated_at"], "2024-06-01 00:00:00");

        let best = read(&paths.rankings_best);
        assert_eq!(best["total_songs"], 2);
        assert_eq!(best["rankings"]["solo_score"][0]["music_id"], 3);
    }

    #[test]
    fn test_output_is_indented() {
        let temp_dir = TempDir::new().unwrap();
        let paths = write_outputs(temp_dir.path(), &output()).unwrap();

        let text = fs::read_to_string(&paths.rankings_all).unwrap();
        assert!(text.starts_with("{\n  \"total_charts\": 2,"));
    }

    #[test]
    fn test_write_outputs_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutputPaths::in_dir(temp_dir.path());
        fs::write(&paths.records, "stale").unwrap();

        write_outputs(temp_dir.path(), &output()).unwrap();
        assert!(read(&paths.records).is_array());
    }
}
