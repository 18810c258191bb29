//! Relative index normalization against a baseline chart.
//!
//! Every indexed metric of every record is expressed relative to the baseline
//! record's value of the same metric, with the baseline fixed at 1000.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::chart::{ChartKey, Difficulty};
use crate::derivation::DerivedRecord;
use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::round::round_half_even;

/// Index value assigned to the baseline itself
pub const BASELINE_INDEX: f64 = 1000.0;

/// Strategy for picking the baseline record
pub trait BaselineStrategy {
    /// Pick the baseline among fully derived records
    fn select<'a>(&self, records: &'a [DerivedRecord]) -> Result<&'a DerivedRecord>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineSelector {
    /// The record with this key; missing is an error
    Chart(ChartKey),
    /// The record at this position in the derived list
    Index(usize),
    /// The record with this key, else the first record (with a warning)
    ChartOrFirst(ChartKey),
}

impl BaselineSelector {
    /// Song 1, easy
    pub const STANDARD_CHART: ChartKey = ChartKey {
        music_id: 1,
        difficulty: Difficulty::Easy,
    };
}

impl Default for BaselineSelector {
    fn default() -> Self {
        Self::Chart(Self::STANDARD_CHART)
    }
}

impl BaselineStrategy for BaselineSelector {
    fn select<'a>(&self, records: &'a [DerivedRecord]) -> Result<&'a DerivedRecord> {
        match *self {
            Self::Chart(key) => find_chart(records, key).ok_or(Error::BaselineNotFound(key)),
            Self::Index(index) => records.get(index).ok_or(Error::BaselineIndexOutOfRange {
                index,
                len: records.len(),
            }),
            Self::ChartOrFirst(key) => match find_chart(records, key) {
                Some(record) => Ok(record),
                None => {
                    let first = records.first().ok_or(Error::EmptyInput)?;
                    warn!(
                        "Baseline {} not found, using first entry {}",
                        key,
                        first.key()
                    );
                    Ok(first)
                }
            },
        }
    }
}

/// Baseline chosen by a caller-supplied predicate (first match wins)
pub struct BaselinePredicate<F>(pub F);

impl<F> BaselineStrategy for BaselinePredicate<F>
where
    F: Fn(&DerivedRecord) -> bool,
{
    fn select<'a>(&self, records: &'a [DerivedRecord]) -> Result<&'a DerivedRecord> {
        records
            .iter()
            .find(|record| (self.0)(record))
            .ok_or(Error::NoBaselineMatch)
    }
}

fn find_chart(records: &[DerivedRecord], key: ChartKey) -> Option<&DerivedRecord> {
    records.iter().find(|record| record.key() == key)
}

/// Baseline values of every indexed metric, detached from the record list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineMetrics {
    pub key: ChartKey,
    values: [f64; Metric::INDEXED.len()],
}

impl BaselineMetrics {
    pub fn from_record(record: &DerivedRecord) -> Self {
        Self {
            key: record.key(),
            values: Metric::INDEXED.map(|metric| metric.value(record).as_f64()),
        }
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        Metric::INDEXED
            .iter()
            .position(|m| *m == metric)
            .map(|i| self.values[i])
    }

    fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::INDEXED.iter().copied().zip(self.values.iter().copied())
    }
}

/// `round(value / baseline * 1000, 1)`, or 0 when the baseline is not positive
pub fn relative_index(value: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        round_half_even(value / baseline * BASELINE_INDEX, 1)
    } else {
        0.0
    }
}

/// Attach relative indices for every indexed metric to every record
pub fn normalize(records: &mut [DerivedRecord], baseline: &BaselineMetrics) {
    info!("Calculating relative indices against {}", baseline.key);

    for (metric, value) in baseline.iter() {
        if value <= 0.0 {
            warn!("Baseline {} is {}; its indices are set to 0", metric, value);
        }
    }

    records.par_iter_mut().for_each(|record| {
        for (metric, base) in baseline.iter() {
            let index = relative_index(metric.value(record).as_f64(), base);
            record.pspi.set(metric, index);
        }
    });
}

/// Select the baseline with `strategy`, then normalize every record against it
pub fn normalize_with<S>(records: &mut [DerivedRecord], strategy: &S) -> Result<BaselineMetrics>
where
    S: BaselineStrategy + ?Sized,
{
    let baseline = BaselineMetrics::from_record(strategy.select(records)?);
    normalize(records, &baseline);
    Ok(baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse_chart_metadata;
    use crate::config::ScoringConfig;
    use crate::derivation::derive_all;

    const CHARTS: &str = r#"[
        {
            "music_id": 2, "difficulty": "master", "music_time": 140.5, "event_rate": 120,
            "base_score": 1.1,
            "skill_score_solo": [0.05, 0.3, 0.1, 0.2, 0.15, 0.08],
            "skill_score_multi": [0.05, 0.3, 0.1, 0.2, 0.15, 0.08],
            "fever_score": 0.12
        },
        {
            "music_id": 1, "difficulty": "easy", "music_time": 90, "event_rate": 100,
            "base_score": 0.3, "base_score_auto": 0.3,
            "skill_score_solo": [0.02, 0.02, 0.02, 0.02, 0.02, 0.01],
            "skill_score_multi": [0.02, 0.02, 0.02, 0.02, 0.02, 0.01],
            "fever_score": 0.05
        }
    ]"#;

    fn records() -> Vec<DerivedRecord> {
        derive_all(
            &parse_chart_metadata(CHARTS).unwrap(),
            &ScoringConfig::default(),
        )
    }

    #[test]
    fn test_default_selector_finds_song_one_easy() {
        let records = records();
        let baseline = BaselineSelector::default().select(&records).unwrap();
        assert_eq!(baseline.key(), ChartKey::new(1, Difficulty::Easy));
    }

    #[test]
    fn test_missing_baseline_is_an_error() {
        let records = records();
        let key = ChartKey::new(99, Difficulty::Append);
        let err = BaselineSelector::Chart(key).select(&records).unwrap_err();
        assert!(matches!(err, Error::BaselineNotFound(k) if k == key));
    }

    #[test]
    fn test_chart_or_first_falls_back() {
        let records = records();
        let selector = BaselineSelector::ChartOrFirst(ChartKey::new(99, Difficulty::Append));
        let baseline = selector.select(&records).unwrap();
        assert_eq!(baseline.key(), ChartKey::new(2, Difficulty::Master));

        let err = selector.select(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_index_and_predicate_selectors() {
        let records = records();
        assert_eq!(
            BaselineSelector::Index(0).select(&records).unwrap().music_id(),
            2
        );
        assert!(matches!(
            BaselineSelector::Index(5).select(&records),
            Err(Error::BaselineIndexOutOfRange { index: 5, len: 2 })
        ));

        let predicate =
            BaselinePredicate(|r: &DerivedRecord| r.chart.difficulty == Difficulty::Easy);
        assert_eq!(predicate.select(&records).unwrap().music_id(), 1);

        let none = BaselinePredicate(|r: &DerivedRecord| r.music_id() > 100);
        assert!(matches!(none.select(&records), Err(Error::NoBaselineMatch)));
    }

    #[test]
    fn test_baseline_indexes_to_1000() {
        let mut records = records();
        normalize_with(&mut records, &BaselineSelector::default()).unwrap();

        let baseline = &records[1];
        for metric in Metric::INDEXED {
            assert_eq!(baseline.pspi.get(metric), Some(1000.0), "{metric}");
        }
    }

    #[test]
    fn test_indices_match_reference_values() {
        let mut records = records();
        normalize_with(&mut records, &BaselineSelector::default()).unwrap();

        let pspi = &records[0].pspi;
        assert_eq!(pspi.auto_score, Some(3980.8));
        assert_eq!(pspi.solo_score, Some(4942.3));
        assert_eq!(pspi.multi_score, Some(5212.9));
        assert_eq!(pspi.auto_pt_max, Some(1819.4));
        assert_eq!(pspi.solo_pt_max, Some(2019.4));
        assert_eq!(pspi.multi_pt_max, Some(2304.7));
        assert_eq!(pspi.pt_per_hour_auto, Some(1295.1));
        assert_eq!(pspi.pt_per_hour_multi, Some(1674.6));
    }

    #[test]
    fn test_zero_baseline_metric_gives_zero_index() {
        let mut records = records();
        records[1].pt_per_hour_multi = 0;

        let baseline = BaselineMetrics::from_record(&records[1]);
        normalize(&mut records, &baseline);

        assert_eq!(records[0].pspi.pt_per_hour_multi, Some(0.0));
        assert_eq!(records[1].pspi.pt_per_hour_multi, Some(0.0));
        assert_eq!(records[1].pspi.solo_score, Some(1000.0));
    }

    #[test]
    fn test_relative_index() {
        assert_eq!(relative_index(500.0, 1000.0), 500.0);
        assert_eq!(relative_index(1.0, 3.0), 333.3);
        assert_eq!(relative_index(5.0, 0.0), 0.0);
        assert_eq!(relative_index(5.0, -1.0), 0.0);
    }

    #[test]
    fn test_baseline_metrics_lookup() {
        let records = records();
        let baseline = BaselineMetrics::from_record(&records[1]);
        assert_eq!(baseline.value(Metric::SoloScore), Some(416_000.0));
        assert_eq!(baseline.value(Metric::CyclesMulti), None);
    }
}
