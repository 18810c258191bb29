//! Derived metrics tracked by the normalizer and the rankings.

use serde::Serialize;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::derivation::DerivedRecord;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    AutoScore,
    SoloScore,
    MultiScore,
    AutoPtMax,
    SoloPtMax,
    MultiPtMax,
    PtPerHourAuto,
    PtPerHourMulti,
    CyclesAuto,
    CyclesMulti,
}

impl Metric {
    /// Metrics that get a relative index, in output order
    pub const INDEXED: [Metric; 8] = [
        Metric::AutoScore,
        Metric::SoloScore,
        Metric::MultiScore,
        Metric::AutoPtMax,
        Metric::SoloPtMax,
        Metric::MultiPtMax,
        Metric::PtPerHourAuto,
        Metric::PtPerHourMulti,
    ];

    /// Field name in the derived record (e.g., "pt_per_hour_multi")
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Cycle counts have no relative index
    pub fn has_relative_index(&self) -> bool {
        !matches!(self, Self::CyclesAuto | Self::CyclesMulti)
    }

    pub fn value(&self, record: &DerivedRecord) -> MetricValue {
        match self {
            Self::AutoScore => MetricValue::Int(record.auto_score),
            Self::SoloScore => MetricValue::Int(record.solo_score),
            Self::MultiScore => MetricValue::Int(record.multi_score),
            Self::AutoPtMax => MetricValue::Int(record.auto_pt_max),
            Self::SoloPtMax => MetricValue::Int(record.solo_pt_max),
            Self::MultiPtMax => MetricValue::Int(record.multi_pt_max),
            Self::PtPerHourAuto => MetricValue::Int(record.pt_per_hour_auto),
            Self::PtPerHourMulti => MetricValue::Int(record.pt_per_hour_multi),
            Self::CyclesAuto => MetricValue::Real(record.cycles_auto),
            Self::CyclesMulti => MetricValue::Real(record.cycles_multi),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of one metric; integers for scores and points, reals for cycle counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(u32),
    Real(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Real(v) => v,
        }
    }
}

impl PartialOrd for MetricValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
        }
    }
}

/// Relative indices (baseline = 1000) of one record, serialized as `pspi_<metric>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RelativeIndices {
    #[serde(rename = "pspi_auto_score", skip_serializing_if = "Option::is_none")]
    pub auto_score: Option<f64>,
    #[serde(rename = "pspi_solo_score", skip_serializing_if = "Option::is_none")]
    pub solo_score: Option<f64>,
    #[serde(rename = "pspi_multi_score", skip_serializing_if = "Option::is_none")]
    pub multi_score: Option<f64>,
    #[serde(rename = "pspi_auto_pt_max", skip_serializing_if = "Option::is_none")]
    pub auto_pt_max: Option<f64>,
    #[serde(rename = "pspi_solo_pt_max", skip_serializing_if = "Option::is_none")]
    pub solo_pt_max: Option<f64>,
    #[serde(rename = "pspi_multi_pt_max", skip_serializing_if = "Option::is_none")]
    pub multi_pt_max: Option<f64>,
    #[serde(rename = "pspi_pt_per_hour_auto", skip_serializing_if = "Option::is_none")]
    pub pt_per_hour_auto: Option<f64>,
    #[serde(rename = "pspi_pt_per_hour_multi", skip_serializing_if = "Option::is_none")]
    pub pt_per_hour_multi: Option<f64>,
}

impl RelativeIndices {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::AutoScore => self.auto_score,
            Metric::SoloScore => self.solo_score,
            Metric::MultiScore => self.multi_score,
            Metric::AutoPtMax => self.auto_pt_max,
            Metric::SoloPtMax => self.solo_pt_max,
            Metric::MultiPtMax => self.multi_pt_max,
            Metric::PtPerHourAuto => self.pt_per_hour_auto,
            Metric::PtPerHourMulti => self.pt_per_hour_multi,
            Metric::CyclesAuto | Metric::CyclesMulti => None,
        }
    }

    /// Store an index; ignored for metrics without one
    pub fn set(&mut self, metric: Metric, index: f64) {
        let slot = match metric {
            Metric::AutoScore => &mut self.auto_score,
            Metric::SoloScore => &mut self.solo_score,
            Metric::MultiScore => &mut self.multi_score,
            Metric::AutoPtMax => &mut self.auto_pt_max,
            Metric::SoloPtMax => &mut self.solo_pt_max,
            Metric::MultiPtMax => &mut self.multi_pt_max,
            Metric::PtPerHourAuto => &mut self.pt_per_hour_auto,
            Metric::PtPerHourMulti => &mut self.pt_per_hour_multi,
            Metric::CyclesAuto | Metric::CyclesMulti => return,
        };
        *slot = Some(index);
    }

    pub fn is_empty(&self) -> bool {
        Metric::INDEXED.iter().all(|m| self.get(*m).is_none())
    }
}
