//! Phenology (BBCH) and growth models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Confidence above which the dashboard highlights a BBCH estimate (percent)
pub const HIGH_CONFIDENCE_PERCENT: u32 = 80;

/// Estimated BBCH growth stage of a field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BbchRecord {
    pub current_stage: u8,
    pub stage_name: String,
    /// Model confidence in [0, 1]
    pub confidence_score: f32,
    pub last_updated: DateTime<Utc>,
    pub history: Vec<BbchHistoryEntry>,
}

/// A past stage observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BbchHistoryEntry {
    pub date: NaiveDate,
    pub stage: u8,
}

impl BbchRecord {
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence_score * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn is_high_confidence(&self) -> bool {
        self.confidence_percent() > HIGH_CONFIDENCE_PERCENT
    }
}

/// One day of stem growth and soil moisture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthSample {
    pub date: DateTime<Utc>,
    /// Stem growth in millimetres
    pub growth_mm: Decimal,
    pub moisture_percent: i32,
}

/// Growth over the whole series: last sample minus first
pub fn cumulative_growth(samples: &[GrowthSample]) -> Decimal {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => last.growth_mm - first.growth_mm,
        _ => Decimal::ZERO,
    }
}

/// Days whose soil moisture fell below the critical threshold
pub fn stress_days(samples: &[GrowthSample], moisture_threshold_percent: i32) -> usize {
    samples
        .iter()
        .filter(|s| s.moisture_percent < moisture_threshold_percent)
        .count()
}
