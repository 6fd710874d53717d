//! Spike score data structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trendscope_types::TimeSeriesPoint;

/// Result of scoring a series around its target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeScore {
    /// Score from 0 (no spike) to 2 (strong spike).
    pub score: u8,
    /// Human-readable explanation.
    pub reason: String,
    /// Supporting figures, absent when the series could not be scored.
    pub details: Option<SpikeDetails>,
}

impl SpikeScore {
    /// Creates a zero score for a series that could not be scored.
    #[must_use]
    pub fn unscored(reason: impl Into<String>) -> Self {
        Self {
            score: 0,
            reason: reason.into(),
            details: None,
        }
    }
}

/// Figures a spike score was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeDetails {
    /// The target date.
    pub target_date: NaiveDate,
    /// Value on the target date.
    pub target_value: u32,
    /// Point one week before the target.
    pub baseline: TimeSeriesPoint,
    /// Target value over baseline value, rounded to two decimals.
    pub spike_ratio: f64,
    /// Highest value in the trailing week, target included.
    pub max_trailing: u32,
    /// First date in the trailing week reaching that maximum.
    pub max_date: NaiveDate,
    /// The trailing week, target included.
    pub trailing: Vec<TimeSeriesPoint>,
}
