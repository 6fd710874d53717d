//! Time-series point representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated interest value.
///
/// Values are relative search interest as reported by the data source
/// (0-100 for Google Trends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Interest value.
    pub value: u32,
}

impl TimeSeriesPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(date: NaiveDate, value: u32) -> Self {
        Self { date, value }
    }
}
