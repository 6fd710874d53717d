//! Normalization of a raw series into dated points.

use chrono::NaiveDate;
use trendscope_types::TimeSeriesPoint;

use crate::RawSeries;

/// The normalized series and the value on the target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Value of the first point dated exactly on the target date.
    pub target_value: Option<u32>,
    /// Points in source order.
    pub series: Vec<TimeSeriesPoint>,
}

/// Converts a raw series into dated points and looks up the target date.
///
/// Each observation is dated by its UTC calendar day. Source order is kept
/// as-is; re-sorting would hide ordering problems upstream. The target value
/// is absent when the source omitted the target date.
#[must_use]
pub fn extract(raw: &RawSeries, target_date: NaiveDate) -> Extracted {
    let series: Vec<TimeSeriesPoint> = raw
        .iter()
        .map(|obs| TimeSeriesPoint::new(obs.timestamp.date_naive(), obs.value))
        .collect();

    let target_value = series
        .iter()
        .find(|point| point.date == target_date)
        .map(|point| point.value);

    Extracted {
        target_value,
        series,
    }
}
