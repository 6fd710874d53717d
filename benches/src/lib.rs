//! Benchmark fixtures for trendscope.

use chrono::{DateTime, NaiveDate, TimeDelta};
use trendscope_lib::{RawObservation, RawSeries};

/// First day of every synthetic series.
pub const SERIES_START: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

/// Builds a daily raw series of `days` observations with a spike at the end.
#[must_use]
pub fn synthetic_series(days: usize) -> RawSeries {
    (0..days)
        .map(|i| {
            let timestamp = DateTime::from_timestamp(SERIES_START + 86_400 * i as i64, 0)
                .unwrap_or_default();
            let value = if i + 1 == days { 100 } else { (i % 40) as u32 + 5 };
            RawObservation::new(timestamp, value)
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns the date of the last observation of a series built by [`synthetic_series`].
#[must_use]
pub fn last_day(days: usize) -> NaiveDate {
    let start = DateTime::from_timestamp(SERIES_START, 0)
        .unwrap_or_default()
        .date_naive();
    start + TimeDelta::days(days.saturating_sub(1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendscope_lib::extract;

    #[test]
    fn test_synthetic_series_ends_on_spike() {
        let raw = synthetic_series(9);
        let extracted = extract(&raw, last_day(9));

        assert_eq!(raw.len(), 9);
        assert_eq!(extracted.target_value, Some(100));
        assert_eq!(last_day(9), NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    }
}
