//! Date window submitted to the data source.

use chrono::{NaiveDate, TimeDelta};

/// Number of days the default window reaches back from the target date.
///
/// The data source normalizes a multi-day window more reliably than a single
/// day; 8 days of lookback plus the target gives a 9-day inclusive span.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 8;

/// A fixed-width, inclusive range of dates ending at the target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    /// Computes the default window for a target date.
    ///
    /// The window ends on `target` and starts [`DEFAULT_LOOKBACK_DAYS`] earlier.
    #[must_use]
    pub fn ending_at(target: NaiveDate) -> Self {
        Self::with_lookback(target, DEFAULT_LOOKBACK_DAYS)
    }

    /// Computes a window ending on `target` that reaches back `lookback_days`.
    ///
    /// Saturates at the earliest representable date.
    #[must_use]
    pub fn with_lookback(target: NaiveDate, lookback_days: u32) -> Self {
        let start = target
            .checked_sub_signed(TimeDelta::days(i64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: target }
    }

    /// Renders the window in the `"YYYY-MM-DD YYYY-MM-DD"` form the data source accepts.
    #[must_use]
    pub fn timeframe(&self) -> String {
        format!(
            "{} {}",
            self.start.format(crate::DATE_FORMAT),
            self.end.format(crate::DATE_FORMAT)
        )
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
