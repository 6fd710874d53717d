//! Spike scoring against the value one week earlier.

use chrono::NaiveDate;
use trendscope_types::TimeSeriesPoint;

use crate::{SpikeDetails, SpikeScore};

/// Number of points between the baseline and the target.
pub const BASELINE_OFFSET_DAYS: usize = 7;

/// Values at or above this count as sustained interest when the week peaked at 100.
const SUSTAINED_THRESHOLD: u32 = 90;
const PEAK_VALUE: u32 = 100;
const EXTREME_RATIO: f64 = 4.0;
const SIGNIFICANT_RATIO: f64 = 2.5;

/// Scores the spike on `target_date` within `series`.
///
/// The baseline is the point [`BASELINE_OFFSET_DAYS`] positions before the
/// target; the trailing week is the eight points ending at the target.
///
/// | Condition | Score |
/// |-----------|-------|
/// | target >= 90 and the trailing week peaked at 100 | 2 |
/// | target / baseline > 4 | 2 |
/// | target / baseline >= 2.5 | 1 |
/// | otherwise | 0 |
///
/// A missing or zero target value, a target date absent from the series, or
/// fewer than seven points of history all score 0 without details.
#[must_use]
pub fn score_spike(
    target_date: NaiveDate,
    target_value: Option<u32>,
    series: &[TimeSeriesPoint],
) -> SpikeScore {
    let Some(target) = target_value.filter(|v| *v > 0) else {
        return SpikeScore::unscored("No data available for this date");
    };

    let Some(index) = series.iter().position(|p| p.date == target_date) else {
        return SpikeScore::unscored("Target date not found in data");
    };

    let Some(baseline_index) = index.checked_sub(BASELINE_OFFSET_DAYS) else {
        return SpikeScore::unscored("Insufficient data (need 7 days of history)");
    };

    let baseline = series[baseline_index];
    let trailing = &series[baseline_index..=index];

    // trailing always holds the target point
    let max_trailing = trailing.iter().map(|p| p.value).max().unwrap_or(target);
    let max_date = trailing
        .iter()
        .find(|p| p.value == max_trailing)
        .map_or(target_date, |p| p.date);

    let ratio = if baseline.value > 0 {
        f64::from(target) / f64::from(baseline.value)
    } else {
        0.0
    };

    let increase = format!(
        "{ratio:.1}x increase from {} on {}",
        baseline.value, baseline.date
    );
    let (score, reason) = if target >= SUSTAINED_THRESHOLD && max_trailing == PEAK_VALUE {
        (
            2,
            format!(
                "High sustained interest: {target} (peak of {PEAK_VALUE} on {max_date}, major event detected)"
            ),
        )
    } else if ratio > EXTREME_RATIO {
        (2, format!("Extreme spike: {target} ({increase})"))
    } else if ratio >= SIGNIFICANT_RATIO {
        (1, format!("Significant spike: {target} ({increase})"))
    } else {
        (0, format!("No spike detected: {target} (only {increase})"))
    };

    SpikeScore {
        score,
        reason,
        details: Some(SpikeDetails {
            target_date,
            target_value: target,
            baseline,
            spike_ratio: (ratio * 100.0).round() / 100.0,
            max_trailing,
            max_date,
            trailing: trailing.to_vec(),
        }),
    }
}
