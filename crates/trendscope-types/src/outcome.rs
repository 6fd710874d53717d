//! Outcome of a single fetch-with-retry operation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::TimeSeriesPoint;

/// Message reported once the attempt budget is spent on rate-limit errors.
const RATE_LIMITED_MESSAGE: &str = "rate limited, retry later";

/// Classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The data source rejected the request for exceeding its rate limit.
    /// Transient: worth retrying later.
    RateLimited,
    /// Any other failure. Permanent: retrying will not help.
    Other,
}

impl FailureKind {
    /// Returns the short identifier used in serialized output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RateLimited => "rate_limit",
            Self::Other => "other",
        }
    }

    /// Returns true if a later attempt might succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified fetch failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchFailure {
    /// Failure classification.
    pub kind: FailureKind,
    /// Human-readable message.
    pub message: String,
}

impl FetchFailure {
    /// Creates a failure reporting an exhausted rate-limit budget.
    #[must_use]
    pub fn rate_limited() -> Self {
        Self {
            kind: FailureKind::RateLimited,
            message: RATE_LIMITED_MESSAGE.to_string(),
        }
    }

    /// Creates a permanent failure carrying the original error text.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Other,
            message: message.into(),
        }
    }
}

/// The result handed back to the embedding layer. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The data source returned a non-empty series.
    Success {
        /// Value on the exact target date, if the source reported one.
        target_value: Option<u32>,
        /// Series in source order.
        series: Vec<TimeSeriesPoint>,
    },
    /// The data source returned an empty series. Authoritative, not an error.
    NoData {
        /// The requested keyword.
        keyword: String,
        /// The requested target date.
        date: NaiveDate,
    },
    /// The fetch failed. Carries no series data.
    Failure(FetchFailure),
}

impl FetchOutcome {
    /// Returns true for [`FetchOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure classification, if this is a failure.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure(failure) => Some(failure.kind),
            _ => None,
        }
    }

    /// Returns the series for a successful outcome, or an empty slice.
    #[must_use]
    pub fn series(&self) -> &[TimeSeriesPoint] {
        match self {
            Self::Success { series, .. } => series,
            _ => &[],
        }
    }
}

impl From<FetchFailure> for FetchOutcome {
    fn from(failure: FetchFailure) -> Self {
        Self::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_failure() {
        let failure = FetchFailure::rate_limited();
        assert_eq!(failure.kind, FailureKind::RateLimited);
        assert_eq!(failure.to_string(), "rate limited, retry later");
        assert!(failure.kind.is_transient());
    }

    #[test]
    fn test_other_failure_keeps_message() {
        let failure = FetchFailure::other("The request failed: code 400");
        assert_eq!(failure.kind, FailureKind::Other);
        assert_eq!(failure.to_string(), "The request failed: code 400");
        assert!(!failure.kind.is_transient());
    }

    #[test]
    fn test_outcome_accessors() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let success = FetchOutcome::Success {
            target_value: Some(10),
            series: vec![TimeSeriesPoint::new(date, 10)],
        };
        assert!(success.is_success());
        assert_eq!(success.series().len(), 1);
        assert_eq!(success.failure_kind(), None);

        let failure: FetchOutcome = FetchFailure::rate_limited().into();
        assert!(!failure.is_success());
        assert!(failure.series().is_empty());
        assert_eq!(failure.failure_kind(), Some(FailureKind::RateLimited));
    }
}
