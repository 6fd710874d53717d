//! Serializable view of a fetch outcome.

use serde::{Serialize, Serializer};
use trendscope_score::SpikeScore;
use trendscope_types::{FetchOutcome, TimeSeriesPoint};

/// Error text reported when the data source returned an empty series.
pub const NO_DATA_MESSAGE: &str = "No data found for keyword";

/// A fetch outcome together with the request it answers.
///
/// The keyword and date are kept as given on input so that requests rejected
/// before fetching can be reported too.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// The requested keyword.
    pub keyword: &'a str,
    /// The requested target date, as given.
    pub date: &'a str,
    /// The outcome of the fetch.
    pub outcome: &'a FetchOutcome,
    /// Spike score, for successful outcomes that were scored.
    pub score: Option<&'a SpikeScore>,
}

impl<'a> Report<'a> {
    /// Creates a report without a score.
    #[must_use]
    pub const fn new(keyword: &'a str, date: &'a str, outcome: &'a FetchOutcome) -> Self {
        Self {
            keyword,
            date,
            outcome,
            score: None,
        }
    }

    /// Attaches a spike score.
    #[must_use]
    pub const fn with_score(mut self, score: &'a SpikeScore) -> Self {
        self.score = Some(score);
        self
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Record<'a> {
    Success {
        keyword: &'a str,
        target_date: &'a str,
        target_value: Option<u32>,
        all_data: &'a [TimeSeriesPoint],
        #[serde(skip_serializing_if = "Option::is_none")]
        scoring: Option<&'a SpikeScore>,
    },
    Error {
        error: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        error_type: Option<&'static str>,
        keyword: &'a str,
        date: &'a str,
    },
}

impl<'a> From<&Report<'a>> for Record<'a> {
    fn from(report: &Report<'a>) -> Self {
        match report.outcome {
            FetchOutcome::Success {
                target_value,
                series,
            } => Self::Success {
                keyword: report.keyword,
                target_date: report.date,
                target_value: *target_value,
                all_data: series,
                scoring: report.score,
            },
            FetchOutcome::NoData { .. } => Self::Error {
                error: NO_DATA_MESSAGE,
                error_type: None,
                keyword: report.keyword,
                date: report.date,
            },
            FetchOutcome::Failure(failure) => Self::Error {
                error: &failure.message,
                error_type: Some(failure.kind.as_str()),
                keyword: report.keyword,
                date: report.date,
            },
        }
    }
}

impl Serialize for Report<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Record::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use trendscope_types::FetchFailure;

    #[test]
    fn test_success_shape() {
        let outcome = FetchOutcome::Success {
            target_value: Some(20),
            series: vec![
                TimeSeriesPoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 10),
                TimeSeriesPoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 20),
            ],
        };
        let value = serde_json::to_value(Report::new("covid", "2024-01-02", &outcome)).unwrap();

        assert_eq!(
            value,
            json!({
                "keyword": "covid",
                "target_date": "2024-01-02",
                "target_value": 20,
                "all_data": [
                    {"date": "2024-01-01", "value": 10},
                    {"date": "2024-01-02", "value": 20},
                ],
            })
        );
    }

    #[test]
    fn test_missing_target_is_null() {
        let outcome = FetchOutcome::Success {
            target_value: None,
            series: vec![TimeSeriesPoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 10)],
        };
        let value = serde_json::to_value(Report::new("covid", "2024-01-02", &outcome)).unwrap();

        assert!(value["target_value"].is_null());
    }

    #[test]
    fn test_no_data_shape() {
        let outcome = FetchOutcome::NoData {
            keyword: "zzqx".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        let value = serde_json::to_value(Report::new("zzqx", "2024-01-02", &outcome)).unwrap();

        assert_eq!(
            value,
            json!({"error": NO_DATA_MESSAGE, "keyword": "zzqx", "date": "2024-01-02"})
        );
    }

    #[test]
    fn test_failure_shape() {
        let outcome = FetchOutcome::Failure(FetchFailure::rate_limited());
        let value = serde_json::to_value(Report::new("covid", "2024-01-02", &outcome)).unwrap();

        assert_eq!(
            value,
            json!({
                "error": "rate limited, retry later",
                "error_type": "rate_limit",
                "keyword": "covid",
                "date": "2024-01-02",
            })
        );
    }

    #[test]
    fn test_score_attached() {
        let outcome = FetchOutcome::Success {
            target_value: None,
            series: Vec::new(),
        };
        let score = SpikeScore::unscored("No data available for this date");
        let report = Report::new("covid", "2024-01-02", &outcome).with_score(&score);
        let value = serde_json::to_value(report).unwrap();

        assert_eq!(value["scoring"]["score"], 0);
        assert!(value["scoring"]["details"].is_null());
    }
}
