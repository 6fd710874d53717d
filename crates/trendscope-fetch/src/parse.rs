//! Parsing of Google Trends JSON responses.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{RawObservation, RawSeries};

/// Widget id of the interest-over-time chart in an explore response.
const TIMESERIES_WIDGET: &str = "TIMESERIES";

/// Errors that can occur while parsing a response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The body was not the expected JSON document.
    #[error("Malformed response: {0}")]
    Json(String),

    /// The explore response had no usable interest-over-time widget.
    #[error("Malformed response: no TIMESERIES widget")]
    MissingWidget,

    /// A timeline entry had an unreadable timestamp.
    #[error("Malformed response: invalid timestamp {0:?}")]
    InvalidTimestamp(String),
}

/// Token and request descriptor for the interest-over-time widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesWidget {
    /// Access token for the widget data endpoint.
    pub token: String,
    /// Request descriptor to echo back to the widget data endpoint.
    pub request: Value,
}

#[derive(Deserialize)]
struct ExploreResponse {
    #[serde(default)]
    widgets: Vec<Widget>,
}

#[derive(Deserialize)]
struct Widget {
    id: String,
    token: Option<String>,
    request: Option<Value>,
}

#[derive(Deserialize)]
struct MultilineResponse {
    default: Timeline,
}

#[derive(Deserialize)]
struct Timeline {
    #[serde(rename = "timelineData", default)]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Deserialize)]
struct TimelinePoint {
    time: String,
    #[serde(default)]
    value: Vec<u32>,
}

/// Drops the anti-JSON-hijacking prefix (`)]}'` or `)]}',`) Google puts in front of bodies.
fn strip_guard(body: &str) -> &str {
    body.find('{').map_or(body, |start| &body[start..])
}

/// Parses an explore response and returns the interest-over-time widget.
///
/// # Errors
///
/// Returns an error if the body is not JSON or has no usable widget.
pub fn parse_explore(body: &str) -> Result<TimeseriesWidget, ResponseError> {
    let response: ExploreResponse = serde_json::from_str(strip_guard(body))
        .map_err(|e| ResponseError::Json(e.to_string()))?;

    response
        .widgets
        .into_iter()
        .filter(|w| w.id == TIMESERIES_WIDGET)
        .find_map(|w| {
            Some(TimeseriesWidget {
                token: w.token?,
                request: w.request?,
            })
        })
        .ok_or(ResponseError::MissingWidget)
}

/// Parses an interest-over-time response into a raw series.
///
/// Each timeline entry carries its period start as unix seconds and one value
/// per compared keyword; only the first keyword is read.
///
/// # Errors
///
/// Returns an error if the body is not JSON or a timestamp is unreadable.
pub fn parse_multiline(body: &str) -> Result<RawSeries, ResponseError> {
    let response: MultilineResponse = serde_json::from_str(strip_guard(body))
        .map_err(|e| ResponseError::Json(e.to_string()))?;

    response
        .default
        .timeline_data
        .into_iter()
        .map(|point| {
            let timestamp = point
                .time
                .parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .ok_or_else(|| ResponseError::InvalidTimestamp(point.time.clone()))?;
            let value = point.value.first().copied().unwrap_or(0);
            Ok(RawObservation::new(timestamp, value))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(RawSeries::new)
}
