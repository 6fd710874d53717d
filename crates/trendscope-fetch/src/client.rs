//! Data-source capability and error classification.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use trendscope_types::{DateWindow, FailureKind};

use crate::ResponseError;

/// HTTP status the data source uses for rate limiting.
const TOO_MANY_REQUESTS: u16 = 429;

/// A single observation in the data source's native form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawObservation {
    /// Start of the observed period (UTC).
    pub timestamp: DateTime<Utc>,
    /// Interest value for the keyword.
    pub value: u32,
}

impl RawObservation {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, value: u32) -> Self {
        Self { timestamp, value }
    }
}

/// Series returned by a [`TrendsClient`], in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSeries {
    observations: Vec<RawObservation>,
}

impl RawSeries {
    /// Creates a series from observations, keeping their order.
    #[must_use]
    pub const fn new(observations: Vec<RawObservation>) -> Self {
        Self { observations }
    }

    /// Returns true if the source reported nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Iterates over the observations in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, RawObservation> {
        self.observations.iter()
    }
}

impl From<Vec<RawObservation>> for RawSeries {
    fn from(observations: Vec<RawObservation>) -> Self {
        Self::new(observations)
    }
}

impl<'a> IntoIterator for &'a RawSeries {
    type Item = &'a RawObservation;
    type IntoIter = std::slice::Iter<'a, RawObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors a [`TrendsClient`] can report.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The data source answered with a non-success status.
    #[error("The request failed: Google returned a response with code {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be understood.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Any other collaborator failure, described by its message.
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Returns the HTTP status associated with the error, when known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Response(_) | Self::Other(_) => None,
        }
    }
}

/// Decides whether a client error is transient (rate limited) or permanent.
///
/// Rate limiting is recognized by a 429 status. Opaque collaborator messages
/// ([`ClientError::Other`]) are rate limited when they mention `"429"` or
/// `"Too Many Requests"`. Transport errors are never scanned: their text
/// embeds the request URL, and with it the keyword.
#[must_use]
pub fn classify(error: &ClientError) -> FailureKind {
    if error.status() == Some(TOO_MANY_REQUESTS) {
        return FailureKind::RateLimited;
    }

    match error {
        ClientError::Other(message)
            if message.contains("429") || message.contains("Too Many Requests") =>
        {
            FailureKind::RateLimited
        }
        _ => FailureKind::Other,
    }
}

/// The external source of search-interest data.
///
/// Implementations fetch the per-date series for one keyword over a window.
/// The retry loop depends only on this contract, so tests can substitute a
/// scripted fake for the real HTTP client.
#[async_trait]
pub trait TrendsClient: Send + Sync {
    /// Fetches the interest-over-time series for `keyword` within `window`.
    ///
    /// # Errors
    ///
    /// Returns an error carrying a message and, where applicable, an HTTP status.
    async fn interest_over_time(
        &self,
        keyword: &str,
        window: &DateWindow,
    ) -> Result<RawSeries, ClientError>;
}
