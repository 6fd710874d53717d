//! Window, fetch and extract composed into one operation.

use rand::Rng;
use tracing::info;
use trendscope_types::{DEFAULT_LOOKBACK_DAYS, DateWindow, FetchOutcome, FetchRequest};

use crate::{Backoff, Extracted, RetryConfig, RetryingFetcher, TrendsClient, extract};

/// Tunables of the fetch pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Retry loop configuration.
    pub retry: RetryConfig,
    /// Days the window reaches back from the target date.
    pub lookback_days: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

/// Fetches the series around the request's target date and the value on it.
///
/// Never fails: every failure path is reported as [`FetchOutcome::Failure`].
/// An empty series is reported as [`FetchOutcome::NoData`] without retrying.
pub async fn fetch_trend<C, R>(
    client: &C,
    request: &FetchRequest,
    config: &FetchConfig,
    backoff: Backoff<R>,
) -> FetchOutcome
where
    C: TrendsClient + ?Sized,
    R: Rng + Send,
{
    let window = DateWindow::with_lookback(request.target_date(), config.lookback_days);
    let mut fetcher = RetryingFetcher::new(client, config.retry, backoff);

    match fetcher.fetch(request.keyword(), &window).await {
        Ok(raw) if raw.is_empty() => {
            info!(keyword = request.keyword(), %window, "No data found for keyword");
            FetchOutcome::NoData {
                keyword: request.keyword().to_string(),
                date: request.target_date(),
            }
        }
        Ok(raw) => {
            let Extracted {
                target_value,
                series,
            } = extract(&raw, request.target_date());
            FetchOutcome::Success {
                target_value,
                series,
            }
        }
        Err(failure) => FetchOutcome::Failure(failure),
    }
}
