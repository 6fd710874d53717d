//! Retry loop with error classification and exponential backoff.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};
use trendscope_types::{DateWindow, FailureKind, FetchFailure};

use crate::{RawSeries, TrendsClient, classify};

/// Default total number of attempts, first call included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Configuration for the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    max_attempts: u32,
}

impl RetryConfig {
    /// Creates a configuration allowing `max_attempts` calls in total.
    ///
    /// A value of zero is raised to one: the client is always called at least once.
    #[must_use]
    pub const fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
        }
    }

    /// Returns the total number of attempts allowed.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Computes the wait before attempt `attempt` (1-based retries) for a jitter in `[0, 1)`.
///
/// `2^attempt` seconds plus `jitter` seconds: roughly 2s, 4s, 8s.
#[must_use]
pub fn backoff_delay(attempt: u32, jitter: f64) -> Duration {
    let exp = Duration::from_secs(2u64.saturating_pow(attempt));
    exp.saturating_add(Duration::from_secs_f64(jitter.clamp(0.0, 1.0)))
}

/// Exponential backoff with an injected jitter source.
///
/// The jitter desynchronizes callers that hit the same rate limit at once.
/// Seeding the source makes the delays reproducible.
#[derive(Debug, Clone)]
pub struct Backoff<R> {
    rng: R,
}

impl<R: Rng> Backoff<R> {
    /// Creates a backoff drawing jitter from `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the delay before retry `attempt`, drawing one jitter sample.
    pub fn delay(&mut self, attempt: u32) -> Duration {
        let jitter: f64 = self.rng.gen_range(0.0..1.0);
        backoff_delay(attempt, jitter)
    }
}

impl Backoff<StdRng> {
    /// Creates a backoff seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a backoff with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

/// Calls a [`TrendsClient`] until it succeeds, fails permanently, or the
/// attempt budget is spent on rate-limit errors.
///
/// - Rate-limited errors are retried after a backoff wait.
/// - Any other error ends the loop on the attempt it occurred.
/// - The first success ends the loop, whatever its content.
#[derive(Debug)]
pub struct RetryingFetcher<'a, C: ?Sized, R> {
    client: &'a C,
    config: RetryConfig,
    backoff: Backoff<R>,
}

impl<'a, C, R> RetryingFetcher<'a, C, R>
where
    C: TrendsClient + ?Sized,
    R: Rng + Send,
{
    /// Creates a fetcher around `client`.
    #[must_use]
    pub const fn new(client: &'a C, config: RetryConfig, backoff: Backoff<R>) -> Self {
        Self {
            client,
            config,
            backoff,
        }
    }

    /// Returns the retry configuration.
    #[must_use]
    pub const fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Fetches the raw series for `keyword` over `window`.
    ///
    /// Waits are blocking from the caller's point of view: the returned
    /// future only resolves once the loop is over.
    ///
    /// # Errors
    ///
    /// Returns a [`FailureKind::RateLimited`] failure once every attempt was
    /// rate limited, or a [`FailureKind::Other`] failure carrying the client's
    /// message on the first non-rate-limit error.
    pub async fn fetch(
        &mut self,
        keyword: &str,
        window: &DateWindow,
    ) -> Result<RawSeries, FetchFailure> {
        let max_attempts = self.config.max_attempts();
        let mut attempt = 0;

        loop {
            if attempt > 0 {
                let delay = self.backoff.delay(attempt);
                info!(
                    keyword,
                    attempt = attempt + 1,
                    max_attempts,
                    "Rate limited, waiting {:.1}s before retry {}/{}",
                    delay.as_secs_f64(),
                    attempt + 1,
                    max_attempts
                );
                tokio::time::sleep(delay).await;
            }

            debug!(keyword, %window, attempt = attempt + 1, "Requesting interest over time");

            let err = match self.client.interest_over_time(keyword, window).await {
                Ok(series) => return Ok(series),
                Err(err) => err,
            };

            match classify(&err) {
                FailureKind::RateLimited if attempt + 1 < max_attempts => {
                    debug!(keyword, attempt = attempt + 1, error = %err, "Rate limited");
                    attempt += 1;
                }
                FailureKind::RateLimited => {
                    warn!(keyword, max_attempts, error = %err, "Rate limited on every attempt, giving up");
                    return Err(FetchFailure::rate_limited());
                }
                FailureKind::Other => {
                    warn!(keyword, error = %err, "Fetch failed");
                    return Err(FetchFailure::other(err.to_string()));
                }
            }
        }
    }
}
