//! HTTP client for Google Trends.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;
use trendscope_types::DateWindow;

use crate::{ClientError, RawSeries, TrendsClient, parse_explore, parse_multiline, url};

/// Configuration for the Google Trends client.
#[derive(Debug, Clone)]
pub struct GoogleTrendsConfig {
    /// Scheme and host to talk to.
    pub base_url: String,
    /// Host language.
    pub hl: String,
    /// Timezone offset in minutes (360 = UTC-6).
    pub tz: i32,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for GoogleTrendsConfig {
    fn default() -> Self {
        Self {
            base_url: url::BASE_URL.to_string(),
            hl: "en-US".to_string(),
            tz: 360,
            timeout: Duration::from_secs(25),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("trendscope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Google Trends client.
///
/// One interest-over-time lookup takes two requests: the explore endpoint
/// hands out a widget token, which the widget data endpoint then accepts.
/// The session cookie from the landing page is kept for the client's lifetime.
#[derive(Debug)]
pub struct GoogleTrendsClient {
    client: Client,
    config: GoogleTrendsConfig,
    has_session: AtomicBool,
}

impl GoogleTrendsClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: GoogleTrendsConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            config,
            has_session: AtomicBool::new(false),
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(GoogleTrendsConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GoogleTrendsConfig {
        &self.config
    }

    /// Visits the landing page once so the session cookie is set.
    async fn ensure_session(&self) -> Result<(), ClientError> {
        if self.has_session.load(Ordering::Acquire) {
            return Ok(());
        }
        self.get_text(&url::home_url(&self.config.base_url, &self.config.hl), &[])
            .await?;
        self.has_session.store(true, Ordering::Release);
        Ok(())
    }

    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, ClientError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "Google Trends response");

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TrendsClient for GoogleTrendsClient {
    async fn interest_over_time(
        &self,
        keyword: &str,
        window: &DateWindow,
    ) -> Result<RawSeries, ClientError> {
        self.ensure_session().await?;

        let base = &self.config.base_url;
        let hl = self.config.hl.clone();
        let tz = self.config.tz.to_string();

        let explore = self
            .get_text(
                &url::explore_url(base),
                &[
                    ("hl", hl.clone()),
                    ("tz", tz.clone()),
                    ("req", url::explore_request(keyword, window)),
                ],
            )
            .await?;
        let widget = parse_explore(&explore)?;

        let body = self
            .get_text(
                &url::multiline_url(base),
                &[
                    ("hl", hl),
                    ("tz", tz),
                    ("req", widget.request.to_string()),
                    ("token", widget.token),
                ],
            )
            .await?;

        Ok(parse_multiline(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tests::{EXPLORE_BODY, MULTILINE_BODY};
    use crate::{Backoff, FetchConfig, RetryConfig, classify, fetch_trend};
    use chrono::NaiveDate;
    use mockito::{Matcher, Server};
    use std::io::Write as _;
    use trendscope_types::{FailureKind, FetchFailure, FetchOutcome, FetchRequest};

    fn client_for(base_url: String) -> GoogleTrendsClient {
        GoogleTrendsClient::new(GoogleTrendsConfig {
            base_url,
            ..Default::default()
        })
        .unwrap()
    }

    fn window() -> DateWindow {
        DateWindow::ending_at(NaiveDate::from_ymd_opt(2020, 3, 16).unwrap())
    }

    #[test]
    fn test_config_default() {
        let config = GoogleTrendsConfig::default();
        assert_eq!(config.base_url, "https://trends.google.com");
        assert_eq!(config.hl, "en-US");
        assert_eq!(config.tz, 360);
        assert_eq!(config.timeout, Duration::from_secs(25));
    }

    #[tokio::test]
    async fn test_client_creation() {
        assert!(GoogleTrendsClient::with_defaults().is_ok());
    }

    #[tokio::test]
    async fn test_interest_over_time() {
        let mut server = Server::new_async().await;
        let home = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("geo".into(), "US".into()))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;
        let explore = server
            .mock("GET", url::EXPLORE_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("hl".into(), "en-US".into()),
                Matcher::UrlEncoded("tz".into(), "360".into()),
                Matcher::Regex("2020-03-08".into()),
            ]))
            .with_status(200)
            .with_body(EXPLORE_BODY)
            .expect(2)
            .create_async()
            .await;
        let multiline = server
            .mock("GET", url::MULTILINE_PATH)
            .match_query(Matcher::UrlEncoded("token".into(), "APP6_token".into()))
            .with_status(200)
            .with_body(MULTILINE_BODY)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(server.url());
        let series = client
            .interest_over_time("covid", &window())
            .await
            .unwrap();
        assert_eq!(series.len(), 2);

        // The landing page is only visited once per client
        client
            .interest_over_time("covid", &window())
            .await
            .unwrap();

        home.assert_async().await;
        explore.assert_async().await;
        multiline.assert_async().await;
    }

    #[tokio::test]
    async fn test_rate_limit_status_is_classified() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;
        server
            .mock("GET", url::EXPLORE_PATH)
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let err = client_for(server.url())
            .interest_over_time("covid", &window())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(429));
        assert_eq!(classify(&err), FailureKind::RateLimited);
    }

    #[tokio::test]
    async fn test_bad_request_is_permanent() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;
        let explore = server
            .mock("GET", url::EXPLORE_PATH)
            .match_query(Matcher::Any)
            .with_status(400)
            .expect(1)
            .create_async()
            .await;

        let request = FetchRequest::parse("covid", "2020-03-16").unwrap();
        let outcome = fetch_trend(
            &client_for(server.url()),
            &request,
            &FetchConfig::default(),
            Backoff::seeded(1),
        )
        .await;

        assert_eq!(outcome.failure_kind(), Some(FailureKind::Other));
        explore.assert_async().await;
    }

    #[tokio::test]
    async fn test_pipeline_against_server() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;
        server
            .mock("GET", url::EXPLORE_PATH)
            .match_query(Matcher::Any)
            .with_body(EXPLORE_BODY)
            .create_async()
            .await;
        server
            .mock("GET", url::MULTILINE_PATH)
            .match_query(Matcher::Any)
            .with_body(MULTILINE_BODY)
            .create_async()
            .await;

        let request = FetchRequest::parse("covid", "2020-03-16").unwrap();
        let config = FetchConfig {
            retry: RetryConfig::new(1),
            ..Default::default()
        };
        let outcome = fetch_trend(&client_for(server.url()), &request, &config, Backoff::seeded(1)).await;

        match outcome {
            FetchOutcome::Success {
                target_value,
                series,
            } => {
                assert_eq!(target_value, Some(100));
                assert_eq!(series.len(), 2);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_for_keyword_with_429_is_permanent() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;
        let explore = server
            .mock("GET", url::EXPLORE_PATH)
            .match_query(Matcher::Any)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(400));
                w.write_all(EXPLORE_BODY.as_bytes())
            })
            .expect(1)
            .create_async()
            .await;

        let client = GoogleTrendsClient::new(GoogleTrendsConfig {
            base_url: server.url(),
            timeout: Duration::from_millis(100),
            ..Default::default()
        })
        .unwrap();
        let request = FetchRequest::parse("boeing 429", "2020-03-16").unwrap();
        let outcome = fetch_trend(&client, &request, &FetchConfig::default(), Backoff::seeded(1)).await;

        match outcome {
            FetchOutcome::Failure(failure) => {
                assert_eq!(failure.kind, FailureKind::Other);
                assert_ne!(failure, FetchFailure::rate_limited());
            }
            other => panic!("expected failure, got {other:?}"),
        }
        explore.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_is_permanent() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;
        server
            .mock("GET", url::EXPLORE_PATH)
            .match_query(Matcher::Any)
            .with_body("<html>unavailable</html>")
            .create_async()
            .await;

        let err = client_for(server.url())
            .interest_over_time("covid", &window())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Response(_)));
        assert_eq!(classify(&err), FailureKind::Other);
    }
}
