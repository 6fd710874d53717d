//! Fetch command implementation.
//!
//! Validates the request, runs the fetch pipeline against Google Trends and
//! writes the report.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;
use tracing::warn;
use trendscope_lib::prelude::*;

use crate::{Cli, display};

/// Fetches the keyword's interest around the target date and writes the report.
pub(crate) async fn fetch(cli: &Cli) -> Result<FetchOutcome> {
    let (outcome, score) = match FetchRequest::parse(cli.keyword.as_str(), &cli.date) {
        Ok(request) => {
            let outcome = run_pipeline(cli, &request).await?;
            let score = match &outcome {
                FetchOutcome::Success {
                    target_value,
                    series,
                } if cli.score => Some(score_spike(request.target_date(), *target_value, series)),
                _ => None,
            };
            (outcome, score)
        }
        Err(e) => {
            warn!(keyword = %cli.keyword, date = %cli.date, "{e}");
            (FetchOutcome::Failure(FetchFailure::other(e.to_string())), None)
        }
    };

    let mut report = Report::new(&cli.keyword, &cli.date, &outcome);
    if let Some(score) = &score {
        report = report.with_score(score);
    }

    let mut writer: Box<dyn Write + Send> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    display::write_report(cli.format, &report, cli.pretty, &mut writer)
        .context("Failed to write report")?;
    writer.flush()?;

    Ok(outcome)
}

/// Runs window, fetch-with-retry and extraction, under the optional deadline.
async fn run_pipeline(cli: &Cli, request: &FetchRequest) -> Result<FetchOutcome> {
    let client = GoogleTrendsClient::new(GoogleTrendsConfig {
        hl: cli.hl.clone(),
        tz: cli.tz,
        timeout: Duration::from_secs(cli.timeout),
        ..Default::default()
    })
    .context("Failed to create HTTP client")?;

    let config = FetchConfig {
        retry: RetryConfig::new(cli.max_attempts),
        lookback_days: cli.lookback_days,
    };
    let backoff = cli.seed.map_or_else(Backoff::from_entropy, Backoff::seeded);

    let pipeline = fetch_trend(&client, request, &config, backoff);
    let outcome = match cli.deadline {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), pipeline)
            .await
            .unwrap_or_else(|_| {
                warn!(deadline_secs = secs, "Deadline exceeded");
                FetchOutcome::Failure(FetchFailure::other("deadline exceeded"))
            }),
        None => pipeline.await,
    };

    Ok(outcome)
}
