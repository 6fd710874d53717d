//! Rate-limit aware Google Trends fetching with spike scoring.
//!
//! This is a facade crate that re-exports functionality from the trendscope
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use trendscope_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GoogleTrendsClient::with_defaults()?;
//!     let request = FetchRequest::parse("covid", "2020-03-16")?;
//!
//!     let outcome = fetch_trend(
//!         &client,
//!         &request,
//!         &FetchConfig::default(),
//!         Backoff::from_entropy(),
//!     )
//!     .await;
//!
//!     if let FetchOutcome::Success { target_value, series } = &outcome {
//!         println!("{target_value:?} across {} days", series.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use trendscope_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use trendscope_fetch::{
    Backoff, ClientError, DEFAULT_MAX_ATTEMPTS, Extracted, FetchConfig, GoogleTrendsClient,
    GoogleTrendsConfig, RawObservation, RawSeries, ResponseError, RetryConfig, RetryingFetcher,
    TrendsClient, backoff_delay, classify, extract, fetch_trend,
};

// Re-export scoring
#[cfg(feature = "score")]
pub use trendscope_score::{SpikeDetails, SpikeScore, score_spike};

// Re-export formatters
#[cfg(feature = "format")]
pub use trendscope_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, Report,
};

/// Prelude module for convenient imports.
///
/// ```
/// use trendscope_lib::prelude::*;
/// ```
pub mod prelude {
    pub use trendscope_types::{
        DateWindow, FailureKind, FetchFailure, FetchOutcome, FetchRequest, RequestError,
        TimeSeriesPoint,
    };

    #[cfg(feature = "fetch")]
    pub use trendscope_fetch::{
        Backoff, FetchConfig, GoogleTrendsClient, GoogleTrendsConfig, RetryConfig, TrendsClient,
        fetch_trend,
    };

    #[cfg(feature = "score")]
    pub use trendscope_score::{SpikeScore, score_spike};

    #[cfg(feature = "format")]
    pub use trendscope_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, Report};
}
