//! Rate-limit aware search-interest fetching for trendscope.
//!
//! This crate provides the fetch pipeline:
//!
//! - [`TrendsClient`] - Capability trait for the external data source
//! - [`GoogleTrendsClient`] - HTTP implementation against Google Trends
//! - [`RetryingFetcher`] - Retry loop with error classification and backoff
//! - [`extract`] - Normalizes a raw series and locates the target value
//! - [`fetch_trend`] - Window, fetch and extract composed into one call

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod extract;
mod google;
mod parse;
mod pipeline;
mod retry;
pub mod url;

pub use client::{ClientError, RawObservation, RawSeries, TrendsClient, classify};
pub use extract::{Extracted, extract};
pub use google::{GoogleTrendsClient, GoogleTrendsConfig};
pub use parse::{ResponseError, TimeseriesWidget, parse_explore, parse_multiline};
pub use pipeline::{FetchConfig, fetch_trend};
pub use retry::{Backoff, DEFAULT_MAX_ATTEMPTS, RetryConfig, RetryingFetcher, backoff_delay};
