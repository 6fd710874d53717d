//! Core types for the trendscope search-interest fetcher.
//!
//! This crate provides the fundamental data structures used throughout trendscope:
//!
//! - [`FetchRequest`] - A validated keyword and target date
//! - [`DateWindow`] - The date range submitted to the data source
//! - [`TimeSeriesPoint`] - A single dated interest value
//! - [`FetchOutcome`] - The result of one fetch-with-retry operation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod point;
mod request;
mod window;

pub use error::RequestError;
pub use outcome::{FailureKind, FetchFailure, FetchOutcome};
pub use point::TimeSeriesPoint;
pub use request::{DATE_FORMAT, FetchRequest};
pub use window::{DEFAULT_LOOKBACK_DAYS, DateWindow};
