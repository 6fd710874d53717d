//! Output formatters for trendscope fetch reports.
//!
//! This crate provides formatters for writing a [`Report`]:
//!
//! - [`JsonFormatter`] - Full report as a JSON object
//! - [`CsvFormatter`] - The dated series as CSV rows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod report;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use report::{NO_DATA_MESSAGE, Report};
