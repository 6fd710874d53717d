//! Search-interest spike scoring for trendscope.
//!
//! This crate scores a fetched series around its target date:
//!
//! - [`SpikeScore`] - Score, reason and supporting figures
//! - [`score_spike`] - Scores a series against its value one week earlier

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/trendscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod score;
mod scorer;

pub use score::{SpikeDetails, SpikeScore};
pub use scorer::{BASELINE_OFFSET_DAYS, score_spike};
