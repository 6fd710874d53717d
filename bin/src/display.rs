//! Output formatting and exit statuses for the trendscope CLI.

use std::io::Write;
use trendscope_lib::prelude::*;
use trendscope_lib::FormatError;

/// Exit status for a rate-limited fetch (`EX_TEMPFAIL`): try again later.
pub(crate) const EXIT_TEMPFAIL: u8 = 75;

/// Exit status for a permanent failure.
pub(crate) const EXIT_FAILURE: u8 = 1;

/// Writes the report in `format`. `pretty` only affects JSON.
pub(crate) fn write_report<W: Write + Send>(
    format: OutputFormat,
    report: &Report<'_>,
    pretty: bool,
    writer: W,
) -> Result<(), FormatError> {
    match format {
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_report(report, writer),
        OutputFormat::Csv => CsvFormatter::new().write_report(report, writer),
    }
}

/// Maps an outcome to the process exit status.
///
/// No data is a valid answer and exits successfully.
pub(crate) fn exit_status(outcome: &FetchOutcome) -> u8 {
    match outcome.failure_kind() {
        None => 0,
        Some(FailureKind::RateLimited) => EXIT_TEMPFAIL,
        Some(FailureKind::Other) => EXIT_FAILURE,
    }
}
