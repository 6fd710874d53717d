//! trendscope CLI - Google Trends lookups that ride out rate limiting.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trendscope_lib::{DEFAULT_LOOKBACK_DAYS, DEFAULT_MAX_ATTEMPTS, OutputFormat};

mod display;
mod fetch;

#[derive(Parser)]
#[command(name = "trendscope")]
#[command(about = "Fetch Google Trends interest for a keyword around a date", long_about = None)]
#[command(version)]
struct Cli {
    /// Search keyword
    keyword: String,

    /// Target date (YYYY-MM-DD)
    date: String,

    /// Total attempts when rate limited, first request included
    #[arg(
        long,
        env = "TRENDSCOPE_MAX_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: u32,

    /// Days of history requested before the target date
    #[arg(long, env = "TRENDSCOPE_LOOKBACK_DAYS", default_value_t = DEFAULT_LOOKBACK_DAYS)]
    lookback_days: u32,

    /// Host language
    #[arg(long, default_value = "en-US")]
    hl: String,

    /// Timezone offset in minutes
    #[arg(long, default_value_t = 360, allow_negative_numbers = true)]
    tz: i32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 25)]
    timeout: u64,

    /// Give up after this many seconds, retries included
    #[arg(long)]
    deadline: Option<u64>,

    /// Seed for the backoff jitter (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format (json, csv)
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Score the spike on the target date
    #[arg(long)]
    score: bool,

    /// Output file path. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress diagnostics)
    #[arg(short, long)]
    quiet: bool,
}

/// Sends diagnostics to stderr so stdout carries only the result.
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let directives = match verbose {
        0 => "warn,trendscope=info,trendscope_fetch=info",
        1 => "info,trendscope=debug,trendscope_fetch=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let outcome = fetch::fetch(&cli).await?;
    Ok(ExitCode::from(display::exit_status(&outcome)))
}
