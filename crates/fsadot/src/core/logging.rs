//! Logging infrastructure for automaton processing
//!
//! Structured logging uses the `tracing` crate. Events are written to
//! stderr so that the DOT text can be streamed on stdout.
//!
//! # Usage
//!
//! ```rust
//! use fsadot::core::logging::init_logging;
//!
//! // Warnings only, compact single-line output
//! let _ = init_logging(Some("warn"), Some("compact"));
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for terminals
//! - `pretty`: Multi-line format with source locations
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `FSADOT_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `FSADOT_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Standard `tracing-subscriber` filter directives
//!
//! # Filtering Logs
//!
//! ```bash
//! # Trace the parser only
//! RUST_LOG="warn,fsadot::automaton::parser=trace" fsadot render -i automata.txt
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Build the event filter from the first directive that is set
///
/// Precedence is `level`, then `FSADOT_LOG_LEVEL`, then `RUST_LOG`, then
/// `warn`. An unparsable directive falls back to `warn`.
fn level_filter(
    level: Option<&str>,
    fsadot_level: Option<String>,
    rust_log: Option<String>,
) -> EnvFilter {
    let directive = level
        .map(|s| s.to_string())
        .or(fsadot_level)
        .or(rust_log)
        .unwrap_or_else(|| "warn".to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber with the given log level and format
///
/// * `level` - log level or filter directive. If None, uses `FSADOT_LOG_LEVEL`
///   or `RUST_LOG`, or defaults to `warn`.
/// * `format` - compact|pretty|json. If None, uses `FSADOT_LOG_FORMAT`, or
///   defaults to `compact`.
///
/// Returns an error if the format is unknown or a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FSADOT_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());

    let filter = level_filter(
        level,
        std::env::var("FSADOT_LOG_LEVEL").ok(),
        std::env::var("RUST_LOG").ok(),
    );

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_file(false)
                        .with_line_number(false)
                        .with_span_events(FmtSpan::NONE)
                        .without_time(),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}
