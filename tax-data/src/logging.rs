//! Tracing setup for the command-line tools.
//!
//! Log records go to stderr so that reports written to stdout stay clean
//! when piped. An optional file receives the same records without colour.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext, MakeWriter,
        format::{DefaultFields, FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Level used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_LEVEL: &str = "info";

const RESET: &str = "\x1b[0m";

/// `<local time> <LEVEL> <module>[ file:line]: <fields>`
///
/// The source location is only written for DEBUG and TRACE records.
struct RecordFormat;

fn level_colour(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = meta.level();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f%:z");

        if writer.has_ansi_escapes() {
            write!(writer, "{timestamp} {}{level:>5}{RESET} ", level_colour(level))?;
        } else {
            write!(writer, "{timestamp} {level:>5} ")?;
        }

        write!(writer, "{}", meta.module_path().unwrap_or_else(|| meta.target()))?;
        if *level >= Level::DEBUG {
            if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
                write!(writer, " {file}:{line}")?;
            }
        }
        write!(writer, ": ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// One formatting layer over `writer`.
fn record_layer<S, W>(
    writer: W,
    ansi: bool,
) -> fmt::Layer<S, DefaultFields, RecordFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .event_format(RecordFormat)
        .with_ansi(ansi)
        .with_writer(writer)
}

/// Builds the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LEVEL`].
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive.
pub fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = level.unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))
}

/// Installs the global subscriber. Call once at startup.
///
/// * stderr: coloured when attached to a terminal, plain when redirected.
/// * `log_file`: appended to when given; the directory must already exist.
///
/// # Errors
///
/// Returns an error if the level is invalid, the log file cannot be opened,
/// or a global subscriber is already installed.
pub fn init_logging(
    level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = make_filter(level)?;

    let file_layer = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(record_layer(Mutex::new(file), false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(record_layer(io::stderr, io::stderr().is_terminal()))
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")
}
