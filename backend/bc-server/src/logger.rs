//! Process-wide `log` sink built on fern.
//!
//! Every record is rendered as `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`.
//! Credentials never reach this module; callers log usernames and ids only.

use crate::error::{Result as ServerErrorResult, ServerError};

use bc_config::LogLevel;

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};

/// Where records end up
enum Sink {
    File(PathBuf),
    ColoredStdout,
    PlainStdout,
}

impl Sink {
    fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Sink::File(path),
            None if colored => Sink::ColoredStdout,
            None => Sink::PlainStdout,
        }
    }
}

fn write_line(
    out: FormatCallback,
    message: &std::fmt::Arguments,
    record: &Record,
    level: impl Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// Install the global logger.
///
/// A `log_file` wins over stdout and is never colored.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let LogLevel(level) = log_level;
    let sink = Sink::select(log_file, colored);

    // sqlx reports every statement at info
    let root = Dispatch::new()
        .level(level)
        .level_for("sqlx", LevelFilter::Warn);

    let (output, destination) = match sink {
        Sink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| ServerError::Logger {
                    message: format!("cannot open log file {}: {e}", path.display()),
                })?;
            let output = Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file);
            (output, path.display().to_string())
        }
        Sink::ColoredStdout => {
            let palette = colors();
            let output = Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, palette.color(record.level()))
                })
                .chain(std::io::stdout());
            (output, "stdout".to_string())
        }
        Sink::PlainStdout => {
            let output = Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(std::io::stdout());
            (output, "stdout".to_string())
        }
    };

    root.chain(output).apply().map_err(|e| ServerError::Logger {
        message: format!("logger already installed: {e}"),
    })?;

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    log::info!("Logging at {level} to {destination}");
    Ok(())
}
