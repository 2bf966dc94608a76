use crate::error::{Result as ServerErrorResult, ServerError};

use lodge_config::LoggingConfig;

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Targets that are noisy at the global level unless configured otherwise
const QUIET_TARGETS: &[(&str, LevelFilter)] = &[
    // sqlx logs every statement at info
    ("sqlx", LevelFilter::Warn),
];

/// Per-target filters: quiet defaults first, then `[logging.modules]` on top
pub fn target_levels(logging: &LoggingConfig) -> Vec<(String, LevelFilter)> {
    let mut levels: Vec<(String, LevelFilter)> = QUIET_TARGETS
        .iter()
        .filter(|(target, _)| !logging.modules.contains_key(*target))
        .map(|(target, level)| (target.to_string(), *level))
        .collect();

    levels.extend(
        logging
            .modules
            .iter()
            .map(|(target, level)| (target.clone(), level.0)),
    );
    levels
}

/// Initialize logger with fern
///
/// `log_file` of None logs to stdout; `colored` only applies there.
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level_filter = logging.level.0;

    let mut base_dispatch = Dispatch::new().level(level_filter);
    for (target, level) in target_levels(logging) {
        base_dispatch = base_dispatch.level_for(target, level);
    }

    let dispatch = if let Some(ref log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ServerError::LogFile {
                path: log_path.clone(),
                source: e,
            })?;

        Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(file)
    } else if logging.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                write_line(out, message, record, colors.color(record.level()))
            })
            .chain(std::io::stdout())
    } else {
        // Plain output for non-TTY (systemd, docker logs)
        Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    let sink = match log_file {
        Some(path) => path.display().to_string(),
        None => String::from("stdout"),
    };
    info!(
        "Logger initialized: level={}, modules={}, output={}",
        logging.level,
        logging.module_summary(),
        sink
    );

    Ok(())
}

fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{date} {level:<5} {target}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339_seconds(SystemTime::now()),
        level = level,
        target = record.target(),
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
