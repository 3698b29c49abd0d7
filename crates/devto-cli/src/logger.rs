use std::io::IsTerminal;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, SetLoggerError, debug};

/// Initialize logger with fern
///
/// Logs always go to stderr: stdout carries the API response only.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `colored` - Enable colored levels (ignored when stderr is not a terminal)
pub fn initialize(
    log_level: devto_config::LogLevel,
    colored: bool,
) -> Result<(), SetLoggerError> {
    let level_filter: LevelFilter = log_level.into();
    let colored = colored && std::io::stderr().is_terminal();

    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch.chain(std::io::stderr()))
        .apply()?;

    debug!("Logger initialized: level={:?}, stderr", level_filter);

    Ok(())
}
