use std::path::Path;

use fern::colors::Color;
use log::info;

/// Errors raised while setting up logging
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The log level is outside 0-3
    #[error("Invalid log level {0}, expected 0-3")]
    InvalidLogLevel(u8),

    /// The log file couldn't be opened or a logger is already set
    #[error(transparent)]
    Init(#[from] fern::InitError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Init(err.into())
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Init(err.into())
    }
}

/// Maps the numeric `--log-level` onto a filter
pub fn level_filter(log_level: u8) -> Result<log::LevelFilter, Error> {
    match log_level {
        0 => Ok(log::LevelFilter::Warn),
        1 => Ok(log::LevelFilter::Info),
        2 => Ok(log::LevelFilter::Debug),
        3 => Ok(log::LevelFilter::Trace),
        _ => Err(Error::InvalidLogLevel(log_level)),
    }
}

/// Logs to stdout and to `<data_directory>/<binary_name>.log`
pub fn init(log_level: u8, data_directory: &Path, binary_name: &str) -> Result<(), Error> {
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::Green)
        .trace(Color::Magenta);

    let log_level = level_filter(log_level)?;

    let mut log_file_path = data_directory.to_path_buf();
    log_file_path.push(binary_name);
    log_file_path.set_extension("log");

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{date}][{target}][{level}{color_line}]\t{message}\x1B[0m",
                color_line = format_args!("\x1B[{}m", colors.get_color(&record.level()).to_fg_str()),
                date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                target = record.target(),
                level = colors.color(record.level()),
                message = message,
            ))
        })
        .level(log_level)
        .chain(std::io::stdout())
        .chain(fern::log_file(&log_file_path)?)
        .apply()?;

    info!("Logging events to {}", log_file_path.display());
    Ok(())
}
