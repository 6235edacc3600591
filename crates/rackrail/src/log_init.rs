use log::{Level, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends `[LEVEL] message` lines to a file, opened per record so a build
/// tool can tail or truncate it freely.
struct GridFileLogger {
    path: PathBuf,
    level: Level,
}

impl log::Log for GridFileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger at debug level.
///
/// Fails when the process already has a logger.
pub fn init_logger(path: impl Into<PathBuf>) -> Result<(), SetLoggerError> {
    init_logger_with_level(path, Level::Debug)
}

pub fn init_logger_with_level(path: impl Into<PathBuf>, level: Level) -> Result<(), SetLoggerError> {
    let logger = GridFileLogger {
        path: path.into(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
