use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug)]
struct FileLogger {
    log_dir: PathBuf,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = format!("{} - {}\n", record.level(), record.args());
            let log_file = self.log_dir.join("latest.log");

            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
                let _ = file.write_all(entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger under `~/.mag-narrative/logs/`. Logging is an
/// audit trail only: if the directory cannot be created the records are
/// dropped and the stdout/stderr contract is unaffected.
pub fn init() -> Result<(), SetLoggerError> {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let log_dir = PathBuf::from(home).join(".mag-narrative").join("logs");

    let _ = create_dir_all(&log_dir);

    let logger = LOGGER.get_or_init(|| FileLogger { log_dir });
    log::set_logger(logger).map(|()| log::set_max_level(LevelFilter::Debug))
}
