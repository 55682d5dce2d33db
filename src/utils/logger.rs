//! Conversion log
//!
//! `Logger` records each conversion in a log file. Installed as the global
//! `log` backend, it also copies every record to stderr, keeping stdout free
//! for conversion results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed `log` implementation
pub struct Logger {
    /// Destination file, absent for a console-only logger
    file: Mutex<Option<File>>,
    level: LevelFilter,
}

impl Logger {
    /// Create (or truncate) `log_file` and log to it at `Info`
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
        })
    }

    /// A logger that writes nothing to disk
    pub fn console_only() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Info,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Append one line to the log file and flush it
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Record one conversion as "Converted <source> -> <target>"
    pub fn log_conversion(&self, source: &str, target: &str) -> io::Result<()> {
        self.log(&format!("Converted {} -> {}", source, target))
    }

    /// Install a file logger at `level` as the process-wide `log` backend
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);
            eprintln!("{}", message);
        }
    }

    // Every write is flushed in `Logger::log`
    fn flush(&self) {}
}
