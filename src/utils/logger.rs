//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. When no log
//! file is configured, `env_logger` takes over and writes to stderr.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, `None` when file logging is off
    file: Mutex<Option<File>>,
    /// Most verbose level this logger records
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        Self::with_level(log_file, LevelFilter::Info)
    }

    /// Creates a new logger writing records up to `level` to `log_file`
    pub fn with_level(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Creates a logger that discards operation summaries
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Off,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Initialize the global logger
    ///
    /// Records go to `log_file` (and stdout) when one is given. Otherwise
    /// `env_logger` is installed, so `RUST_LOG` can still raise the level.
    pub fn init_global_logger(log_file: Option<&str>, level: LevelFilter) -> io::Result<()> {
        match log_file {
            Some(path) => {
                let global_logger = Logger::with_level(path, level)?;

                // Only called once at startup
                if log::set_boxed_logger(Box::new(global_logger)).is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }
                log::set_max_level(level);
            }
            None => {
                let result = env_logger::Builder::new()
                    .filter_level(level)
                    .parse_default_env()
                    .try_init();
                if result.is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }
            }
        }
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
