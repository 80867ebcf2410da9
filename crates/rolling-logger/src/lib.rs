//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and echoes each one to the browser console (or stderr off the web).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    records: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            capacity,
            level,
            records: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered records, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.records
            .lock()
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.args()
        )
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut records) = self.records.lock() {
            while records.len() >= self.capacity {
                records.pop_front();
            }
            records.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::log_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Error from the free-function helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    NotInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::NotInitialized => write!(f, "rolling logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Install the global logger. Only the first call succeeds.
pub fn init_logger(
    app_name: &str,
    capacity: usize,
    level: LevelFilter,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(logger)
}

/// The installed logger, if any
pub fn logger() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    logger().ok_or(LoggerError::NotInitialized)?;
    log::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    logger().ok_or(LoggerError::NotInitialized)?;
    log::error!("{}", message);
    Ok(())
}
