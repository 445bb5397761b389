//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a bounded ring buffer
//! and echoes each line to the browser console (wasm) or stderr (native).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Ring buffer of formatted log lines
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append a line, dropping the oldest when full
    pub fn push(&self, line: String) {
        let mut lines = self.lines.lock().unwrap_or_else(|p| p.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|p| p.into_inner());
        lines.iter().cloned().collect()
    }
}

struct RollingLogger {
    app_name: String,
    buffer: RollingBuffer,
}

impl RollingLogger {
    fn format(&self, record: &Record) -> String {
        format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            &self.app_name,
            record.target(),
            &record.args().to_string(),
        )
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.buffer.push(line);
    }

    fn flush(&self) {}
}

fn format_line(time: &str, level: Level, app_name: &str, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}: {}", time, level, app_name, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger. Keeps the last `capacity` lines.
///
/// Fails if a logger is already installed.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), SetLoggerError> {
    init_with_level(app_name, capacity, LevelFilter::Debug)
}

pub fn init_with_level(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger {
        app_name: app_name.to_string(),
        buffer: RollingBuffer::new(capacity),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines currently held by the installed logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.buffer.snapshot()).unwrap_or_default()
}

pub fn info(message: &str) {
    log::info!("{}", message);
}

pub fn error(message: &str) {
    log::error!("{}", message);
}
