//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! and the most recent lines are kept in a circular buffer so a screen can
//! show them when something goes wrong.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Number of formatted lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Bounded buffer of formatted log lines (oldest dropped first)
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Logger forwarding to `console.*` and remembering recent lines
pub struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            recent: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    fn remember(&self, line: &str) {
        if let Ok(mut recent) = self.recent.lock() {
            recent.push(line.to_string());
        }
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent.lock().map(|r| r.snapshot()).unwrap_or_default()
    }
}

/// `[LEVEL] target: message`
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        self.remember(&line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

/// Install the global logger. Calling it again keeps the first logger.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Lines captured by the installed logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.get().map(|l| l.recent()).unwrap_or_default()
}
