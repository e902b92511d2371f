use std::cell::RefCell;
use std::fmt;

/// Severity attached to a message handed to a [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> log::Level {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// A sink for leveled messages. Implementations must not fail.
pub trait Logger {
    fn log(&self, level: LogLevel, message: &str);
}

/// Forwards every message to the `log` facade, so whichever backend the
/// binary installed (`env_logger` here) decides how it is rendered.
pub struct LogFacadeLogger {
    target: String,
}

impl LogFacadeLogger {
    pub fn new(target: &str) -> LogFacadeLogger {
        LogFacadeLogger {
            target: target.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogFacadeLogger {
    fn default() -> Self {
        LogFacadeLogger::new(module_path!())
    }
}

impl Logger for LogFacadeLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let level: log::Level = level.into();
        log::log!(target: self.target.as_str(), level, "{}", message);
    }
}

/// Keeps every message in memory, in arrival order.
#[derive(Default)]
pub struct RecordingLogger {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
