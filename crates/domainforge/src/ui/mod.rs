//! Frontend-agnostic pieces shared by the dialog renderers.
//!
//! Currently the captured log model: frontends show recent `tracing` output
//! next to the settings dialog without writing to the terminal directly.

pub mod tracing;

use serde::{Deserialize, Serialize};

/// Maximum log lines kept in memory.
pub const MAX_LOG_LINES: usize = 500;
/// Trim to this many when the cap is exceeded.
pub const LOG_TRIM_TO: usize = 300;

/// A single log line captured from tracing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log severity level (mirrors tracing levels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short fixed-width label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }

    /// Whether lines at this level are worth showing in a small pane.
    pub fn is_notable(self) -> bool {
        matches!(self, Self::Info | Self::Warn | Self::Error)
    }
}

/// Drop the oldest lines once `lines` grows past [`MAX_LOG_LINES`].
pub fn trim_logs(lines: &mut Vec<LogLine>) {
    if lines.len() > MAX_LOG_LINES {
        let excess = lines.len() - LOG_TRIM_TO;
        lines.drain(..excess);
    }
}
