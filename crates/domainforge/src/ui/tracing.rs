//! A `tracing` layer that collects events for on-screen display.
//!
//! The layer pushes [`LogLine`]s into a [`LogBuffer`] guarded by its own
//! mutex; the frontend drains it once per frame. Nothing is ever written to
//! stdout/stderr, which would corrupt an alternate-screen terminal UI.

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use super::{LogLevel, LogLine, trim_logs};

/// Pending log lines shared between the layer and a frontend.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<LogLine>>>);

impl LogBuffer {
    /// Take every pending line.
    pub fn drain(&self) -> Vec<LogLine> {
        let mut pending = self.0.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *pending)
    }

    /// Move pending lines onto the end of `lines`, trimming old ones.
    ///
    /// Returns how many lines were appended.
    pub fn drain_into(&self, lines: &mut Vec<LogLine>) -> usize {
        let pending = self.drain();
        let count = pending.len();
        if count > 0 {
            lines.extend(pending);
            trim_logs(lines);
        }
        count
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut pending) = self.0.lock() {
            pending.push(line);
            trim_logs(&mut pending);
        }
    }
}

/// [`Layer`] feeding a [`LogBuffer`].
pub struct UiTracingLayer {
    buffer: LogBuffer,
}

impl UiTracingLayer {
    /// Create the layer together with the buffer a frontend should drain.
    pub fn new() -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for UiTracingLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let level = match *event.metadata().level() {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        };

        self.buffer.push(LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            level,
            message: fields.into_message(),
        });
    }
}

/// Collects the `message` field and any structured fields of one event.
#[derive(Default)]
struct FieldCollector {
    message: String,
    extras: Vec<String>,
}

impl FieldCollector {
    /// `message {k=v, ...}`, or just the pairs when there is no message.
    fn into_message(self) -> String {
        match (self.message.is_empty(), self.extras.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.extras.join(" "),
            (false, false) => format!("{} {{{}}}", self.message, self.extras.join(", ")),
        }
    }
}

impl tracing::field::Visit for FieldCollector {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.extras.push(format!("{}={value}", field.name()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            // Format args arrive here; `{:?}` of `fmt::Arguments` is unquoted.
            self.message = format!("{value:?}");
        } else {
            self.extras.push(format!("{}={value:?}", field.name()));
        }
    }
}
