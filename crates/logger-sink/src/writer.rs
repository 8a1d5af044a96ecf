//! crates/logger-sink/src/writer.rs
//! Backend that streams rendered messages into an [`io::Write`] target.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logger::{LogBackend, Severity};

use crate::line_mode::LineMode;

#[derive(Debug)]
struct WriterState<W> {
    writer: W,
    line_mode: LineMode,
    show_severity: bool,
}

/// Line-oriented backend over any writer (stderr, a file, an in-memory buffer).
///
/// Writes are serialised through a mutex so the backend can be shared across
/// threads. I/O errors are reported through `tracing` and otherwise dropped.
///
/// # Examples
///
/// ```
/// use logger::{Log, Logger, MessageCategory, Priority};
/// use logger_sink::WriterBackend;
///
/// let logger = Logger::new(WriterBackend::new(Vec::new()));
/// logger.log(MessageCategory::Success, Priority::Low, "ready");
///
/// let output = String::from_utf8(logger.into_backend().into_inner()).unwrap();
/// assert_eq!(output, "🟢 SUCCESS: - ready\n");
/// ```
#[derive(Debug)]
pub struct WriterBackend<W> {
    state: Mutex<WriterState<W>>,
}

impl<W> WriterBackend<W> {
    /// Creates a backend that appends a newline after each message.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a backend with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(WriterState {
                writer,
                line_mode,
                show_severity: false,
            }),
        }
    }

    /// Prefixes each line with the upper-cased severity label.
    #[must_use]
    pub fn show_severity(self, show: bool) -> Self {
        self.lock().show_severity = show;
        self
    }

    fn lock(&self) -> MutexGuard<'_, WriterState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().line_mode = line_mode;
    }

    /// Consumes the backend and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

impl<W: Write> WriterBackend<W> {
    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

impl<W: Write> WriterState<W> {
    fn write_entry(&mut self, rendered: &str, severity: Severity) -> io::Result<()> {
        if self.show_severity {
            let label = severity.label().to_ascii_uppercase();
            write!(self.writer, "{label} ")?;
        }
        self.writer.write_all(rendered.as_bytes())?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<W: Write + Send> LogBackend for WriterBackend<W> {
    fn write(&self, rendered: &str, severity: Severity) {
        if let Err(error) = self.lock().write_entry(rendered, severity) {
            tracing::debug!(target: "logger_sink", %error, "dropping log line after write failure");
        }
    }
}
