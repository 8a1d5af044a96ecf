//! crates/logger/src/backend.rs
//! The backend capability consumed by the facade, plus an in-memory recorder.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::severity::Severity;

/// A logging channel that accepts rendered messages.
///
/// Writes are fire-and-forget: implementations swallow their own failures
/// because the facade has no way to report them.
pub trait LogBackend: Send + Sync {
    /// Forwards a rendered message with its severity.
    fn write(&self, rendered: &str, severity: Severity);
}

impl<T: LogBackend + ?Sized> LogBackend for &T {
    fn write(&self, rendered: &str, severity: Severity) {
        (**self).write(rendered, severity);
    }
}

impl<T: LogBackend + ?Sized> LogBackend for Box<T> {
    fn write(&self, rendered: &str, severity: Severity) {
        (**self).write(rendered, severity);
    }
}

impl<T: LogBackend + ?Sized> LogBackend for Arc<T> {
    fn write(&self, rendered: &str, severity: Severity) {
        (**self).write(rendered, severity);
    }
}

/// A message captured by [`RecordingBackend`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedEntry {
    /// The rendered message.
    pub rendered: String,
    /// The severity it was forwarded with.
    pub severity: Severity,
}

/// Backend that keeps every write in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    entries: Mutex<Vec<RecordedEntry>>,
}

impl RecordingBackend {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.lock().clone()
    }

    /// Removes and returns every recorded entry.
    pub fn drain(&self) -> Vec<RecordedEntry> {
        self.lock().drain(..).collect()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogBackend for RecordingBackend {
    fn write(&self, rendered: &str, severity: Severity) {
        self.lock().push(RecordedEntry {
            rendered: rendered.to_owned(),
            severity,
        });
    }
}
