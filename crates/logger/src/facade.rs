//! crates/logger/src/facade.rs
//! The logging capability adopted by components, and its concrete helper.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::backend::LogBackend;
use crate::category::MessageCategory;
use crate::channel::process_channel;
use crate::event::LogEvent;
use crate::levels::{Priority, VerbosityLevel};

/// Capability for components that log.
///
/// Implementors supply the two entry points; the category shorthands route
/// through the filtered path with [`Priority::default`].
pub trait Log {
    /// Returns the verbosity the filtered entry point compares against.
    fn verbosity(&self) -> VerbosityLevel;

    /// Renders and forwards the message if `priority` surfaces at
    /// [`verbosity`](Self::verbosity).
    fn log(&self, category: MessageCategory, priority: Priority, text: &str);

    /// Renders and forwards the message regardless of priority and verbosity.
    ///
    /// `priority` is accepted for call-site symmetry and has no effect.
    fn log_unfiltered(&self, category: MessageCategory, priority: Priority, text: &str);

    /// Logs an error at the default priority.
    fn error(&self, text: &str) {
        self.log(MessageCategory::Error, Priority::default(), text);
    }

    /// Logs a success at the default priority.
    fn success(&self, text: &str) {
        self.log(MessageCategory::Success, Priority::default(), text);
    }

    /// Logs a general message at the default priority.
    fn message(&self, text: &str) {
        self.log(MessageCategory::Message, Priority::default(), text);
    }
}

/// Renders `event` and hands it to `backend` with the category's severity.
fn forward<B: LogBackend + ?Sized>(backend: &B, event: &LogEvent<'_>) {
    backend.write(&event.render(), event.severity());
}

/// Forwards a message to the process-wide channel without filtering.
///
/// This is the process-wide entry point: it looks the channel up through
/// [`process_channel`] and always emits. `priority` is ignored.
///
/// ```rust,ignore
/// logger::emit(MessageCategory::Error, Priority::Low, "config missing");
/// ```
pub fn emit(category: MessageCategory, priority: Priority, text: &str) {
    let event = LogEvent::new(category, priority, text);
    forward(process_channel().backend(), &event);
}

/// Concrete logging helper that components embed or reference.
///
/// The verbosity is the only mutable state. It is stored atomically so a
/// shared `Logger` can be reconfigured while other threads log through it.
///
/// # Examples
///
/// ```
/// use logger::{Log, Logger, MessageCategory, Priority, RecordingBackend, VerbosityLevel};
///
/// let logger = Logger::new(RecordingBackend::new()).with_verbosity(VerbosityLevel::Low);
/// logger.log(MessageCategory::Success, Priority::Medium, "hidden");
/// logger.log(MessageCategory::Success, Priority::Low, "shown");
///
/// let entries = logger.backend().entries();
/// assert_eq!(entries.len(), 1);
/// assert!(entries[0].rendered.ends_with("- shown"));
/// ```
#[derive(Debug)]
pub struct Logger<B> {
    backend: B,
    verbosity: AtomicU8,
}

impl<B> Logger<B> {
    /// Creates a logger at [`VerbosityLevel::High`].
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            verbosity: AtomicU8::new(VerbosityLevel::default().rank()),
        }
    }

    /// Replaces the verbosity while building the logger.
    #[must_use]
    pub fn with_verbosity(self, level: VerbosityLevel) -> Self {
        self.set_verbosity(level);
        self
    }

    /// Returns the current verbosity.
    #[must_use]
    pub fn verbosity(&self) -> VerbosityLevel {
        self.load_verbosity()
    }

    fn load_verbosity(&self) -> VerbosityLevel {
        VerbosityLevel::from_rank(self.verbosity.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Updates the verbosity used by subsequent filtered calls.
    pub fn set_verbosity(&self, level: VerbosityLevel) {
        self.verbosity.store(level.rank(), Ordering::Relaxed);
    }

    /// Borrows the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the logger and returns its backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl Logger<Arc<dyn LogBackend>> {
    /// Creates a logger over the process-wide channel's backend.
    #[must_use]
    pub fn process() -> Self {
        Self::new(Arc::clone(process_channel().backend()))
    }
}

impl<B: Default> Default for Logger<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: LogBackend> Log for Logger<B> {
    fn verbosity(&self) -> VerbosityLevel {
        self.load_verbosity()
    }

    fn log(&self, category: MessageCategory, priority: Priority, text: &str) {
        let event = LogEvent::new(category, priority, text);
        if event.should_emit(self.load_verbosity()) {
            forward(&self.backend, &event);
        }
    }

    fn log_unfiltered(&self, category: MessageCategory, priority: Priority, text: &str) {
        forward(&self.backend, &LogEvent::new(category, priority, text));
    }
}

impl<T: Log + ?Sized> Log for &T {
    fn verbosity(&self) -> VerbosityLevel {
        (**self).verbosity()
    }

    fn log(&self, category: MessageCategory, priority: Priority, text: &str) {
        (**self).log(category, priority, text);
    }

    fn log_unfiltered(&self, category: MessageCategory, priority: Priority, text: &str) {
        (**self).log_unfiltered(category, priority, text);
    }
}

impl<T: Log + ?Sized> Log for Arc<T> {
    fn verbosity(&self) -> VerbosityLevel {
        (**self).verbosity()
    }

    fn log(&self, category: MessageCategory, priority: Priority, text: &str) {
        (**self).log(category, priority, text);
    }

    fn log_unfiltered(&self, category: MessageCategory, priority: Priority, text: &str) {
        (**self).log_unfiltered(category, priority, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::severity::Severity;

    fn recording(level: VerbosityLevel) -> Logger<RecordingBackend> {
        Logger::new(RecordingBackend::new()).with_verbosity(level)
    }

    #[test]
    fn new_logger_defaults_to_high() {
        let logger = Logger::new(RecordingBackend::new());
        assert_eq!(logger.verbosity(), VerbosityLevel::High);
    }

    #[test]
    fn set_verbosity_is_observed() {
        let logger = recording(VerbosityLevel::High);
        logger.set_verbosity(VerbosityLevel::None);
        assert_eq!(logger.verbosity(), VerbosityLevel::None);
        assert_eq!(Log::verbosity(&logger), VerbosityLevel::None);
    }

    #[test]
    fn filtered_log_forwards_rendered_text_and_severity() {
        let logger = recording(VerbosityLevel::High);
        logger.log(MessageCategory::Message, Priority::Low, "hello");

        let entries = logger.backend().drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].rendered, "\u{1F7E1} MESSAGE: - hello");
        assert_eq!(entries[0].severity, Severity::Info);
    }

    #[test]
    fn filtered_log_suppresses_below_threshold() {
        let logger = recording(VerbosityLevel::Low);
        logger.log(MessageCategory::Success, Priority::Medium, "hidden");
        logger.log(MessageCategory::Error, Priority::High, "hidden too");
        assert!(logger.backend().is_empty());
    }

    #[test]
    fn unfiltered_log_ignores_verbosity() {
        let logger = recording(VerbosityLevel::None);
        logger.log_unfiltered(MessageCategory::Success, Priority::High, "forced");

        let entries = logger.backend().drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Default);
    }

    #[test]
    fn shorthands_use_low_priority() {
        let logger = recording(VerbosityLevel::Low);
        logger.error("e");
        logger.success("s");
        logger.message("m");
        let severities: Vec<_> = logger.backend().drain().into_iter().map(|e| e.severity).collect();
        assert_eq!(severities, [Severity::Error, Severity::Default, Severity::Info]);

        logger.set_verbosity(VerbosityLevel::None);
        logger.error("e");
        assert!(logger.backend().is_empty());
    }

    #[test]
    fn trait_objects_and_references_delegate() {
        let logger = Arc::new(recording(VerbosityLevel::Medium));
        let as_dyn: Arc<dyn Log + Send + Sync> = logger.clone();
        as_dyn.log(MessageCategory::Success, Priority::Medium, "via arc");
        (&*logger).log(MessageCategory::Success, Priority::High, "suppressed");
        assert_eq!(logger.backend().len(), 1);
        assert_eq!(as_dyn.verbosity(), VerbosityLevel::Medium);
    }

    #[test]
    fn into_backend_returns_recorder() {
        let logger = recording(VerbosityLevel::High);
        logger.message("kept");
        let backend = logger.into_backend();
        assert_eq!(backend.len(), 1);
    }
}
