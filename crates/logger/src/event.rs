//! crates/logger/src/event.rs
//! Ephemeral log events and the rendering contract.

use crate::category::MessageCategory;
use crate::filter::should_emit;
use crate::levels::{Priority, VerbosityLevel};
use crate::severity::Severity;

/// Separator placed between the category prefix and the message text.
pub const SEPARATOR: &str = " - ";

/// A single log call: category, priority and the caller's text.
///
/// Events borrow their text from the call site and are discarded once the
/// facade has forwarded them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LogEvent<'a> {
    category: MessageCategory,
    priority: Priority,
    text: &'a str,
}

impl<'a> LogEvent<'a> {
    /// Creates an event.
    #[must_use]
    pub const fn new(category: MessageCategory, priority: Priority, text: &'a str) -> Self {
        Self {
            category,
            priority,
            text,
        }
    }

    /// Returns the event's category.
    #[must_use]
    pub const fn category(&self) -> MessageCategory {
        self.category
    }

    /// Returns the event's priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the raw text supplied by the caller.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the backend severity derived from the category.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.category.backend_severity()
    }

    /// Reports whether the event surfaces at `level`.
    #[must_use]
    pub const fn should_emit(&self, level: VerbosityLevel) -> bool {
        should_emit(self.priority, level)
    }

    /// Renders `"<prefix> - <text>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logger::{LogEvent, MessageCategory, Priority};
    ///
    /// let event = LogEvent::new(MessageCategory::Success, Priority::Low, "synced");
    /// assert_eq!(event.render(), "🟢 SUCCESS: - synced");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let prefix = self.category.prefix();
        let mut rendered = String::with_capacity(prefix.len() + SEPARATOR.len() + self.text.len());
        self.render_into(&mut rendered);
        rendered
    }

    /// Appends the rendered form to `buffer` without clearing it first.
    pub fn render_into(&self, buffer: &mut String) {
        buffer.push_str(self.category.prefix());
        buffer.push_str(SEPARATOR);
        buffer.push_str(self.text);
    }
}
