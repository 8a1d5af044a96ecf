//! crates/logger/src/severity.rs
//! Severity levels understood by logging backends.

use std::fmt;

use tracing::Level;

/// Severity passed to a [`LogBackend`](crate::LogBackend) alongside the rendered message.
///
/// The set mirrors the three levels exposed by system logging channels:
/// error conditions, the default (notice) level, and informational output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Error conditions.
    Error,
    /// Default, notice-style severity.
    Default,
    /// Informational messages.
    Info,
}

impl Severity {
    /// Every severity in declaration order.
    pub const ALL: [Self; 3] = [Self::Error, Self::Default, Self::Info];

    /// Returns the lower-case label used when printing the severity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Default => "default",
            Self::Info => "info",
        }
    }

    /// Maps the severity onto the closest [`tracing::Level`].
    ///
    /// `Default` is the level a channel records unconditionally, so it lands on
    /// `INFO`; `Info` is the chattier tier and lands on `DEBUG`.
    #[must_use]
    pub const fn tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Default => Level::INFO,
            Self::Info => Level::DEBUG,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
