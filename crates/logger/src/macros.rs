//! crates/logger/src/macros.rs
//! Formatting shorthands over [`Log::log`](crate::Log::log).
//!
//! The text is only formatted when the priority surfaces at the logger's
//! verbosity.

/// Shared expansion for the category macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_category {
    ($logger:expr, $category:ident, $priority:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let priority: $crate::Priority = $priority;
        if $crate::should_emit(priority, $crate::Log::verbosity(logger)) {
            $crate::Log::log(
                logger,
                $crate::MessageCategory::$category,
                priority,
                &::std::format!($($arg)+),
            );
        }
    }};
}

/// Logs an error through a [`Log`](crate::Log) implementor.
///
/// An optional priority name (`Low`, `Medium`, `High`, `AlwaysShow`) may
/// precede the format string; it defaults to `Low`.
///
/// ```
/// use logger::{Logger, RecordingBackend, log_error};
///
/// let logger = Logger::new(RecordingBackend::new());
/// log_error!(logger, AlwaysShow, "lost {} packets", 3);
/// log_error!(logger, "plain");
/// assert_eq!(logger.backend().len(), 2);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $priority:ident, $($arg:tt)+) => {
        $crate::__log_category!($logger, Error, $crate::Priority::$priority, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_category!($logger, Error, $crate::Priority::Low, $($arg)+)
    };
}

/// Logs a success through a [`Log`](crate::Log) implementor.
///
/// ```
/// use logger::{Logger, RecordingBackend, VerbosityLevel, log_success};
///
/// let logger = Logger::new(RecordingBackend::new()).with_verbosity(VerbosityLevel::Low);
/// log_success!(logger, Medium, "suppressed at low verbosity");
/// assert!(logger.backend().is_empty());
/// ```
#[macro_export]
macro_rules! log_success {
    ($logger:expr, $priority:ident, $($arg:tt)+) => {
        $crate::__log_category!($logger, Success, $crate::Priority::$priority, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_category!($logger, Success, $crate::Priority::Low, $($arg)+)
    };
}

/// Logs a general message through a [`Log`](crate::Log) implementor.
#[macro_export]
macro_rules! log_message {
    ($logger:expr, $priority:ident, $($arg:tt)+) => {
        $crate::__log_category!($logger, Message, $crate::Priority::$priority, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_category!($logger, Message, $crate::Priority::Low, $($arg)+)
    };
}
