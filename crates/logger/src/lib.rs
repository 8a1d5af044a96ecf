#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logger` is a small leveled logging facade. Every call carries a
//! [`MessageCategory`] (error, success, message) and a [`Priority`]; the
//! facade renders the text behind a category prefix and forwards it to a
//! [`LogBackend`] with a [`Severity`] derived from the category.
//!
//! # Design
//!
//! - [`should_emit`] is the whole filtering policy: [`Priority::AlwaysShow`]
//!   always surfaces, [`VerbosityLevel::None`] hides everything else, and
//!   otherwise the active level must reach the level named by the priority.
//! - [`Log`] is the capability components adopt. [`Logger`] implements it
//!   over any backend and keeps its verbosity in an atomic field, defaulting
//!   to [`VerbosityLevel::High`].
//! - [`emit`] is the process-wide entry point. It looks the channel up via
//!   [`process_channel`] and never filters.
//! - Backends are external collaborators. This crate ships
//!   [`TracingBackend`] (the default process channel) and
//!   [`RecordingBackend`]; system backends live in `logger-sink`.
//!
//! # Invariants
//!
//! - Rendered messages always read `"<prefix> - <text>"`.
//! - Raising the verbosity never hides a message that was shown at a lower
//!   verbosity.
//! - Logging calls never fail; backend errors are swallowed by the backend.
//!
//! # Examples
//!
//! ```
//! use logger::{Log, Logger, MessageCategory, Priority, RecordingBackend, Severity, VerbosityLevel};
//!
//! let logger = Logger::new(RecordingBackend::new()).with_verbosity(VerbosityLevel::None);
//! logger.log(MessageCategory::Error, Priority::AlwaysShow, "disk full");
//! logger.log(MessageCategory::Message, Priority::Low, "dropped");
//!
//! let entries = logger.backend().entries();
//! assert_eq!(entries.len(), 1);
//! assert!(entries[0].rendered.starts_with("🔴 ERROR:"));
//! assert_eq!(entries[0].severity, Severity::Error);
//! ```

mod backend;
mod category;
mod channel;
mod config;
mod event;
mod facade;
mod filter;
mod levels;
mod macros;
mod severity;
mod tracing_backend;

pub use backend::{LogBackend, RecordedEntry, RecordingBackend};
pub use category::{CategoryParseError, MessageCategory};
pub use channel::{
    Channel, ChannelError, ChannelId, FALLBACK_IDENTIFIER, install, process_channel,
};
pub use config::LoggerConfig;
pub use event::{LogEvent, SEPARATOR};
pub use facade::{Log, Logger, emit};
pub use filter::should_emit;
pub use levels::{Priority, PriorityParseError, VerbosityLevel, VerbosityParseError};
pub use severity::Severity;
pub use tracing_backend::{DEFAULT_FILTER, TracingBackend, init_tracing, init_tracing_with_filter};
