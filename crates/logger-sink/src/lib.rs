#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logger-sink/src/lib.rs
//!
//! # Overview
//!
//! `logger-sink` provides the concrete [`logger::LogBackend`] implementations
//! the facade forwards to: a syslog(3) channel on unix targets and a
//! line-oriented [`WriterBackend`] for any [`std::io::Write`] target.
//!
//! # Design
//!
//! - [`syslog::SyslogBackend`] opens syslog with the channel category
//!   (`<id>-log`) as its ident and maps each [`logger::Severity`] onto a
//!   syslog priority: error to `LOG_ERR`, default to `LOG_NOTICE`, info to
//!   `LOG_INFO`.
//! - [`WriterBackend`] serialises writes through a mutex and honours a
//!   [`LineMode`].
//!
//! # Errors
//!
//! Backends never surface errors to the facade. Write failures in
//! [`WriterBackend`] are reported as `tracing` debug events and dropped;
//! syslog delivery failures are invisible to the caller.
//!
//! # Examples
//!
//! Install a writer backend as the process channel:
//!
//! ```
//! use std::sync::Arc;
//! use logger::{Channel, ChannelId, MessageCategory, Priority};
//! use logger_sink::WriterBackend;
//!
//! let id = ChannelId::resolve(Some("com.example.app"));
//! let backend = Arc::new(WriterBackend::new(std::io::stderr()));
//! logger::install(Channel::new(id, backend)).expect("first install");
//! logger::emit(MessageCategory::Message, Priority::Low, "started");
//! ```

mod line_mode;
#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;
mod writer;

pub use line_mode::LineMode;
pub use writer::WriterBackend;
