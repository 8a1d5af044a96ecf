//! Integration tests for the channel used when nothing was installed.
//!
//! Nothing in this binary installs a channel, so every lookup resolves to the
//! lazily created fallback.

use std::sync::{Arc, Mutex, PoisonError};

use logger::{
    Channel, ChannelError, ChannelId, FALLBACK_IDENTIFIER, LogBackend, MessageCategory, Priority,
    RecordingBackend, emit, install, process_channel,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Default)]
struct Seen {
    level: Option<Level>,
    message: String,
    subsystem: String,
    category: String,
}

impl Visit for Seen {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "subsystem" => self.subsystem = value.to_owned(),
            "category" => self.category = value.to_owned(),
            "message" => self.message = value.to_owned(),
            _ => {}
        }
    }
}

#[derive(Clone, Default)]
struct Collector {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl<S: Subscriber> Layer<S> for Collector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != "logger" {
            return;
        }
        let mut seen = Seen {
            level: Some(*event.metadata().level()),
            ..Seen::default()
        };
        event.record(&mut seen);
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(seen);
    }
}

// ============================================================================
// Identifier
// ============================================================================

/// Verifies the uninstalled channel is keyed by the fallback identifier.
#[test]
fn lookup_without_install_uses_fallback_identifier() {
    let id = process_channel().id();
    assert_eq!(id.identifier(), FALLBACK_IDENTIFIER);
    assert_eq!(id.identifier(), "logger_log");
    assert_eq!(id.subsystem(), "logger_log.logger.plist");
    assert_eq!(id.category(), "logger_log-log");
    assert_eq!(*id, ChannelId::default());
}

/// Verifies a lookup pins the fallback so a later install is rejected.
#[test]
fn install_after_lookup_names_fallback() {
    process_channel();
    let backend: Arc<dyn LogBackend> = Arc::new(RecordingBackend::new());
    let err = install(Channel::new(ChannelId::resolve(Some("late")), backend))
        .expect_err("fallback already pinned");
    assert_eq!(
        err,
        ChannelError::AlreadyInstalled {
            identifier: FALLBACK_IDENTIFIER.to_owned()
        }
    );
}

// ============================================================================
// Emission
// ============================================================================

/// Verifies emit reaches the tracing backend tagged with the fallback names.
#[test]
fn emit_without_install_reaches_tracing_backend() {
    let collector = Collector::default();
    let seen = Arc::clone(&collector.seen);
    let subscriber = tracing_subscriber::registry().with(collector);

    tracing::subscriber::with_default(subscriber, || {
        emit(MessageCategory::Error, Priority::Low, "fallback-emit");
    });

    let seen = seen.lock().unwrap_or_else(PoisonError::into_inner);
    let hits: Vec<_> = seen
        .iter()
        .filter(|s| s.message.contains("fallback-emit"))
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].message, "\u{1F534} ERROR: - fallback-emit");
    assert_eq!(hits[0].level, Some(Level::ERROR));
    assert_eq!(hits[0].subsystem, "logger_log.logger.plist");
    assert_eq!(hits[0].category, "logger_log-log");
}
