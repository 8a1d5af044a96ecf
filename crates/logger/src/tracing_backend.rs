//! crates/logger/src/tracing_backend.rs
//! Backend that forwards rendered messages into the `tracing` ecosystem.
//!
//! [`TracingBackend`] is the channel used when no system backend has been
//! installed. Each write becomes a `tracing` event with target `logger`, at
//! the level given by [`Severity::tracing_level`], carrying the channel's
//! subsystem and category as fields.
//!
//! ```rust,ignore
//! use logger::{Logger, TracingBackend, ChannelId, init_tracing};
//!
//! init_tracing()?;
//! let logger = Logger::new(TracingBackend::new(ChannelId::from_process()));
//! ```

use tracing::Level;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::backend::LogBackend;
use crate::channel::ChannelId;
use crate::severity::Severity;

/// Default `EnvFilter` directive used by [`init_tracing`] when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Forwards writes to `tracing` events.
#[derive(Clone, Debug)]
pub struct TracingBackend {
    id: ChannelId,
    subsystem: String,
    category: String,
}

impl TracingBackend {
    /// Creates a backend tagged with the given channel identifier.
    #[must_use]
    pub fn new(id: ChannelId) -> Self {
        let subsystem = id.subsystem();
        let category = id.category();
        Self {
            id,
            subsystem,
            category,
        }
    }

    /// Returns the identifier the backend tags events with.
    #[must_use]
    pub const fn id(&self) -> &ChannelId {
        &self.id
    }
}

impl Default for TracingBackend {
    fn default() -> Self {
        Self::new(ChannelId::default())
    }
}

impl LogBackend for TracingBackend {
    fn write(&self, rendered: &str, severity: Severity) {
        let subsystem = self.subsystem.as_str();
        let category = self.category.as_str();
        // Callsites need a static level, so dispatch on the mapped value.
        let level = severity.tracing_level();
        if level == Level::ERROR {
            tracing::error!(target: "logger", subsystem, category, "{rendered}");
        } else if level == Level::INFO {
            tracing::info!(target: "logger", subsystem, category, "{rendered}");
        } else {
            tracing::debug!(target: "logger", subsystem, category, "{rendered}");
        }
    }
}

/// Installs a global subscriber with an `EnvFilter` and a fmt layer.
///
/// The filter reads `RUST_LOG` and falls back to [`DEFAULT_FILTER`]. Returns an
/// error instead of panicking when a global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_tracing_with_filter(filter)
}

/// Installs a global subscriber using a caller-supplied filter layer.
///
/// ```rust,ignore
/// use logger::init_tracing_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(EnvFilter::new("logger=debug"))?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
}
