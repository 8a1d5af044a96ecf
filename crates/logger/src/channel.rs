//! crates/logger/src/channel.rs
//! Process-wide logging channel, keyed by an application identifier.

use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::backend::LogBackend;
use crate::tracing_backend::TracingBackend;

/// Identifier used when the process has no usable application identifier.
pub const FALLBACK_IDENTIFIER: &str = "logger_log";

static PROCESS_CHANNEL: OnceLock<Channel> = OnceLock::new();

/// Application identifier that names a logging channel.
///
/// The identifier determines the channel's subsystem (`<id>.logger.plist`)
/// and category (`<id>-log`), which system backends use to group entries.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChannelId {
    identifier: String,
}

impl ChannelId {
    /// Uses `identifier` when it is present and non-blank, otherwise
    /// [`FALLBACK_IDENTIFIER`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logger::{ChannelId, FALLBACK_IDENTIFIER};
    ///
    /// assert_eq!(ChannelId::resolve(Some("com.example.app")).identifier(), "com.example.app");
    /// assert_eq!(ChannelId::resolve(None).identifier(), FALLBACK_IDENTIFIER);
    /// assert_eq!(ChannelId::resolve(Some("  ")).identifier(), FALLBACK_IDENTIFIER);
    /// ```
    #[must_use]
    pub fn resolve(identifier: Option<&str>) -> Self {
        let identifier = identifier
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(FALLBACK_IDENTIFIER);
        Self {
            identifier: identifier.to_owned(),
        }
    }

    /// Derives the identifier from the running executable's file stem.
    ///
    /// Never used implicitly; pass the result to [`Channel::new`] or
    /// [`TracingBackend::new`] to name a channel after the binary.
    #[must_use]
    pub fn from_process() -> Self {
        let exe = env::current_exe().ok();
        let stem = exe
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(OsStr::to_str);
        Self::resolve(stem)
    }

    /// Returns the resolved identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the subsystem name, `<id>.logger.plist`.
    #[must_use]
    pub fn subsystem(&self) -> String {
        format!("{}.logger.plist", self.identifier)
    }

    /// Returns the category name, `<id>-log`.
    #[must_use]
    pub fn category(&self) -> String {
        format!("{}-log", self.identifier)
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// A backend bound to the identifier it was opened for.
#[derive(Clone)]
pub struct Channel {
    id: ChannelId,
    backend: Arc<dyn LogBackend>,
}

impl Channel {
    /// Pairs an identifier with the backend that serves it.
    pub fn new(id: ChannelId, backend: Arc<dyn LogBackend>) -> Self {
        Self { id, backend }
    }

    /// Returns the channel's identifier.
    #[must_use]
    pub const fn id(&self) -> &ChannelId {
        &self.id
    }

    /// Returns the shared backend.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn LogBackend> {
        &self.backend
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Errors raised while installing the process channel.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ChannelError {
    /// A channel was installed (or looked up) before this call.
    #[error("a process logging channel is already installed for '{identifier}'")]
    AlreadyInstalled {
        /// Identifier of the channel already in place.
        identifier: String,
    },
}

/// Installs the process-wide channel.
///
/// Only the first installation succeeds. Looking the channel up through
/// [`process_channel`] before installing pins the fallback channel, after
/// which installation fails as well.
pub fn install(channel: Channel) -> Result<(), ChannelError> {
    let identifier = channel.id.identifier.clone();
    PROCESS_CHANNEL.set(channel).map_err(|_rejected| {
        let installed = PROCESS_CHANNEL
            .get()
            .map_or(identifier, |existing| existing.id.identifier.clone());
        ChannelError::AlreadyInstalled {
            identifier: installed,
        }
    })
}

/// Looks up the process-wide channel.
///
/// When nothing was installed, a channel keyed by [`FALLBACK_IDENTIFIER`] and
/// backed by [`TracingBackend`] is used.
pub fn process_channel() -> &'static Channel {
    PROCESS_CHANNEL.get_or_init(|| {
        let id = ChannelId::default();
        tracing::debug!(
            target: "logger",
            identifier = %id,
            "no logging channel installed; using tracing backend"
        );
        let backend: Arc<dyn LogBackend> = Arc::new(TracingBackend::new(id.clone()));
        Channel::new(id, backend)
    })
}
