//! crates/logger/src/config.rs
//! Logger configuration: channel identifier and verbosity.

use crate::channel::ChannelId;
use crate::facade::Logger;
use crate::levels::VerbosityLevel;

/// Settings an adopting component uses to build its [`Logger`].
///
/// With the `serde` feature the type deserialises from tables such as
/// `{ "identifier": "com.example.app", "verbosity": "medium" }`; missing
/// fields take their defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Application identifier naming the logging channel.
    pub identifier: Option<String>,
    /// Verbosity applied to the built logger.
    pub verbosity: VerbosityLevel,
}

impl LoggerConfig {
    /// Creates a configuration at the default verbosity with no identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the channel identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the verbosity.
    #[must_use]
    pub fn verbosity(mut self, level: VerbosityLevel) -> Self {
        self.verbosity = level;
        self
    }

    /// Resolves the configured identifier, falling back to
    /// [`FALLBACK_IDENTIFIER`](crate::FALLBACK_IDENTIFIER).
    #[must_use]
    pub fn channel_id(&self) -> ChannelId {
        ChannelId::resolve(self.identifier.as_deref())
    }

    /// Builds a logger over `backend` at the configured verbosity.
    pub fn build<B>(&self, backend: B) -> Logger<B> {
        Logger::new(backend).with_verbosity(self.verbosity)
    }
}
