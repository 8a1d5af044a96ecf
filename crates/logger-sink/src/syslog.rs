//! crates/logger-sink/src/syslog.rs
//! System logging backend over syslog(3).
//!
//! Calls libc `openlog`/`syslog`/`closelog` directly. The channel identifier
//! chosen by the facade becomes the syslog ident, and each category's backend
//! severity selects the syslog priority.

use std::ffi::CString;
use std::fmt;

use logger::{ChannelId, LogBackend, Severity};

/// Syslog facility codes (`LOG_*` from `<syslog.h>`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// Kernel messages (LOG_KERN).
    Kern = libc::LOG_KERN,
    /// User-level messages (LOG_USER), the default for applications.
    #[default]
    User = libc::LOG_USER,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    const NAMED: [(&'static str, Self); 14] = [
        ("kern", Self::Kern),
        ("user", Self::User),
        ("mail", Self::Mail),
        ("daemon", Self::Daemon),
        ("auth", Self::Auth),
        ("syslog", Self::Syslog),
        ("local0", Self::Local0),
        ("local1", Self::Local1),
        ("local2", Self::Local2),
        ("local3", Self::Local3),
        ("local4", Self::Local4),
        ("local5", Self::Local5),
        ("local6", Self::Local6),
        ("local7", Self::Local7),
    ];

    /// Parses a facility name, ignoring ASCII case.
    ///
    /// ```
    /// # #[cfg(unix)]
    /// # {
    /// use logger_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("unknown"), None);
    /// # }
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(label, _)| name.eq_ignore_ascii_case(label))
            .map(|(_, facility)| *facility)
    }

    /// Returns the lower-case facility name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syslog severities (`LOG_EMERG` through `LOG_DEBUG`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// System is unusable (LOG_EMERG).
    Emergency = libc::LOG_EMERG,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = libc::LOG_ALERT,
    /// Critical conditions (LOG_CRIT).
    Critical = libc::LOG_CRIT,
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

impl From<Severity> for SyslogPriority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Default => Self::Notice,
            Severity::Info => Self::Info,
        }
    }
}

/// Facility and ident passed to `openlog(3)`.
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use logger::ChannelId;
/// use logger_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::for_channel(&ChannelId::resolve(Some("com.example.app")));
/// assert_eq!(config.facility(), SyslogFacility::User);
/// assert_eq!(config.tag(), "com.example.app-log");
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a configuration with an explicit facility and tag.
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// Uses the channel's category (`<id>-log`) as the tag on the user facility.
    pub fn for_channel(id: &ChannelId) -> Self {
        Self::new(SyslogFacility::default(), id.category())
    }

    /// Replaces the facility.
    #[must_use]
    pub fn with_facility(mut self, facility: SyslogFacility) -> Self {
        self.facility = facility;
        self
    }

    /// Returns the facility.
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Opens the syslog connection and returns a guard that closes it on drop.
    ///
    /// A tag containing a NUL byte is replaced by the fallback channel's
    /// category. `openlog` is process-global, so only one guard should be
    /// alive at a time.
    pub fn open(&self) -> SyslogGuard {
        let ident = CString::new(self.tag.as_str())
            .or_else(|_| CString::new(ChannelId::default().category()))
            .unwrap_or_default();

        // SAFETY: `ident` is owned by the returned guard, which keeps the
        // pointer valid until `closelog` runs in its `Drop` impl.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
        }

        SyslogGuard { ident }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::for_channel(&ChannelId::default())
    }
}

/// Sends `message` to syslog(3) at `priority`.
///
/// The message is passed as an argument to a `"%s"` format so `%` sequences
/// are never interpreted. Messages containing a NUL byte are dropped.
pub fn syslog_message(priority: SyslogPriority, message: &str) {
    let Ok(message) = CString::new(message) else {
        return;
    };

    // SAFETY: both pointers are valid NUL-terminated strings for the
    // duration of the call; syslog copies what it needs.
    unsafe {
        libc::syslog(priority as libc::c_int, c"%s".as_ptr(), message.as_ptr());
    }
}

/// Open syslog connection; dropping it calls `closelog(3)`.
#[derive(Debug)]
pub struct SyslogGuard {
    ident: CString,
}

impl SyslogGuard {
    /// Returns the ident the connection was opened with.
    pub fn ident(&self) -> &str {
        self.ident.to_str().unwrap_or_default()
    }
}

impl Drop for SyslogGuard {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions; it runs before `ident` is
        // freed because field drops follow this method.
        unsafe {
            libc::closelog();
        }
    }
}

/// [`LogBackend`] that routes rendered messages into syslog.
///
/// ```no_run
/// # #[cfg(unix)]
/// # {
/// use logger::{ChannelId, Log, Logger, MessageCategory, Priority};
/// use logger_sink::syslog::SyslogBackend;
///
/// let id = ChannelId::from_process();
/// let logger = Logger::new(SyslogBackend::open_for_channel(&id));
/// logger.log(MessageCategory::Error, Priority::AlwaysShow, "cannot reach upstream");
/// # }
/// ```
#[derive(Debug)]
pub struct SyslogBackend {
    config: SyslogConfig,
    guard: SyslogGuard,
}

impl SyslogBackend {
    /// Opens syslog with `config`.
    pub fn open(config: SyslogConfig) -> Self {
        let guard = config.open();
        tracing::debug!(
            target: "logger_sink",
            facility = %config.facility(),
            ident = guard.ident(),
            "opened syslog channel"
        );
        Self { config, guard }
    }

    /// Opens syslog for the given channel identifier.
    pub fn open_for_channel(id: &ChannelId) -> Self {
        Self::open(SyslogConfig::for_channel(id))
    }

    /// Returns the configuration the backend was opened with.
    pub const fn config(&self) -> &SyslogConfig {
        &self.config
    }

    /// Returns the ident passed to `openlog`.
    pub fn ident(&self) -> &str {
        self.guard.ident()
    }
}

impl LogBackend for SyslogBackend {
    fn write(&self, rendered: &str, severity: Severity) {
        syslog_message(SyslogPriority::from(severity), rendered);
    }
}
