//! crates/logger/src/levels.rs
//! Message priorities and logger verbosity levels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum verbosity a message needs before it surfaces.
///
/// [`Priority::AlwaysShow`] bypasses the verbosity check entirely. The default
/// priority is [`Priority::Low`], the lowest filterable tier.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Shown from [`VerbosityLevel::Low`] upwards.
    #[default]
    Low,
    /// Shown from [`VerbosityLevel::Medium`] upwards.
    Medium,
    /// Shown only at [`VerbosityLevel::High`].
    High,
    /// Shown regardless of verbosity, including [`VerbosityLevel::None`].
    AlwaysShow,
}

/// Verbosity configured on a logger.
///
/// Levels are totally ordered by declaration order:
/// `None < Low < Medium < High`. The default is [`VerbosityLevel::High`],
/// which shows every message.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum VerbosityLevel {
    /// Suppress everything except [`Priority::AlwaysShow`].
    None = 0,
    /// Show low-priority messages.
    Low = 1,
    /// Show low and medium priority messages.
    Medium = 2,
    /// Show every message.
    #[default]
    High = 3,
}

/// Error returned when parsing a [`Priority`] fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unrecognised priority; expected low, medium, high or always")]
pub struct PriorityParseError;

/// Error returned when parsing a [`VerbosityLevel`] fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unrecognised verbosity level; expected none, low, medium, high or 0-3")]
pub struct VerbosityParseError;

impl Priority {
    /// Every priority in declaration order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::AlwaysShow];

    /// Returns the verbosity level of the same name, or `None` for
    /// [`Priority::AlwaysShow`], which has no threshold.
    #[must_use]
    pub const fn required_level(self) -> Option<VerbosityLevel> {
        match self {
            Self::Low => Some(VerbosityLevel::Low),
            Self::Medium => Some(VerbosityLevel::Medium),
            Self::High => Some(VerbosityLevel::High),
            Self::AlwaysShow => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::AlwaysShow => "always_show",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "always" | "alwaysshow" | "always_show" | "always-show" => Ok(Self::AlwaysShow),
            _ => Err(PriorityParseError),
        }
    }
}

impl VerbosityLevel {
    /// Every level from least to most verbose.
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    /// Returns the numeric rank (`None` = 0 through `High` = 3).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the level with the given rank, if any.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::None),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VerbosityLevel {
    type Err = VerbosityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(rank) = s.parse::<u8>() {
            return Self::from_rank(rank).ok_or(VerbosityParseError);
        }
        Self::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.label()))
            .ok_or(VerbosityParseError)
    }
}
