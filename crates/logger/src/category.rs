//! crates/logger/src/category.rs
//! Message categories, their rendering prefixes and backend severities.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::severity::Severity;

/// Semantic classification of a log message.
///
/// Each category carries a fixed rendering prefix (a coloured glyph followed by
/// the upper-cased category name and a colon) and maps onto a backend
/// [`Severity`]. Both are pure functions of the variant, so the mapping can be
/// relied upon to stay stable for the lifetime of the process.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MessageCategory {
    /// Something went wrong.
    Error,
    /// An operation completed successfully.
    Success,
    /// General informational output.
    Message,
}

/// Error returned when parsing a [`MessageCategory`] from an unrecognised string fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unrecognised message category; expected error, success or message")]
pub struct CategoryParseError;

impl MessageCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 3] = [Self::Error, Self::Success, Self::Message];

    /// Returns the lower-case category name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Message => "message",
        }
    }

    /// Returns the glyph that leads the rendered prefix.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Error => "\u{1F534}",
            Self::Success => "\u{1F7E2}",
            Self::Message => "\u{1F7E1}",
        }
    }

    /// Returns the prefix prepended to every rendered message of this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use logger::MessageCategory;
    ///
    /// assert_eq!(MessageCategory::Error.prefix(), "🔴 ERROR:");
    /// assert!(MessageCategory::Success.prefix().ends_with("SUCCESS:"));
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Error => "\u{1F534} ERROR:",
            Self::Success => "\u{1F7E2} SUCCESS:",
            Self::Message => "\u{1F7E1} MESSAGE:",
        }
    }

    /// Returns the severity handed to the backend for this category.
    #[must_use]
    pub const fn backend_severity(self) -> Severity {
        match self {
            Self::Error => Severity::Error,
            Self::Success => Severity::Default,
            Self::Message => Severity::Info,
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MessageCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| s.eq_ignore_ascii_case(category.label()))
            .ok_or(CategoryParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_contains_uppercased_label() {
        for category in MessageCategory::ALL {
            let prefix = category.prefix();
            assert!(!prefix.is_empty());
            assert!(
                prefix.contains(&category.label().to_ascii_uppercase()),
                "prefix {prefix:?} lacks label for {category:?}"
            );
            assert!(prefix.starts_with(category.glyph()));
            assert!(prefix.ends_with(':'));
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_ne!(MessageCategory::Error.glyph(), MessageCategory::Success.glyph());
        assert_ne!(MessageCategory::Error.glyph(), MessageCategory::Message.glyph());
        assert_ne!(MessageCategory::Success.glyph(), MessageCategory::Message.glyph());
    }

    #[test]
    fn backend_severity_mapping() {
        assert_eq!(MessageCategory::Error.backend_severity(), Severity::Error);
        assert_eq!(MessageCategory::Success.backend_severity(), Severity::Default);
        assert_eq!(MessageCategory::Message.backend_severity(), Severity::Info);
    }

    #[test]
    fn backend_severity_is_deterministic() {
        for category in MessageCategory::ALL {
            let first = category.backend_severity();
            for _ in 0..4 {
                assert_eq!(category.backend_severity(), first);
            }
        }
    }

    #[test]
    fn from_str_accepts_labels_case_insensitively() {
        assert_eq!("error".parse(), Ok(MessageCategory::Error));
        assert_eq!(" Success ".parse(), Ok(MessageCategory::Success));
        assert_eq!("MESSAGE".parse(), Ok(MessageCategory::Message));
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!("".parse::<MessageCategory>(), Err(CategoryParseError));
        assert_eq!("timeout".parse::<MessageCategory>(), Err(CategoryParseError));
    }
}
