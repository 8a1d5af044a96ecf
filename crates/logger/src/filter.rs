//! crates/logger/src/filter.rs
//! Emit/suppress decision for a message priority against a verbosity level.

use crate::levels::{Priority, VerbosityLevel};

/// Decides whether a message with `priority` surfaces at `active`.
///
/// [`Priority::AlwaysShow`] is emitted unconditionally. Otherwise nothing is
/// emitted at [`VerbosityLevel::None`], and a message surfaces once the active
/// level is at least the level sharing the priority's name. The decision is
/// monotone: raising the verbosity never hides a message that was shown.
///
/// # Examples
///
/// ```
/// use logger::{Priority, VerbosityLevel, should_emit};
///
/// assert!(should_emit(Priority::AlwaysShow, VerbosityLevel::None));
/// assert!(!should_emit(Priority::Medium, VerbosityLevel::Low));
/// assert!(should_emit(Priority::Medium, VerbosityLevel::Medium));
/// ```
#[must_use]
pub const fn should_emit(priority: Priority, active: VerbosityLevel) -> bool {
    let Some(required) = priority.required_level() else {
        return true;
    };
    if matches!(active, VerbosityLevel::None) {
        return false;
    }
    active.rank() >= required.rank()
}
