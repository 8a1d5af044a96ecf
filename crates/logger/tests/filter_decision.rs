//! Integration tests for the emit/suppress decision.
//!
//! These tests check the filtering policy exhaustively over both enumerations
//! and exercise the monotonicity guarantee with property tests.

use logger::{Priority, VerbosityLevel, should_emit};
use proptest::prelude::*;

const FILTERABLE: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

fn any_priority() -> impl Strategy<Value = Priority> {
    proptest::sample::select(Priority::ALL.to_vec())
}

fn any_level() -> impl Strategy<Value = VerbosityLevel> {
    proptest::sample::select(VerbosityLevel::ALL.to_vec())
}

// ============================================================================
// Bypass and Silence
// ============================================================================

/// Verifies AlwaysShow surfaces at every verbosity, including None.
#[test]
fn always_show_is_emitted_at_every_level() {
    for level in VerbosityLevel::ALL {
        assert!(should_emit(Priority::AlwaysShow, level), "level={level:?}");
    }
}

/// Verifies None suppresses every priority except AlwaysShow.
#[test]
fn none_suppresses_all_filterable_priorities() {
    for priority in FILTERABLE {
        assert!(!should_emit(priority, VerbosityLevel::None), "priority={priority:?}");
    }
}

// ============================================================================
// Threshold Semantics
// ============================================================================

/// Verifies a filterable priority surfaces exactly when the rank threshold is met.
#[test]
fn filterable_priorities_compare_ranks() {
    for priority in FILTERABLE {
        let required = priority.required_level().expect("filterable priority");
        for level in VerbosityLevel::ALL {
            let expected = level != VerbosityLevel::None && level.rank() >= required.rank();
            assert_eq!(
                should_emit(priority, level),
                expected,
                "priority={priority:?} level={level:?}"
            );
        }
    }
}

/// Verifies High verbosity shows every priority.
#[test]
fn high_shows_everything() {
    for priority in Priority::ALL {
        assert!(should_emit(priority, VerbosityLevel::High));
    }
}

/// Verifies the lowest non-silent level only shows Low and AlwaysShow.
#[test]
fn low_shows_low_and_always() {
    let shown: Vec<_> = Priority::ALL
        .into_iter()
        .filter(|p| should_emit(*p, VerbosityLevel::Low))
        .collect();
    assert_eq!(shown, [Priority::Low, Priority::AlwaysShow]);
}

// ============================================================================
// Monotonicity
// ============================================================================

/// Verifies raising verbosity never hides a message, checked exhaustively.
#[test]
fn raising_verbosity_never_hides_exhaustive() {
    for priority in Priority::ALL {
        for lower in VerbosityLevel::ALL {
            for higher in VerbosityLevel::ALL.into_iter().filter(|l| *l > lower) {
                if should_emit(priority, lower) {
                    assert!(
                        should_emit(priority, higher),
                        "priority={priority:?} shown at {lower:?} but hidden at {higher:?}"
                    );
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn raising_verbosity_never_hides(
        priority in any_priority(),
        a in any_level(),
        b in any_level(),
    ) {
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
        if should_emit(priority, lower) {
            prop_assert!(should_emit(priority, higher));
        }
    }

    #[test]
    fn decision_is_deterministic(priority in any_priority(), level in any_level()) {
        prop_assert_eq!(should_emit(priority, level), should_emit(priority, level));
    }

    #[test]
    fn parsed_levels_filter_like_their_variants(rank in 0u8..=3, priority in any_priority()) {
        let parsed: VerbosityLevel = rank.to_string().parse().expect("rank in range");
        let direct = VerbosityLevel::from_rank(rank).expect("rank in range");
        prop_assert_eq!(should_emit(priority, parsed), should_emit(priority, direct));
    }
}
