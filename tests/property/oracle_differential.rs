//! Differential tests against `strsim`, the reference edit distance.

use geohub::fuzzy::{levenshtein_bounded, max_edits, MAX_EDIT_DISTANCE};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eé]{0,10}").unwrap()
}

proptest! {
    /// Within the bound, the bounded distance is the true distance.
    #[test]
    fn prop_bounded_matches_reference(a in word(), b in word(), max in 0usize..8) {
        let expected = strsim::levenshtein(&a, &b);
        let actual = levenshtein_bounded(&a, &b, max);
        if expected <= max {
            prop_assert_eq!(actual, Some(expected));
        } else {
            prop_assert_eq!(actual, None);
        }
    }

    /// Distance is symmetric.
    #[test]
    fn prop_bounded_symmetric(a in word(), b in word()) {
        prop_assert_eq!(levenshtein_bounded(&a, &b, 10), levenshtein_bounded(&b, &a, 10));
    }

    /// A tighter budget never finds a match a looser one misses.
    #[test]
    fn prop_bounded_monotone_in_budget(a in word(), b in word(), max in 0usize..8) {
        if let Some(d) = levenshtein_bounded(&a, &b, max) {
            prop_assert_eq!(levenshtein_bounded(&a, &b, max + 1), Some(d));
        }
    }

    /// The edit budget never exceeds the cap and grows with term length.
    #[test]
    fn prop_edit_budget_monotone(len in 0usize..64, fuzzy in 0.0f64..1.0) {
        let here = max_edits(len, fuzzy);
        prop_assert!(here <= MAX_EDIT_DISTANCE);
        prop_assert!(here <= max_edits(len + 1, fuzzy));
    }
}
