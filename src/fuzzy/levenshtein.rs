// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance. If two strings differ
//! in length by more than the budget, skip the O(nm) DP entirely. Most of the
//! vocabulary is rejected this way before anything is allocated.

/// Hard ceiling on the edit budget, whatever the term length.
pub const MAX_EDIT_DISTANCE: usize = 6;

/// Edit budget for a query term of `len` characters at a given fuzziness.
///
/// `min(6, round(len * fuzzy))`. Fuzziness of 0 (or below) disables fuzzy
/// matching altogether.
///
/// | term          | len | budget at 0.2 |
/// |---------------|-----|---------------|
/// | `sa`          | 2   | 0             |
/// | `flood`       | 5   | 1             |
/// | `chlorophy`   | 9   | 2             |
/// | `chlorophyll` | 11  | 2             |
pub fn max_edits(len: usize, fuzzy: f64) -> usize {
    if fuzzy.is_nan() || fuzzy <= 0.0 {
        return 0;
    }
    ((len as f64 * fuzzy).round() as usize).min(MAX_EDIT_DISTANCE)
}

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the length difference exceeds `max`, return `None` immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
///
/// Neither exit can reject a pair that is actually within `max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    // Character counts, not byte lengths
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|d| *d <= max)
}
