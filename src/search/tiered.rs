// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query term expansion: exact, then prefix, then fuzzy.
//!
//! A vocabulary term reachable through several tiers is kept once, with the
//! best weight any tier gave it. Exact always wins (1.0 is above both tier
//! ceilings), so an exact match is never demoted by also being a fuzzy one.

use std::collections::HashMap;
use std::ops::Range;

use super::SearchOptions;
use crate::fuzzy::{levenshtein_bounded, max_edits};
use crate::index::TextIndex;
use crate::scoring::{fuzzy_weight, prefix_weight, EXACT_WEIGHT};

/// A vocabulary term a query term expanded to, and how much it counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expansion {
    /// Position in [`TextIndex::vocabulary`].
    pub term: usize,
    pub weight: f64,
}

/// Range of vocabulary terms starting with `prefix` (O(log k)).
///
/// The vocabulary is sorted, so every term with a given prefix sits in one
/// contiguous run starting at the first term `>= prefix`.
pub fn prefix_search_vocabulary(vocabulary: &[String], prefix: &str) -> Range<usize> {
    if prefix.is_empty() {
        return 0..0;
    }
    let start = vocabulary.partition_point(|term| term.as_str() < prefix);
    let len = vocabulary[start..]
        .iter()
        .take_while(|term| term.starts_with(prefix))
        .count();
    start..start + len
}

/// Expand one (normalized) query term against the index vocabulary.
///
/// `is_last` marks the final query term, the only one prefix expansion
/// applies to. Expansions come back in vocabulary order.
pub fn expand_term(
    index: &TextIndex,
    term: &str,
    is_last: bool,
    options: &SearchOptions,
) -> Vec<Expansion> {
    let vocabulary = index.vocabulary();
    let query_len = term.chars().count();
    let mut best: HashMap<usize, f64> = HashMap::new();
    let mut offer = |t: usize, weight: f64| {
        let slot = best.entry(t).or_insert(weight);
        if weight > *slot {
            *slot = weight;
        }
    };

    // T1: exact
    if let Some(t) = index.term_index(term) {
        offer(t, EXACT_WEIGHT);
    }

    // T2: prefix
    if options.prefix && is_last {
        for t in prefix_search_vocabulary(vocabulary, term) {
            let extra = vocabulary[t].chars().count() - query_len;
            if extra > 0 {
                offer(t, prefix_weight(query_len, extra));
            }
        }
    }

    // T3: fuzzy
    let budget = max_edits(query_len, options.fuzzy);
    if budget > 0 {
        for (t, candidate) in vocabulary.iter().enumerate() {
            if let Some(distance) = levenshtein_bounded(term, candidate, budget) {
                if distance > 0 {
                    offer(t, fuzzy_weight(query_len, distance));
                }
            }
        }
    }

    let mut expansions: Vec<Expansion> = best
        .into_iter()
        .map(|(term, weight)| Expansion { term, weight })
        .collect();
    expansions.sort_by_key(|e| e.term);
    expansions
}
