// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the explore view to verify search never
//! panics, never invents items and always ranks by descending score.

#![no_main]

use geohub::catalogue::views::{self, Scope, View};
use geohub::Explorer;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|query: &[u8]| {
    static EXPLORER: std::sync::OnceLock<Explorer> = std::sync::OnceLock::new();
    let explorer = EXPLORER.get_or_init(|| {
        views::explorer(View::Explore, &Scope::default()).expect("embedded catalogue loads")
    });

    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: search() never panics
    let hits = explorer.search(&query);

    // INVARIANT 2: every hit is a distinct item of the collection
    let mut seen = HashSet::new();
    for (item, score) in &hits {
        assert!(item.id.as_usize() < explorer.collection().len());
        assert!(seen.insert(item.id), "duplicate hit {}", item.id);
        if query.trim().is_empty() {
            assert!(score.is_none());
        } else {
            assert!(score.is_some_and(f64::is_finite));
        }
    }

    // INVARIANT 3: scores never increase down the list
    let scores: Vec<f64> = hits.iter().filter_map(|(_, s)| *s).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
});
