// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole UI states.
//!
//! Any query, any facet selection (known or unknown categories) and any page
//! must produce a well-formed result view.

#![no_main]

use arbitrary::Arbitrary;
use geohub::catalogue::views::{self, Scope, View};
use geohub::{Explorer, QueryState};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct StateInput {
    query: String,
    selections: Vec<(String, String)>,
    page: u16,
}

fuzz_target!(|input: StateInput| {
    static EXPLORER: std::sync::OnceLock<Explorer> = std::sync::OnceLock::new();
    let explorer = EXPLORER.get_or_init(|| {
        views::explorer(View::Explore, &Scope::default()).expect("embedded catalogue loads")
    });

    let mut state = QueryState::new().with_query(input.query.chars().take(100).collect::<String>());
    for (category, value) in input.selections.iter().take(8) {
        state = state.toggle_facet(category, value);
    }
    let state = state.with_page(usize::from(input.page));

    let view = explorer.compute(&state);

    assert!(view.page >= 1);
    assert!(view.items.len() <= view.page_size);
    assert_eq!(view.total_pages, view.total_items.div_ceil(view.page_size));
    if view.total_items > 0 {
        assert!(view.page <= view.total_pages);
    }
    assert_eq!(explorer.compute(&state), view);
});
