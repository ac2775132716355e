// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded Levenshtein distance.
//!
//! The bounded distance must agree with the unbounded one whenever it answers,
//! be symmetric, and respect the triangle inequality. Fuzzy search trusts it
//! to decide which vocabulary terms a typo reaches.

#![no_main]

use arbitrary::Arbitrary;
use geohub::fuzzy::levenshtein_bounded;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

/// Cap in characters, never splitting a code point.
fn cap(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fuzz_target!(|input: MatchInput| {
    let a = cap(&input.a, 40);
    let b = cap(&input.b, 40);
    let c = cap(&input.c, 40);
    let max = usize::from(input.max % 8);
    let unbounded = a.chars().count().max(b.chars().count());

    let exact = levenshtein_bounded(&a, &b, unbounded).expect("distance never exceeds the longer length");

    // INVARIANT 1: bounded answers agree with the exact distance
    match levenshtein_bounded(&a, &b, max) {
        Some(d) => assert_eq!(d, exact),
        None => assert!(exact > max),
    }

    // INVARIANT 2: symmetry
    assert_eq!(levenshtein_bounded(&b, &a, max), levenshtein_bounded(&a, &b, max));

    // INVARIANT 3: identity
    assert_eq!(levenshtein_bounded(&a, &a, 0), Some(0));

    // INVARIANT 4: triangle inequality
    let wide = 80;
    if let (Some(ac), Some(cb)) = (levenshtein_bounded(&a, &c, wide), levenshtein_bounded(&c, &b, wide)) {
        assert!(exact <= ac + cb);
    }
});
