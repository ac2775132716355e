// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The edit budget is relative to the query term length, so short terms stay
//! strict ("flood" tolerates one edit) while long ones get more room
//! ("chlorophyll" tolerates two).

mod levenshtein;

pub use levenshtein::*;
