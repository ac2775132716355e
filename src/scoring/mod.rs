// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how search hits get their numbers.
//!
//! Two independent pieces multiply together. BM25+ says how much a term
//! matters in a field of a given item; the match weight says how much we
//! trust that the term is what the user typed (exact beats prefix beats fuzzy).

mod core;

pub use self::core::*;
