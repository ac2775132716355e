// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Constants
//!
//! | Constant     | Value | Role |
//! |--------------|-------|------|
//! | `BM25_K1`    | 1.2   | Term frequency saturation |
//! | `BM25_B`     | 0.7   | Field length normalization |
//! | `BM25_DELTA` | 0.5   | BM25+ floor, so long fields never score zero |
//! | `PREFIX_WEIGHT` | 0.375 | Ceiling for prefix expansions |
//! | `FUZZY_WEIGHT`  | 0.45  | Ceiling for fuzzy expansions |
//!
//! An exact match always weighs 1.0. Prefix and fuzzy weights shrink as the
//! expansion gets further from the query term, and neither can reach 1.0.

// =============================================================================
// BM25+ CONSTANTS
// =============================================================================

pub const BM25_K1: f64 = 1.2;

pub const BM25_B: f64 = 0.7;

pub const BM25_DELTA: f64 = 0.5;

// =============================================================================
// MATCH WEIGHTS
// =============================================================================

/// Weight of an exact vocabulary match.
pub const EXACT_WEIGHT: f64 = 1.0;

/// Ceiling for a prefix expansion ("chloro" → "chlorophyll").
pub const PREFIX_WEIGHT: f64 = 0.375;

/// Ceiling for a fuzzy expansion ("chlorophy" → "chlorophyll").
pub const FUZZY_WEIGHT: f64 = 0.45;

/// How far the prefix weight decays per extra character.
const PREFIX_EXTRA_PENALTY: f64 = 0.3;

/// Inverse document frequency, smoothed so it stays positive.
///
/// `ln(1 + (N - df + 0.5) / (df + 0.5))`
#[inline]
pub fn idf(doc_count: usize, doc_freq: usize) -> f64 {
    let n = doc_count as f64;
    let df = doc_freq as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// BM25+ score of one term in one field of one item.
///
/// `tf` is the term's frequency in the field, `field_len` the field's length
/// in terms and `avg_field_len` the average length of that field across the
/// collection.
pub fn bm25_plus(tf: u32, doc_freq: usize, doc_count: usize, field_len: u32, avg_field_len: f64) -> f64 {
    if tf == 0 {
        return 0.0;
    }
    let tf = f64::from(tf);
    let norm = if avg_field_len > 0.0 {
        f64::from(field_len) / avg_field_len
    } else {
        1.0
    };
    let saturation = (tf * (BM25_K1 + 1.0)) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * norm));
    idf(doc_count, doc_freq) * (BM25_DELTA + saturation)
}

/// Weight of a vocabulary term reached by prefix from a query term.
///
/// `query_len` is the query term length and `extra` how many more characters
/// the vocabulary term has. An exact match is not a prefix expansion.
#[inline]
pub fn prefix_weight(query_len: usize, extra: usize) -> f64 {
    let len = query_len as f64;
    PREFIX_WEIGHT * len / (len + PREFIX_EXTRA_PENALTY * extra as f64)
}

/// Weight of a vocabulary term `distance` edits away from a query term.
#[inline]
pub fn fuzzy_weight(query_len: usize, distance: usize) -> f64 {
    let len = query_len as f64;
    FUZZY_WEIGHT * len / (len + distance as f64)
}
