// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for search: strip diacritics, lowercase, collapse whitespace.
///
/// Lets plain ASCII queries hit accented catalogue text:
/// - "Côte d'Ivoire" → "cote d'ivoire"
/// - "São Paulo" → "sao paulo"
/// - "Zürich" → "zurich"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Drop combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// Without the feature (lean WASM builds) only steps 3 and 4 run.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase and collapse whitespace. Assumes ASCII or pre-normalized input.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized terms.
///
/// Words are maximal runs of alphanumeric characters; everything else
/// (whitespace, hyphens, apostrophes, punctuation) separates them. Terms come
/// back in text order, duplicates included, so callers can count frequencies.
///
/// ```
/// use geohub::util::tokenize;
///
/// assert_eq!(tokenize("Chlorophyll-a in Africa"), vec!["chlorophyll", "a", "in", "africa"]);
/// assert!(tokenize("  --  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_word_boundary)
        .filter(|word| !word.is_empty())
        .map(normalize)
        // Normalization can empty a token made only of combining marks
        .filter(|term| !term.is_empty())
        .collect()
}
