// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text search over a [`TextIndex`].
//!
//! Every query term is expanded against the vocabulary in three tiers:
//!
//! 1. **Exact**: the term itself, weight 1.0
//! 2. **Prefix**: vocabulary terms starting with the last query term, so
//!    results show up while the user is still typing
//! 3. **Fuzzy**: vocabulary terms within the edit budget, for typos
//!
//! Expanded terms are scored with BM25+ per field, weighted by tier, and
//! summed. Query terms combine with OR; an item matching more of them is
//! multiplied up accordingly.

mod tiered;

pub use tiered::{expand_term, prefix_search_vocabulary, Expansion};

use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

use crate::index::TextIndex;
use crate::scoring::bm25_plus;
use crate::types::SearchHit;
use crate::util::tokenize;

/// Matching behavior for a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Edit budget as a fraction of the query term length. 0 disables fuzzy matching.
    pub fuzzy: f64,
    /// Expand the last query term to every vocabulary term it prefixes.
    pub prefix: bool,
}

impl SearchOptions {
    /// What every list on the site searches with.
    pub const DEFAULT: SearchOptions = SearchOptions {
        fuzzy: 0.2,
        prefix: true,
    };
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Accumulated score for one item.
#[derive(Default)]
struct Candidate {
    score: f64,
    terms: BTreeSet<String>,
    query_terms: BTreeSet<usize>,
}

impl TextIndex {
    /// Run a text query and rank the matching items.
    ///
    /// A query with no terms (empty, blank or punctuation only) matches
    /// nothing; callers that want "no query means everything" handle that
    /// before calling. Hits come back by score descending, ties by item id.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit> {
        self.rank(query, options)
            .into_iter()
            .map(|(_, hit)| hit)
            .collect()
    }

    /// [`TextIndex::search`], each hit paired with the position of its item
    /// in the slice the index was built from.
    ///
    /// Item ids are whatever the collection carries; positions are what
    /// correlate a hit back to its item.
    pub(crate) fn rank(&self, query: &str, options: &SearchOptions) -> Vec<(usize, SearchHit)> {
        let mut query_terms = tokenize(query);
        // Distinct terms, first occurrence wins
        let mut seen = BTreeSet::new();
        query_terms.retain(|t| seen.insert(t.clone()));

        if query_terms.is_empty() || self.is_empty() {
            return Vec::new();
        }

        let doc_count = self.len();
        let last = query_terms.len() - 1;
        let mut candidates: HashMap<u32, Candidate> = HashMap::new();

        for (qi, query_term) in query_terms.iter().enumerate() {
            let expansions = expand_term(self, query_term, qi == last, options);
            for Expansion { term, weight } in expansions {
                let vocab_term = &self.vocabulary[term];
                let doc_freqs = &self.doc_freqs[term];
                for posting in &self.postings[term] {
                    let field = posting.field as usize;
                    let score = bm25_plus(
                        posting.tf,
                        doc_freqs[field] as usize,
                        doc_count,
                        self.field_lengths[posting.doc as usize][field],
                        self.avg_field_lengths[field],
                    );
                    let candidate = candidates.entry(posting.doc).or_default();
                    candidate.score += weight * score;
                    candidate.terms.insert(vocab_term.clone());
                    candidate.query_terms.insert(qi);
                }
            }
        }

        let mut hits: Vec<(usize, SearchHit)> = candidates
            .into_iter()
            .map(|(doc, c)| {
                let hit = SearchHit {
                    id: self.ids[doc as usize],
                    score: c.score * c.query_terms.len() as f64,
                    terms: c.terms.into_iter().collect(),
                    query_terms: c.query_terms.iter().map(|&qi| query_terms[qi].clone()).collect(),
                    stored: self
                        .stored
                        .get(doc as usize)
                        .cloned()
                        .unwrap_or_else(Map::new),
                };
                (doc as usize, hit)
            })
            .collect();

        hits.sort_by(|(pa, a), (pb, b)| {
            b.score
                .total_cmp(&a.score)
                .then(a.id.cmp(&b.id))
                .then(pa.cmp(pb))
        });

        trace!(query, terms = query_terms.len(), hits = hits.len(), "text search");
        hits
    }
}
