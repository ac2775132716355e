// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index over a collection's text fields.
//!
//! Built once per collection (see [`cache`]), then queried on every keystroke.
//! The index holds:
//!
//! - a **sorted vocabulary**, so prefix expansion is a binary search plus a
//!   forward scan;
//! - **postings** per vocabulary term: which item, which field, how often;
//! - **field lengths** per item and their averages, for BM25 normalization;
//! - the **stored fields** of every item, echoed back with each hit.
//!
//! # Invariants
//!
//! - `vocabulary` is strictly ascending (sorted, no duplicates).
//! - `postings[t]` belongs to `vocabulary[t]` and is ordered by item position.
//! - Building the same items with the same options always produces the same
//!   index, with or without the `parallel` feature.

pub mod cache;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{ContentItem, ItemId};
use crate::util::tokenize;

/// Which fields an index reads.
///
/// `fields` are tokenized and searched; `store_fields` are copied verbatim
/// into every hit. The two lists play different roles and may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexOptions {
    pub fields: Vec<String>,
    #[serde(default, alias = "store_fields")]
    pub store_fields: Vec<String>,
}

impl IndexOptions {
    pub fn new<F, S>(fields: F, store_fields: S) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            store_fields: store_fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// One occurrence record: `term` appears `tf` times in `field` of item `doc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Posting {
    /// Position of the item in the indexed slice.
    pub doc: u32,
    /// Position of the field in `IndexOptions::fields`.
    pub field: u16,
    pub tf: u32,
}

/// Searchable inverted index. See the module docs for its layout.
#[derive(Debug, Clone)]
pub struct TextIndex {
    pub(crate) options: IndexOptions,
    pub(crate) ids: Vec<ItemId>,
    pub(crate) stored: Vec<Map<String, Value>>,
    /// `field_lengths[doc][field]` in terms.
    pub(crate) field_lengths: Vec<Vec<u32>>,
    pub(crate) avg_field_lengths: Vec<f64>,
    pub(crate) vocabulary: Vec<String>,
    pub(crate) postings: Vec<Vec<Posting>>,
    /// `doc_freqs[t][field]`: how many items carry `vocabulary[t]` in `field`.
    pub(crate) doc_freqs: Vec<Vec<u32>>,
}

/// Per-item analysis, the parallelizable part of the build.
struct Analyzed {
    /// One token list per configured field.
    fields: Vec<Vec<String>>,
    stored: Map<String, Value>,
}

fn analyze(item: &ContentItem, options: &IndexOptions) -> Analyzed {
    let fields = options
        .fields
        .iter()
        .map(|path| {
            item.field(path)
                .into_iter()
                .flat_map(tokenize)
                .collect::<Vec<_>>()
        })
        .collect();

    let stored = options
        .store_fields
        .iter()
        .filter_map(|key| item.get(key).map(|v| (key.clone(), v.clone())))
        .collect();

    Analyzed { fields, stored }
}

impl TextIndex {
    /// Index `items` according to `options`.
    ///
    /// Never fails: items without a configured field simply contribute an
    /// empty field, and an empty slice yields an empty (but usable) index.
    pub fn build(items: &[ContentItem], options: &IndexOptions) -> Self {
        #[cfg(feature = "parallel")]
        let analyzed: Vec<Analyzed> = items.par_iter().map(|item| analyze(item, options)).collect();
        #[cfg(not(feature = "parallel"))]
        let analyzed: Vec<Analyzed> = items.iter().map(|item| analyze(item, options)).collect();

        let num_fields = options.fields.len();
        let mut terms: BTreeMap<&str, Vec<Posting>> = BTreeMap::new();
        let mut field_lengths = Vec::with_capacity(analyzed.len());
        let mut totals = vec![0u64; num_fields];

        for (doc, analysis) in analyzed.iter().enumerate() {
            let mut lengths = Vec::with_capacity(num_fields);
            for (field, tokens) in analysis.fields.iter().enumerate() {
                lengths.push(tokens.len() as u32);
                totals[field] += tokens.len() as u64;

                let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
                for token in tokens {
                    *counts.entry(token.as_str()).or_default() += 1;
                }
                for (term, tf) in counts {
                    terms.entry(term).or_default().push(Posting {
                        doc: doc as u32,
                        field: field as u16,
                        tf,
                    });
                }
            }
            field_lengths.push(lengths);
        }

        let doc_count = analyzed.len().max(1) as f64;
        let avg_field_lengths = totals.iter().map(|t| *t as f64 / doc_count).collect();

        let mut vocabulary = Vec::with_capacity(terms.len());
        let mut postings = Vec::with_capacity(terms.len());
        let mut doc_freqs = Vec::with_capacity(terms.len());
        for (term, list) in terms {
            let mut df = vec![0u32; num_fields];
            for posting in &list {
                df[posting.field as usize] += 1;
            }
            vocabulary.push(term.to_string());
            postings.push(list);
            doc_freqs.push(df);
        }

        debug!(
            items = items.len(),
            fields = num_fields,
            terms = vocabulary.len(),
            "built text index"
        );

        Self {
            options: options.clone(),
            ids: items.iter().map(|item| item.id).collect(),
            stored: analyzed.into_iter().map(|a| a.stored).collect(),
            field_lengths,
            avg_field_lengths,
            vocabulary,
            postings,
            doc_freqs,
        }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sorted, deduplicated index terms.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Position of an exact term in the vocabulary.
    pub(crate) fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
    }
}
