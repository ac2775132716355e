// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a searchable collection.
//!
//! A collection is a flat list of [`ContentItem`]s, each wrapping the JSON-like
//! record it was built from. Items do not know which of their fields are
//! searched, stored or faceted; that is decided by the view configuration and
//! applied through dotted paths (`"challenges.tags.name"`).
//!
//! # Invariants
//!
//! - **ItemId**: assigned by position when the collection is built, before any
//!   index exists. Unique within the collection and never reassigned while the
//!   collection lives. Search hits are correlated back to items through it.
//!
//! - **Collection**: immutable once built. Identity (the `Arc` pointer) is what
//!   the index cache keys on, so "changing the collection" always means
//!   building a new `Arc`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe item identifier.
///
/// Prevents accidentally passing a page number or a position inside a page
/// where an item id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for slice indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

impl From<ItemId> for usize {
    fn from(id: ItemId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// ITEMS
// =============================================================================

/// One searchable, filterable unit: a resource, a partner, a country...
///
/// The `record` is carried through the pipeline untouched; display code reads
/// whatever it needs from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub record: Map<String, Value>,
}

impl ContentItem {
    pub fn new(id: ItemId, record: Map<String, Value>) -> Self {
        Self { id, record }
    }

    /// Top-level attribute, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    /// Top-level attribute as a string, if present and a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.record.get(key).and_then(Value::as_str)
    }

    /// Every string reachable through a dotted path.
    ///
    /// Arrays are flattened at any depth, so `challenges.tags.name` yields the
    /// name of every tag of every challenge. Absent data yields an empty list.
    pub fn field(&self, path: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut segments = path.split('.');
        if let Some(first) = segments.next() {
            if let Some(value) = self.record.get(first) {
                let rest: Vec<&str> = segments.collect();
                collect_strings(value, &rest, &mut out);
            }
        }
        out
    }

    /// Human-facing label: `title`, falling back to `name`.
    pub fn title(&self) -> &str {
        self.str("title")
            .or_else(|| self.str("name"))
            .unwrap_or_default()
    }
}

/// Walk `path` below `value`, pushing every string leaf.
///
/// Numbers and booleans are not text and are skipped; objects reached with
/// path segments left over are descended; arrays fan out.
fn collect_strings<'a>(value: &'a Value, path: &[&str], out: &mut Vec<&'a str>) {
    match value {
        Value::Array(values) => {
            for v in values {
                collect_strings(v, path, out);
            }
        }
        Value::Object(map) => {
            if let Some((head, tail)) = path.split_first() {
                if let Some(v) = map.get(*head) {
                    collect_strings(v, tail, out);
                }
            }
        }
        Value::String(s) if path.is_empty() => out.push(s.as_str()),
        _ => {}
    }
}

/// A shared, immutable collection. Identity matters: see the module docs.
pub type Collection = Arc<[ContentItem]>;

/// Build a collection from raw records, assigning ids by position.
pub fn collection_from_records<I>(records: I) -> Collection
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ContentItem::new(ItemId(i as u32), record))
        .collect::<Vec<_>>()
        .into()
}

// =============================================================================
// SEARCH OUTPUT
// =============================================================================

/// One text-search hit.
///
/// `stored` echoes the configured stored fields verbatim, whether or not they
/// were searched. `terms` are the index terms that matched (after prefix and
/// fuzzy expansion), `query_terms` the query terms that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: ItemId,
    pub score: f64,
    pub terms: Vec<String>,
    pub query_terms: Vec<String>,
    pub stored: Map<String, Value>,
}
