// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filtering: narrowing results by Type, Country, Challenges, Tags...
//!
//! A facet category is a name plus a pure extractor that pulls the category's
//! values out of an item. The registry is the small, ordered table of those
//! extractors for one view.
//!
//! # Combination rule
//!
//! - **Within a category**: AND. Every selected value must be among the item's
//!   values (`selected ⊆ values`).
//! - **Across categories**: OR. An item passes if at least one category with
//!   an active selection accepts it. Categories without a selection do not
//!   vote; if none votes, everything passes.
//!
//! So selecting Type "Web Portal" and Country "Ghana" keeps every web portal
//! *and* everything from Ghana. This mirrors how the site has always behaved.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use crate::types::ContentItem;

/// Pulls a category's values out of an item. Absent data is an empty list.
pub type Extractor = Arc<dyn Fn(&ContentItem) -> Vec<String> + Send + Sync>;

/// A named facet and how to read it.
#[derive(Clone)]
pub struct FacetCategory {
    pub name: String,
    pub extractor: Extractor,
}

impl FacetCategory {
    /// A category with an arbitrary extractor.
    pub fn new<F>(name: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&ContentItem) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extractor: Arc::new(extractor),
        }
    }

    /// A category reading a dotted record path, e.g. `challenges.tags.name`.
    pub fn path(name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(name, move |item: &ContentItem| {
            item.field(&path).into_iter().map(str::to_string).collect()
        })
    }

    pub fn values(&self, item: &ContentItem) -> Vec<String> {
        (self.extractor)(item)
    }

    /// `Some(selected ⊆ values)` for an active selection, `None` otherwise.
    pub fn test(&self, item: &ContentItem, selected: &BTreeSet<String>) -> Option<bool> {
        if selected.is_empty() {
            return None;
        }
        let values = self.values(item);
        Some(selected.iter().all(|s| values.iter().any(|v| v == s)))
    }
}

impl fmt::Debug for FacetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetCategory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Selected values per category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetSelections(BTreeMap<String, BTreeSet<String>>);

impl FacetSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` if absent, remove it if present.
    pub fn toggle(&mut self, category: &str, value: &str) {
        let values = self.0.entry(category.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.0.remove(category);
        }
    }

    pub fn select(&mut self, category: &str, value: &str) {
        self.0
            .entry(category.to_string())
            .or_default()
            .insert(value.to_string());
    }

    pub fn clear_category(&mut self, category: &str) {
        self.0.remove(category);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// True when no category has a selected value.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.0.get(category)
    }

    pub fn is_selected(&self, category: &str, value: &str) -> bool {
        self.0.get(category).is_some_and(|v| v.contains(value))
    }

    /// Categories with at least one selected value.
    pub fn active(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| (name.as_str(), values))
    }
}

impl<C, V, I> FromIterator<(C, I)> for FacetSelections
where
    C: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        let mut selections = Self::new();
        for (category, values) in iter {
            let entry = selections.0.entry(category.into()).or_default();
            entry.extend(values.into_iter().map(Into::into));
        }
        selections
    }
}

/// Distinct values of one category across a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetVocabulary {
    pub name: String,
    /// In first-seen collection order.
    pub values: Vec<String>,
}

/// The ordered table of facet categories for a view.
#[derive(Debug, Clone, Default)]
pub struct FacetRegistry {
    categories: Vec<FacetCategory>,
}

impl FacetRegistry {
    pub fn new(categories: Vec<FacetCategory>) -> Self {
        Self { categories }
    }

    pub fn push(&mut self, category: FacetCategory) {
        self.categories.push(category);
    }

    pub fn categories(&self) -> &[FacetCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&FacetCategory> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Does `item` pass `selections`? See the module docs for the rule.
    ///
    /// Selections naming a category this registry does not have are ignored.
    pub fn matches(&self, item: &ContentItem, selections: &FacetSelections) -> bool {
        let mut voted = false;
        for (name, selected) in selections.active() {
            let Some(category) = self.get(name) else {
                continue;
            };
            match category.test(item, selected) {
                Some(true) => return true,
                Some(false) => voted = true,
                None => {}
            }
        }
        !voted
    }

    /// Keep the candidates passing `selections`, in their original order.
    pub fn filter<'a, I>(&self, candidates: I, selections: &FacetSelections) -> Vec<&'a ContentItem>
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        self.warn_unknown(selections);
        candidates
            .into_iter()
            .filter(|item| self.matches(item, selections))
            .collect()
    }

    /// Log every selected category this registry cannot evaluate.
    pub(crate) fn warn_unknown(&self, selections: &FacetSelections) {
        for (name, _) in selections.active() {
            if self.get(name).is_none() {
                warn!(category = name, "ignoring selection for unknown facet category");
            }
        }
    }

    /// Distinct values per category, in first-seen order.
    pub fn vocabulary(&self, items: &[ContentItem]) -> Vec<FacetVocabulary> {
        self.categories
            .iter()
            .map(|category| {
                let mut seen = BTreeSet::new();
                let mut values = Vec::new();
                for item in items {
                    for value in category.values(item) {
                        if seen.insert(value.clone()) {
                            values.push(value);
                        }
                    }
                }
                FacetVocabulary {
                    name: category.name.clone(),
                    values,
                }
            })
            .collect()
    }
}
