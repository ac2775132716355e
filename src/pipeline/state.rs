// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! UI state as an immutable value.
//!
//! Every user action produces a new `QueryState`. Anything that changes
//! *which* results exist (query text, facet selections) resets the page to 1;
//! moving between pages does not touch the rest.

use serde::{Deserialize, Serialize};

use crate::facets::FacetSelections;

/// Query text, facet selections and requested page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    pub query: String,
    pub selections: FacetSelections,
    /// Requested page, 1-based. Clamped when results are computed.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selections: FacetSelections::new(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selections: self.selections.clone(),
            page: 1,
        }
    }

    #[must_use]
    pub fn toggle_facet(&self, category: &str, value: &str) -> Self {
        let mut selections = self.selections.clone();
        selections.toggle(category, value);
        Self {
            query: self.query.clone(),
            selections,
            page: 1,
        }
    }

    #[must_use]
    pub fn select_facet(&self, category: &str, value: &str) -> Self {
        let mut selections = self.selections.clone();
        selections.select(category, value);
        Self {
            query: self.query.clone(),
            selections,
            page: 1,
        }
    }

    #[must_use]
    pub fn clear_facets(&self) -> Self {
        Self {
            query: self.query.clone(),
            selections: FacetSelections::new(),
            page: 1,
        }
    }

    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
