// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The result pipeline: text search, then facet filter, then pagination.
//!
//! ```text
//! QueryState ──► query empty? ──yes──► whole collection (collection order)
//!                     │ no
//!                     ▼
//!               TextIndex::search (ranked)
//!                     │
//!                     ▼
//!               FacetRegistry::matches (order kept)
//!                     │
//!                     ▼
//!               Pagination (page clamped) ──► ResultView
//! ```
//!
//! [`Explorer::compute`] is a function of the collection and the state only:
//! the same pair always yields the same view. The one piece of hidden state,
//! the memoized index, changes how fast the answer comes back, never what it is.

mod state;

pub use state::QueryState;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

use crate::config::ExplorerConfig;
use crate::facets::{FacetRegistry, FacetVocabulary};
use crate::index::cache::IndexCache;
use crate::index::TextIndex;
use crate::pagination::{page_window, PageMarker, Pagination};
use crate::search::SearchOptions;
use crate::types::{Collection, ContentItem, ItemId};

/// One entry of a result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: ItemId,
    /// Relevance, when a text query ranked the results.
    pub score: Option<f64>,
    pub item: ContentItem,
}

/// Everything a list section renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    /// The current page's items.
    pub items: Vec<ResultItem>,
    /// Results across all pages.
    pub total_items: usize,
    /// 0 when there are no results.
    pub total_pages: usize,
    /// Current page after clamping.
    pub page: usize,
    pub page_size: usize,
    pub window: Vec<PageMarker>,
    /// Facet values over the whole collection, not just the results.
    pub facets: Vec<FacetVocabulary>,
}

impl ResultView {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// A searchable, filterable, pageable collection.
#[derive(Debug)]
pub struct Explorer {
    collection: Collection,
    config: ExplorerConfig,
    registry: FacetRegistry,
    search: SearchOptions,
    vocabulary: Vec<FacetVocabulary>,
    cache: Mutex<IndexCache>,
}

impl Explorer {
    pub fn new(collection: Collection, config: ExplorerConfig) -> Self {
        let registry = config.registry();
        let vocabulary = registry.vocabulary(&collection);
        let cache = Mutex::new(IndexCache::new(config.index.clone()));
        Self {
            collection,
            config,
            registry,
            search: SearchOptions::DEFAULT,
            vocabulary,
            cache,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn registry(&self) -> &FacetRegistry {
        &self.registry
    }

    /// Facet vocabulary of the current collection.
    pub fn facets(&self) -> &[FacetVocabulary] {
        &self.vocabulary
    }

    /// Replace the collection. The index is rebuilt on the next search.
    pub fn set_collection(&mut self, collection: Collection) {
        debug!(items = collection.len(), "collection replaced");
        self.vocabulary = self.registry.vocabulary(&collection);
        self.collection = collection;
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .invalidate();
    }

    /// The index for the current collection, built if needed.
    pub fn index(&self) -> Arc<TextIndex> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_build(&self.collection)
    }

    /// The last built index, if any search has run yet.
    pub fn current_index(&self) -> Option<Arc<TextIndex>> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current()
    }

    /// How many times the index has been built.
    pub fn index_builds(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .builds()
    }

    /// Text-search step alone: ranked items, or the whole collection for an
    /// empty query.
    pub fn search(&self, query: &str) -> Vec<(&ContentItem, Option<f64>)> {
        if query.trim().is_empty() {
            return self.collection.iter().map(|item| (item, None)).collect();
        }
        let index = self.index();
        // Positions, not ids: a collection's ids need not be 0..n
        index
            .rank(query, &self.search)
            .into_iter()
            .filter_map(|(position, hit)| {
                self.collection
                    .get(position)
                    .map(|item| (item, Some(hit.score)))
            })
            .collect()
    }

    /// Run the whole pipeline for `state`.
    pub fn compute(&self, state: &QueryState) -> ResultView {
        let searched = self.search(&state.query);
        let matched = searched.len();

        self.registry.warn_unknown(&state.selections);
        let filtered: Vec<(&ContentItem, Option<f64>)> = searched
            .into_iter()
            .filter(|(item, _)| self.registry.matches(item, &state.selections))
            .collect();

        let pagination = Pagination::new(self.config.page_size, filtered.len()).with_page(state.page);
        let items = pagination
            .slice(&filtered)
            .iter()
            .map(|(item, score)| ResultItem {
                id: item.id,
                score: *score,
                item: (*item).clone(),
            })
            .collect();

        trace!(
            query = %state.query,
            matched,
            filtered = filtered.len(),
            page = pagination.page(),
            "computed results"
        );

        ResultView {
            items,
            total_items: pagination.total_items(),
            total_pages: pagination.total_pages(),
            page: pagination.page(),
            page_size: pagination.page_size(),
            window: page_window(pagination.page(), pagination.total_pages()),
            facets: self.vocabulary.clone(),
        }
    }
}
