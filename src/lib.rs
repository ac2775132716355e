// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, facet filtering and pagination for the GEO Knowledge Hub country
//! profiles.
//!
//! Every list on a country profile (the country grid, the Explore page,
//! resources, partners, representatives, capacity building) runs the same
//! pipeline over a static collection: fuzzy/prefix text search, then facet
//! filtering, then pagination.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalogue   │────▶│    types     │────▶│    index     │
//! │ (embedded    │     │ (ContentItem,│     │ (TextIndex,  │
//! │  JSON, views)│     │  Collection) │     │  IndexCache) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │ search (exact → prefix → fuzzy, BM25+)
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │    facets    │────▶│   pipeline   │──▶ ResultView
//!                      │ (OR across,  │     │  (Explorer,  │
//!                      │  AND within) │     │  QueryState) │
//!                      └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//!                                           ┌──────────────┐
//!                                           │  pagination  │
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use geohub::catalogue::views::{self, Scope, View};
//! use geohub::QueryState;
//!
//! let explorer = views::explorer(View::Resources, &Scope::country("ghana")).unwrap();
//! let view = explorer.compute(&QueryState::new().with_query("chlorophy"));
//! assert_eq!(view.total_items, 1);
//! assert!(view.items[0].item.title().starts_with("Monitoring Chlorophyll-a"));
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod facets;
pub mod fuzzy;
pub mod index;
pub mod pagination;
pub mod pipeline;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalogue::Catalogue;
pub use config::{ExplorerConfig, FacetSpec};
pub use error::{Error, Result};
pub use facets::{FacetCategory, FacetRegistry, FacetSelections, FacetVocabulary};
pub use index::cache::IndexCache;
pub use index::{IndexOptions, TextIndex};
pub use pagination::{page_window, PageMarker, Pagination};
pub use pipeline::{Explorer, QueryState, ResultItem, ResultView};
pub use search::SearchOptions;
pub use types::{collection_from_records, Collection, ContentItem, ItemId, SearchHit};
