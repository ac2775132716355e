// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explorer configuration: which fields to search and store, which facets to
//! offer, how many results per page.
//!
//! Every view ships a preset (see [`crate::catalogue::views`]); a JSON file of
//! the same shape can replace it:
//!
//! ```json
//! {
//!   "index": { "fields": ["title", "description"], "storeFields": ["title", "link"] },
//!   "facets": ["type", { "name": "Tags", "path": "challenges.tags.name" }],
//!   "pageSize": 6
//! }
//! ```
//!
//! A facet given as a bare string uses it as both the name and the path.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::facets::{FacetCategory, FacetRegistry};
use crate::index::IndexOptions;
use crate::pagination::{Pagination, LIST_PAGE_SIZE};

/// A facet category read from a record path.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "FacetSpecValue")]
pub struct FacetSpec {
    pub name: String,
    pub path: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
enum FacetSpecValue {
    /// `"type"`: name and path are the same
    Path(String),
    /// `{ "name": "Tags", "path": "challenges.tags.name" }`
    Named { name: String, path: String },
}

impl From<FacetSpecValue> for FacetSpec {
    fn from(val: FacetSpecValue) -> Self {
        match val {
            FacetSpecValue::Path(path) => FacetSpec {
                name: path.clone(),
                path,
            },
            FacetSpecValue::Named { name, path } => FacetSpec { name, path },
        }
    }
}

impl FacetSpec {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

fn default_page_size() -> usize {
    LIST_PAGE_SIZE
}

/// Everything an [`Explorer`](crate::pipeline::Explorer) needs besides its collection.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerConfig {
    pub index: IndexOptions,
    #[serde(default)]
    pub facets: Vec<FacetSpec>,
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: usize,
}

impl ExplorerConfig {
    pub fn new(index: IndexOptions, facets: Vec<FacetSpec>, page_size: usize) -> Self {
        Self {
            index,
            facets,
            page_size,
        }
    }

    /// Parse and validate a configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExplorerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        Pagination::try_new(self.page_size, 0)?;
        Ok(())
    }

    /// The facet table these specs describe.
    pub fn registry(&self) -> FacetRegistry {
        FacetRegistry::new(
            self.facets
                .iter()
                .map(|spec| FacetCategory::path(spec.name.clone(), spec.path.clone()))
                .collect(),
        )
    }
}
