// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized index construction.
//!
//! Rebuilding the index on every keystroke would be wasteful; rebuilding it
//! never would serve stale results after the collection changes. The cache
//! keys on collection *identity*: the same `Arc` means the same index, a new
//! `Arc` (even with equal contents) means a rebuild.

use std::sync::Arc;
use tracing::{debug, trace};

use super::{IndexOptions, TextIndex};
use crate::types::Collection;

/// Last built index, keyed on the collection it was built from.
#[derive(Debug)]
pub struct IndexCache {
    options: IndexOptions,
    slot: Option<(Collection, Arc<TextIndex>)>,
    builds: usize,
}

impl IndexCache {
    pub fn new(options: IndexOptions) -> Self {
        Self {
            options,
            slot: None,
            builds: 0,
        }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// The index for `collection`, building it only if the collection is not
    /// the one the current index was built from.
    pub fn get_or_build(&mut self, collection: &Collection) -> Arc<TextIndex> {
        if let Some((built_from, index)) = &self.slot {
            if Arc::ptr_eq(built_from, collection) {
                trace!("index cache hit");
                return Arc::clone(index);
            }
        }

        let index = Arc::new(TextIndex::build(collection, &self.options));
        self.builds += 1;
        debug!(builds = self.builds, items = collection.len(), "index cache rebuilt");
        self.slot = Some((Arc::clone(collection), Arc::clone(&index)));
        index
    }

    /// The last built index, without building. `None` before the first build.
    pub fn current(&self) -> Option<Arc<TextIndex>> {
        self.slot.as_ref().map(|(_, index)| Arc::clone(index))
    }

    /// How many times an index has been built.
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Drop the memoized index; the next lookup rebuilds.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
