// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for geohub.
//!
//! The query pipeline itself never fails: empty queries pass everything
//! through, out-of-range pages are clamped and missing facet data is an empty
//! list. Errors only come from the edges: loading the catalogue, reading a
//! configuration file, or naming something that does not exist.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the geohub library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    #[error("unknown view: {0} (expected one of countries, explore, resources, challenges, partners, representatives, capacity)")]
    UnknownView(String),

    #[error("unknown focus area: {0}")]
    UnknownFocusArea(String),

    #[error("unknown challenge: {0}")]
    UnknownChallenge(String),

    /// A catalogue entry points at an id that is not defined.
    #[error("{owner} references unknown {kind} '{id}'")]
    UnknownReference {
        owner: String,
        kind: &'static str,
        id: String,
    },

    /// The catalogue compiled into the binary failed to load.
    #[error("embedded catalogue is invalid: {0}")]
    EmbeddedCatalogue(String),

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("page size must be positive, got {0}")]
    InvalidPageSize(usize),

    /// The view needs a country and none was given.
    #[error("view '{0}' needs a country")]
    MissingCountry(String),

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for geohub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an IO error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
