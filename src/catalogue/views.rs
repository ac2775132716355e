// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presets for every list section of the site.
//!
//! | view              | searched                                   | facets                          | page |
//! |-------------------|--------------------------------------------|---------------------------------|------|
//! | `countries`       | title                                      |                                 | 12   |
//! | `explore`         | title, description, type, country, challenge titles and tags | Type, Country, Challenges, Tags | 6 |
//! | `resources`       | title, description, type, uploaded         | Type, Challenges                | 6    |
//! | `challenges`      | title, description                         |                                 | 6    |
//! | `partners`        | name, description                          |                                 | 6    |
//! | `representatives` | name, role                                 |                                 | 6    |
//! | `capacity`        | title, description                         |                                 | 6    |

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{records_of, Catalogue};
use crate::config::{ExplorerConfig, FacetSpec};
use crate::error::{Error, Result};
use crate::index::IndexOptions;
use crate::pagination::{COUNTRY_GRID_PAGE_SIZE, LIST_PAGE_SIZE};
use crate::pipeline::Explorer;
use crate::types::{collection_from_records, Collection};

/// A list section of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Home page country grid
    Countries,
    /// Every resource of every country
    Explore,
    /// One country's resources
    Resources,
    /// Challenges of a focus area, optionally those a country addresses
    Challenges,
    /// One country's partners
    Partners,
    /// One country's GEO representatives
    Representatives,
    /// One country's capacity-building activities
    Capacity,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Countries,
        View::Explore,
        View::Resources,
        View::Challenges,
        View::Partners,
        View::Representatives,
        View::Capacity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Countries => "countries",
            View::Explore => "explore",
            View::Resources => "resources",
            View::Challenges => "challenges",
            View::Partners => "partners",
            View::Representatives => "representatives",
            View::Capacity => "capacity",
        }
    }

    /// Does the view list things belonging to one country?
    pub fn needs_country(self) -> bool {
        matches!(
            self,
            View::Resources | View::Partners | View::Representatives | View::Capacity
        )
    }

    /// The view's preset search, facet and paging configuration.
    pub fn config(self) -> ExplorerConfig {
        match self {
            View::Countries => preset(&["title"], &["title", "flag"], vec![], COUNTRY_GRID_PAGE_SIZE),
            View::Explore => preset(
                &["title", "description", "type", "country", "challenges.title", "challenges.tags.name"],
                &["title", "description", "type", "country", "uploaded", "link", "challenges"],
                vec![
                    FacetSpec::new("Type", "type"),
                    FacetSpec::new("Country", "country"),
                    FacetSpec::new("Challenges", "challenges.title"),
                    FacetSpec::new("Tags", "challenges.tags.name"),
                ],
                LIST_PAGE_SIZE,
            ),
            View::Resources => preset(
                &["title", "description", "type", "uploaded"],
                &["title", "description", "type", "uploaded", "link"],
                vec![
                    FacetSpec::new("Type", "type"),
                    FacetSpec::new("Challenges", "challenges.title"),
                ],
                LIST_PAGE_SIZE,
            ),
            View::Challenges => preset(&["title", "description"], &["title", "description"], vec![], LIST_PAGE_SIZE),
            View::Partners => preset(&["name", "description"], &["name", "description", "link"], vec![], LIST_PAGE_SIZE),
            View::Representatives => preset(&["name", "role"], &["name", "role", "profile"], vec![], LIST_PAGE_SIZE),
            View::Capacity => preset(&["title", "description"], &["title", "description", "link"], vec![], LIST_PAGE_SIZE),
        }
    }
}

fn preset(fields: &[&str], store: &[&str], facets: Vec<FacetSpec>, page_size: usize) -> ExplorerConfig {
    ExplorerConfig::new(
        IndexOptions::new(fields.iter().copied(), store.iter().copied()),
        facets,
        page_size,
    )
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

/// What a view is narrowed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    pub country: Option<String>,
    /// Focus-area id, for `challenges`.
    pub focus: Option<String>,
    /// Challenge id, for `resources`.
    pub challenge: Option<String>,
}

impl Scope {
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            ..Self::default()
        }
    }

    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }

    pub fn with_challenge(mut self, challenge: impl Into<String>) -> Self {
        self.challenge = Some(challenge.into());
        self
    }
}

/// The records a view lists, as a fresh collection.
pub fn collection(catalogue: &Catalogue, view: View, scope: &Scope) -> Result<Collection> {
    let country = match (&scope.country, view.needs_country()) {
        (Some(id), _) => Some(catalogue.country(id)?),
        (None, true) => return Err(Error::MissingCountry(view.name().to_string())),
        (None, false) => None,
    };

    let records = match (view, country) {
        (View::Countries, _) => catalogue.country_records(),
        (View::Explore, _) => catalogue.resource_records(),
        (View::Challenges, country) => {
            let mut challenges = match &scope.focus {
                Some(focus) => catalogue.challenges_for_focus(focus)?,
                None => catalogue.challenges.iter().collect(),
            };
            if let Some(country) = country {
                let addressed = catalogue.country_challenges(&country.id)?;
                challenges.retain(|c| addressed.iter().any(|a| a.id == c.id));
            }
            challenges
                .into_iter()
                .map(|c| catalogue.challenge_record(c))
                .collect()
        }
        (View::Resources, Some(country)) => {
            catalogue.country_resources(&country.id, scope.challenge.as_deref())?
        }
        (View::Partners, Some(country)) => records_of(&country.partners),
        (View::Representatives, Some(country)) => records_of(&country.representatives),
        (View::Capacity, Some(country)) => records_of(&country.capacity_building),
        (_, None) => return Err(Error::MissingCountry(view.name().to_string())),
    };

    Ok(collection_from_records(records))
}

/// An explorer over a view of the embedded catalogue, with the view's preset.
pub fn explorer(view: View, scope: &Scope) -> Result<Explorer> {
    explorer_with(Catalogue::embedded()?, view, scope, view.config())
}

/// An explorer over a view of any catalogue, with any configuration.
pub fn explorer_with(
    catalogue: &Catalogue,
    view: View,
    scope: &Scope,
    config: ExplorerConfig,
) -> Result<Explorer> {
    config.validate()?;
    let collection = collection(catalogue, view, scope)?;
    Ok(Explorer::new(collection, config))
}
