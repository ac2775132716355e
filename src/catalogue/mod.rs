// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The country-profile catalogue: focus areas, challenges and countries with
//! their resources, partners, representatives and activities.
//!
//! The catalogue is static. It is compiled into the crate from
//! `data/catalogue.json` and parsed once on first use. Nothing writes to it.
//!
//! Challenges and resources refer to each other by id: a challenge is tagged
//! with focus-area ids, a resource lists challenge ids. [`Catalogue::from_json`]
//! checks every reference resolves, so the rest of the crate can look them up
//! without handling dangling ids.

pub mod views;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{Error, Result};

const EMBEDDED_JSON: &str = include_str!("../../data/catalogue.json");

static EMBEDDED: LazyLock<std::result::Result<Catalogue, String>> =
    LazyLock::new(|| Catalogue::from_json(EMBEDDED_JSON).map_err(|e| e.to_string()));

/// One of the GEO focus areas ("One Health", "Land and Water Sustainability"...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub id: String,
    pub name: String,
}

/// A societal challenge, tagged with the focus areas it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Focus-area ids.
    pub tags: Vec<String>,
}

/// A knowledge package, web portal or other Earth Observation resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub uploaded: String,
    pub description: String,
    pub link: String,
    /// Challenge ids.
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo_themes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_audiences: Vec<String>,
    /// GEO Work Programme activity, when the resource belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_gwp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    pub name: String,
    pub role: String,
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityBuildingActivity {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// An enabling mechanism of a community of practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mechanism {
    pub name: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityOfPractice {
    pub name: String,
    pub description: String,
    pub link: String,
}

/// A country profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub title: String,
    /// Path of the flag image.
    pub flag: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub capacity_building: Vec<CapacityBuildingActivity>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub representatives: Vec<Representative>,
    #[serde(default)]
    pub community_of_practice: Option<CommunityOfPractice>,
    #[serde(default)]
    pub mechanisms: Vec<Mechanism>,
}

/// The whole site catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    pub focus_areas: Vec<FocusArea>,
    pub challenges: Vec<Challenge>,
    pub countries: Vec<Country>,
}

fn check_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn to_record<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

impl Catalogue {
    /// The catalogue compiled into the crate, parsed on first use.
    pub fn embedded() -> Result<&'static Catalogue> {
        EMBEDDED
            .as_ref()
            .map_err(|e| Error::EmbeddedCatalogue(e.clone()))
    }

    /// Parse and validate a catalogue.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalogue: Catalogue = serde_json::from_str(json)?;
        catalogue.validate()?;
        debug!(
            countries = catalogue.countries.len(),
            challenges = catalogue.challenges.len(),
            focus_areas = catalogue.focus_areas.len(),
            "loaded catalogue"
        );
        Ok(catalogue)
    }

    /// Ids are unique per kind and every cross-reference resolves.
    pub fn validate(&self) -> Result<()> {
        check_unique("focus area", self.focus_areas.iter().map(|f| f.id.as_str()))?;
        check_unique("challenge", self.challenges.iter().map(|c| c.id.as_str()))?;
        check_unique("country", self.countries.iter().map(|c| c.id.as_str()))?;

        for challenge in &self.challenges {
            for tag in &challenge.tags {
                if self.focus_area(tag).is_none() {
                    return Err(Error::UnknownReference {
                        owner: format!("challenge '{}'", challenge.id),
                        kind: "focus area",
                        id: tag.clone(),
                    });
                }
            }
        }

        for country in &self.countries {
            for resource in &country.resources {
                for id in &resource.challenges {
                    if self.challenge(id).is_none() {
                        return Err(Error::UnknownReference {
                            owner: format!("resource '{}' of {}", resource.name, country.id),
                            kind: "challenge",
                            id: id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Look a country up by id, or by title ignoring case.
    pub fn country(&self, key: &str) -> Result<&Country> {
        self.countries
            .iter()
            .find(|c| c.id == key)
            .or_else(|| self.countries.iter().find(|c| c.title.eq_ignore_ascii_case(key)))
            .ok_or_else(|| Error::UnknownCountry(key.to_string()))
    }

    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn focus_area(&self, id: &str) -> Option<&FocusArea> {
        self.focus_areas.iter().find(|f| f.id == id)
    }

    /// Challenges tagged with a focus area, in catalogue order.
    pub fn challenges_for_focus(&self, focus_id: &str) -> Result<Vec<&Challenge>> {
        if self.focus_area(focus_id).is_none() {
            return Err(Error::UnknownFocusArea(focus_id.to_string()));
        }
        Ok(self
            .challenges
            .iter()
            .filter(|c| c.tags.iter().any(|t| t == focus_id))
            .collect())
    }

    /// Challenges at least one of the country's resources addresses, in
    /// catalogue order.
    pub fn country_challenges(&self, country_id: &str) -> Result<Vec<&Challenge>> {
        let country = self.country(country_id)?;
        Ok(self
            .challenges
            .iter()
            .filter(|c| {
                country
                    .resources
                    .iter()
                    .any(|r| r.challenges.iter().any(|id| *id == c.id))
            })
            .collect())
    }

    /// A challenge as a record, its tags resolved to `{ id, name }` objects.
    pub fn challenge_record(&self, challenge: &Challenge) -> Map<String, Value> {
        let tags: Vec<Value> = challenge
            .tags
            .iter()
            .filter_map(|id| self.focus_area(id))
            .map(|f| json!({ "id": f.id, "name": f.name }))
            .collect();
        let mut record = to_record(challenge);
        record.insert("tags".into(), Value::Array(tags));
        record
    }

    /// A resource as a searchable record.
    ///
    /// `name` becomes `title`, `country` is the country's title and
    /// `challenges` holds resolved challenge records.
    pub fn resource_record(&self, country: &Country, resource: &Resource) -> Map<String, Value> {
        let mut record = to_record(resource);
        if let Some(name) = record.remove("name") {
            record.insert("title".into(), name);
        }
        record.insert("country".into(), Value::String(country.title.clone()));
        record.insert("countryId".into(), Value::String(country.id.clone()));
        let challenges: Vec<Value> = resource
            .challenges
            .iter()
            .filter_map(|id| self.challenge(id))
            .map(|c| Value::Object(self.challenge_record(c)))
            .collect();
        record.insert("challenges".into(), Value::Array(challenges));
        record
    }

    /// Every resource of every country, flattened: the Explore data set.
    pub fn resource_records(&self) -> Vec<Map<String, Value>> {
        self.countries
            .iter()
            .flat_map(|country| {
                country
                    .resources
                    .iter()
                    .map(move |resource| self.resource_record(country, resource))
            })
            .collect()
    }

    /// Resources of one country, optionally only those attached to a challenge.
    pub fn country_resources(
        &self,
        country_id: &str,
        challenge_id: Option<&str>,
    ) -> Result<Vec<Map<String, Value>>> {
        let country = self.country(country_id)?;
        if let Some(id) = challenge_id {
            if self.challenge(id).is_none() {
                return Err(Error::UnknownChallenge(id.to_string()));
            }
        }
        Ok(country
            .resources
            .iter()
            .filter(|r| challenge_id.map_or(true, |id| r.challenges.iter().any(|c| c == id)))
            .map(|r| self.resource_record(country, r))
            .collect())
    }

    /// One record per country: `id`, `title`, `flag`.
    pub fn country_records(&self) -> Vec<Map<String, Value>> {
        self.countries
            .iter()
            .map(|c| to_record(&json!({ "id": c.id, "title": c.title, "flag": c.flag })))
            .collect()
    }
}

pub(crate) fn records_of<T: Serialize>(values: &[T]) -> Vec<Map<String, Value>> {
    values.iter().map(to_record).collect()
}
