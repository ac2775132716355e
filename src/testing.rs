// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use serde_json::{json, Map, Value};

use crate::types::{collection_from_records, Collection, ContentItem, ItemId};

/// Turn a `json!` object literal into a record. Non-objects become empty records.
pub fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Create a simple item with a title and a description.
pub fn make_item(id: u32, title: &str, description: &str) -> ContentItem {
    ContentItem::new(
        ItemId(id),
        record(json!({ "title": title, "description": description })),
    )
}

/// Create a resource-shaped item: type, country and challenges with tags.
///
/// `challenges` pairs a challenge title with its tag names.
pub fn make_resource(
    id: u32,
    title: &str,
    resource_type: &str,
    country: &str,
    challenges: &[(&str, &[&str])],
) -> ContentItem {
    let challenges: Vec<Value> = challenges
        .iter()
        .map(|(title, tags)| {
            json!({
                "title": title,
                "tags": tags.iter().map(|t| json!({ "name": t })).collect::<Vec<_>>(),
            })
        })
        .collect();
    ContentItem::new(
        ItemId(id),
        record(json!({
            "title": title,
            "description": format!("Description of {}", title),
            "type": resource_type,
            "country": country,
            "challenges": challenges,
        })),
    )
}

/// A collection of `n` titled items: "Item 1" .. "Item n".
pub fn numbered_collection(n: usize) -> Collection {
    collection_from_records((1..=n).map(|i| {
        record(json!({
            "title": format!("Item {}", i),
            "description": "Example entry",
        }))
    }))
}

/// Re-number a list of items by position and share it.
pub fn collection_of(items: Vec<ContentItem>) -> Collection {
    collection_from_records(items.into_iter().map(|item| item.record))
}
