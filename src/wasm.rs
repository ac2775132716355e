// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the country-profile lists.
//!
//! The browser keeps the UI state and hands it over on every change; the
//! explorer keeps the collection and its memoized index between calls.
//!
//! ```js
//! const explorer = new GeohubExplorer("resources", { country: "ghana" });
//! const view = explorer.compute({ query: "chlorophy", selections: {}, page: 1 });
//! ```

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::catalogue::views::{self, Scope, View};
use crate::pipeline::{Explorer, QueryState};

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A list section, ready to search, filter and page.
#[wasm_bindgen]
pub struct GeohubExplorer {
    inner: Explorer,
}

#[wasm_bindgen]
impl GeohubExplorer {
    /// Open a view (`"explore"`, `"resources"`...) narrowed by an optional
    /// scope object `{ country, focus, challenge }`.
    #[wasm_bindgen(constructor)]
    pub fn new(view: &str, scope: JsValue) -> Result<GeohubExplorer, JsValue> {
        let view: View = view.parse().map_err(js_error)?;
        let scope: Scope = if scope.is_undefined() || scope.is_null() {
            Scope::default()
        } else {
            from_value(scope).map_err(js_error)?
        };
        let inner = views::explorer(view, &scope).map_err(js_error)?;
        Ok(GeohubExplorer { inner })
    }

    /// Run the pipeline for a `{ query, selections, page }` state object.
    /// Missing keys take their defaults.
    pub fn compute(&self, state: JsValue) -> Result<JsValue, JsValue> {
        let state: QueryState = if state.is_undefined() || state.is_null() {
            QueryState::default()
        } else {
            from_value(state).map_err(js_error)?
        };
        to_value(&self.inner.compute(&state)).map_err(js_error)
    }

    /// Facet vocabulary of the view, `[{ name, values }]`.
    pub fn facets(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.facets()).map_err(js_error)
    }

    /// Number of items in the view before any query.
    #[wasm_bindgen(getter, js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.inner.collection().len()
    }
}
