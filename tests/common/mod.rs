//! Shared test utilities and fixtures.

#![allow(dead_code)]

use geohub::catalogue::views::{self, Scope, View};
use geohub::{Catalogue, Explorer, ExplorerConfig, FacetSpec, IndexOptions, ResultView};

// Re-export canonical test utilities from geohub::testing
pub use geohub::testing::{collection_of, make_item, make_resource, numbered_collection, record};

// ============================================================================
// FIXTURES
// ============================================================================

/// The catalogue compiled into the crate.
pub fn catalogue() -> &'static Catalogue {
    Catalogue::embedded().expect("embedded catalogue should parse")
}

/// An explorer over a view of the embedded catalogue, with its preset.
pub fn view_explorer(view: View, scope: Scope) -> Explorer {
    views::explorer(view, &scope).expect("view should build")
}

/// Resource-shaped configuration: searchable title/description/type, facets
/// on type and country.
pub fn resource_config(page_size: usize) -> ExplorerConfig {
    ExplorerConfig::new(
        IndexOptions::new(["title", "description", "type"], ["title", "type"]),
        vec![FacetSpec::new("Type", "type"), FacetSpec::new("Country", "country")],
        page_size,
    )
}

/// A small mixed collection used by the facet and pipeline tests.
///
/// | # | title              | type              | country      |
/// |---|--------------------|-------------------|--------------|
/// | 0 | Flood Mapping      | Web Portal        | Ghana        |
/// | 1 | Flood Forecasts    | Knowledge Package | South Africa |
/// | 2 | Drought Monitor    | Web Portal        | South Africa |
/// | 3 | Coastal Erosion    | Dataset           | Brazil       |
pub fn mixed_explorer(page_size: usize) -> Explorer {
    let collection = collection_of(vec![
        make_resource(0, "Flood Mapping", "Web Portal", "Ghana", &[("Flood", &["Weather"])]),
        make_resource(1, "Flood Forecasts", "Knowledge Package", "South Africa", &[("Flood", &["Weather"])]),
        make_resource(2, "Drought Monitor", "Web Portal", "South Africa", &[("Drought", &["Climate"])]),
        make_resource(3, "Coastal Erosion", "Dataset", "Brazil", &[]),
    ]);
    Explorer::new(collection, resource_config(page_size))
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Titles of the current page, in order.
pub fn titles(view: &ResultView) -> Vec<String> {
    view.items.iter().map(|r| r.item.title().to_string()).collect()
}

/// Structural invariants every computed view must satisfy.
pub fn assert_view_well_formed(view: &ResultView) {
    assert!(view.page >= 1, "page is 1-based");
    assert!(view.items.len() <= view.page_size, "page overflows page size");
    if view.total_items == 0 {
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
        assert!(view.items.is_empty());
    } else {
        assert_eq!(view.total_pages, view.total_items.div_ceil(view.page_size));
        assert!(view.page <= view.total_pages, "page beyond last page");
        assert!(!view.items.is_empty(), "non-empty results must fill the page");
    }
}
