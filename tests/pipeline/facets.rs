//! Facet filtering: AND within a category, OR across categories.

use super::common::{make_resource, mixed_explorer, titles, view_explorer};
use geohub::catalogue::views::{Scope, View};
use geohub::{FacetCategory, FacetRegistry, FacetSelections, QueryState};

fn registry() -> FacetRegistry {
    FacetRegistry::new(vec![
        FacetCategory::path("Type", "type"),
        FacetCategory::path("Country", "country"),
        FacetCategory::path("Tags", "challenges.tags.name"),
    ])
}

#[test]
fn test_no_selection_keeps_everything() {
    let explorer = mixed_explorer(6);
    let view = explorer.compute(&QueryState::new());
    assert_eq!(view.total_items, 4);
}

#[test]
fn test_single_value_keeps_exact_matches() {
    let explorer = mixed_explorer(6);
    let view = explorer.compute(&QueryState::new().toggle_facet("Type", "Web Portal"));
    assert_eq!(titles(&view), vec!["Flood Mapping", "Drought Monitor"]);
}

#[test]
fn test_values_within_category_are_all_required() {
    let item = make_resource(0, "Storm Surge", "Dataset", "Ghana", &[
        ("Flood", &["Weather", "Climate"]),
    ]);
    let registry = registry();

    let both: FacetSelections = [("Tags", ["Weather", "Climate"])].into_iter().collect();
    assert!(registry.matches(&item, &both));

    let extra: FacetSelections = [("Tags", ["Weather", "Health"])].into_iter().collect();
    assert!(!registry.matches(&item, &extra));
}

#[test]
fn test_categories_combine_with_or() {
    let explorer = mixed_explorer(6);
    let state = QueryState::new()
        .toggle_facet("Type", "Dataset")
        .toggle_facet("Country", "Ghana");
    let view = explorer.compute(&state);
    // Ghana's web portal passes on country, the Brazilian dataset on type
    assert_eq!(titles(&view), vec!["Flood Mapping", "Coastal Erosion"]);
}

#[test]
fn test_item_failing_every_category_is_dropped() {
    let item = make_resource(0, "Drought Monitor", "Web Portal", "South Africa", &[]);
    let selections: FacetSelections = [("Type", vec!["Dataset"]), ("Country", vec!["Ghana"])]
        .into_iter()
        .collect();
    assert!(!registry().matches(&item, &selections));
}

#[test]
fn test_toggle_twice_restores_results() {
    let explorer = mixed_explorer(6);
    let state = QueryState::new()
        .toggle_facet("Type", "Dataset")
        .toggle_facet("Type", "Dataset");
    assert!(state.selections.is_empty());
    assert_eq!(explorer.compute(&state).total_items, 4);
}

#[test]
fn test_unknown_category_is_ignored() {
    let explorer = mixed_explorer(6);
    let view = explorer.compute(&QueryState::new().toggle_facet("Continent", "Africa"));
    assert_eq!(view.total_items, 4);
}

#[test]
fn test_category_names_are_case_insensitive() {
    let explorer = mixed_explorer(6);
    let view = explorer.compute(&QueryState::new().toggle_facet("type", "Dataset"));
    assert_eq!(titles(&view), vec!["Coastal Erosion"]);
}

#[test]
fn test_facets_filter_search_results() {
    let explorer = mixed_explorer(6);
    let state = QueryState::new()
        .with_query("flood")
        .toggle_facet("Country", "South Africa");
    let view = explorer.compute(&state);
    assert_eq!(titles(&view), vec!["Flood Forecasts"]);
}

// ============================================================================
// CATALOGUE DATA
// ============================================================================

#[test]
fn test_web_portal_filter_on_south_africa() {
    let explorer = view_explorer(View::Resources, Scope::country("south-africa"));
    let view = explorer.compute(&QueryState::new().toggle_facet("Type", "Web Portal"));
    assert_eq!(view.total_items, 31);
    assert_eq!(view.total_pages, 6);
    assert!(view
        .items
        .iter()
        .all(|r| r.item.field("type").contains(&"Web Portal")));
}

#[test]
fn test_explore_or_across_country_and_type() {
    let explorer = view_explorer(View::Explore, Scope::default());
    let state = QueryState::new()
        .toggle_facet("Country", "Ghana")
        .toggle_facet("Type", "Knowledge Package");
    let view = explorer.compute(&state);
    // Both Ghana packages plus the three South African ones
    assert_eq!(view.total_items, 5);
}

// ============================================================================
// VOCABULARY
// ============================================================================

#[test]
fn test_vocabulary_is_first_seen_and_distinct() {
    let explorer = mixed_explorer(6);
    let facets = explorer.facets();
    assert_eq!(facets[0].name, "Type");
    assert_eq!(facets[0].values, vec!["Web Portal", "Knowledge Package", "Dataset"]);
    assert_eq!(facets[1].values, vec!["Ghana", "South Africa", "Brazil"]);
}

#[test]
fn test_vocabulary_ignores_selections() {
    let explorer = mixed_explorer(6);
    let view = explorer.compute(&QueryState::new().toggle_facet("Type", "Dataset"));
    assert_eq!(view.facets, explorer.facets());
}
