//! `Explorer::compute` as a whole: purity, memoization and serialization.

use super::common::{assert_view_well_formed, mixed_explorer, numbered_collection, resource_config, titles};
use geohub::{Explorer, QueryState};
use std::sync::Arc;

#[test]
fn test_empty_query_returns_collection_in_order() {
    let explorer = Explorer::new(numbered_collection(5), resource_config(12));
    let view = explorer.compute(&QueryState::new());
    assert_eq!(titles(&view), vec!["Item 1", "Item 2", "Item 3", "Item 4", "Item 5"]);
    assert!(view.items.iter().all(|r| r.score.is_none()));
}

#[test]
fn test_blank_query_counts_as_empty() {
    let explorer = Explorer::new(numbered_collection(5), resource_config(12));
    let blank = explorer.compute(&QueryState::new().with_query("   "));
    assert_eq!(blank.total_items, 5);
    assert_eq!(explorer.index_builds(), 0);
}

#[test]
fn test_compute_is_idempotent() {
    let explorer = mixed_explorer(2);
    let states = [
        QueryState::new(),
        QueryState::new().with_query("flood"),
        QueryState::new().toggle_facet("Type", "Web Portal").with_page(2),
        QueryState::new().with_query("monitr").toggle_facet("Country", "South Africa"),
    ];
    for state in &states {
        let first = explorer.compute(state);
        let second = explorer.compute(state);
        assert_eq!(first, second);
        assert_view_well_formed(&first);
    }
}

#[test]
fn test_index_built_once_per_collection() {
    let mut explorer = mixed_explorer(6);
    assert_eq!(explorer.index_builds(), 0);

    explorer.compute(&QueryState::new().with_query("flood"));
    explorer.compute(&QueryState::new().with_query("drought"));
    explorer.compute(&QueryState::new().with_query("coastal").with_page(2));
    assert_eq!(explorer.index_builds(), 1);

    // Same items, new identity: rebuilt
    let copy: geohub::Collection = Arc::from(explorer.collection().to_vec());
    explorer.set_collection(copy);
    explorer.compute(&QueryState::new().with_query("flood"));
    assert_eq!(explorer.index_builds(), 2);
}

#[test]
fn test_same_identity_reuses_index() {
    let mut explorer = mixed_explorer(6);
    explorer.compute(&QueryState::new().with_query("flood"));
    let before = explorer.current_index().expect("index built");

    let same = Arc::clone(explorer.collection());
    explorer.set_collection(same);
    explorer.compute(&QueryState::new().with_query("flood"));
    let after = explorer.current_index().expect("index built");

    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(explorer.index_builds(), 1);
}

#[test]
fn test_explorer_shared_across_threads() {
    let explorer = Arc::new(mixed_explorer(6));
    let handles: Vec<_> = ["flood", "drought", "coastal", "flood"]
        .into_iter()
        .map(|q| {
            let explorer = Arc::clone(&explorer);
            std::thread::spawn(move || explorer.compute(&QueryState::new().with_query(q)).total_items)
        })
        .collect();
    let totals: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(totals, vec![2, 1, 1, 2]);
    assert_eq!(explorer.index_builds(), 1);
}

#[test]
fn test_view_serializes_camel_case() {
    let explorer = mixed_explorer(2);
    let view = explorer.compute(&QueryState::new());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["totalItems"], 4);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["pageSize"], 2);
    assert_eq!(json["window"][0]["kind"], "page");
    assert_eq!(json["items"][0]["item"]["record"]["title"], "Flood Mapping");
}

#[test]
fn test_state_round_trips_through_json() {
    let state: QueryState = serde_json::from_str(
        r#"{ "query": "flood", "selections": { "Type": ["Web Portal"] } }"#,
    )
    .unwrap();
    assert_eq!(state.page, 1);
    assert!(state.selections.is_selected("Type", "Web Portal"));

    let explorer = mixed_explorer(6);
    assert_eq!(titles(&explorer.compute(&state)), vec!["Flood Mapping"]);
}
