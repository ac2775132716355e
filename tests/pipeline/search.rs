//! Text search over real and synthetic collections.

use super::common::{catalogue, make_item, view_explorer};
use geohub::catalogue::views::{Scope, View};
use geohub::fuzzy::max_edits;
use geohub::{IndexOptions, QueryState, SearchOptions, TextIndex};

const CHLOROPHYLL: &str = "Monitoring Chlorophyll-a in Africa Waterbodies Using DEA Data Cube";

fn ghana_resources() -> geohub::Explorer {
    view_explorer(View::Resources, Scope::country("ghana"))
}

// ============================================================================
// GHANA RESOURCES
// ============================================================================

#[test]
fn test_exact_word_finds_single_resource() {
    let explorer = ghana_resources();
    assert_eq!(explorer.collection().len(), 2);

    let hits = explorer.search("chlorophyll");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.title(), CHLOROPHYLL);
    assert!(hits[0].1.is_some_and(|s| s > 0.0));
}

#[test]
fn test_truncated_word_finds_same_resource() {
    let explorer = ghana_resources();
    let hits = explorer.search("chlorophy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.title(), CHLOROPHYLL);
}

#[test]
fn test_typo_in_full_word_is_tolerated() {
    // One substitution in an 11-letter word, inside the 2-edit budget
    let explorer = ghana_resources();
    let hits = explorer.search("chlorophyl1");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.title(), CHLOROPHYLL);
}

#[test]
fn test_shared_word_ranks_both_resources() {
    let explorer = ghana_resources();
    let hits = explorer.search("africa");
    assert_eq!(hits.len(), 2);
    let scores: Vec<f64> = hits.iter().filter_map(|(_, s)| *s).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_search_is_case_and_accent_insensitive() {
    let explorer = ghana_resources();
    let plain = explorer.search("chlorophyll");
    let shouted = explorer.search("CHLOROPHÝLL");
    assert_eq!(plain.len(), shouted.len());
    assert_eq!(plain[0].0.id, shouted[0].0.id);
}

// ============================================================================
// EXPLORE
// ============================================================================

#[test]
fn test_explore_matches_challenge_tags() {
    // Tags are searchable through the resolved challenge records
    let explorer = view_explorer(View::Explore, Scope::default());
    let view = explorer.compute(&QueryState::new().with_query("biodiversity"));
    assert!(view.total_items > 0);
    assert!(view.items.iter().all(|r| r.score.is_some()));
}

#[test]
fn test_explore_covers_every_resource() {
    let explorer = view_explorer(View::Explore, Scope::default());
    let expected: usize = catalogue().countries.iter().map(|c| c.resources.len()).sum();
    assert_eq!(explorer.collection().len(), expected);
}

// ============================================================================
// RANKING
// ============================================================================

fn index_of(docs: &[(&str, &str)]) -> TextIndex {
    let items: Vec<_> = docs
        .iter()
        .enumerate()
        .map(|(i, (title, desc))| make_item(i as u32, title, desc))
        .collect();
    TextIndex::build(&items, &IndexOptions::new(["title", "description"], ["title"]))
}

#[test]
fn test_more_matched_terms_rank_higher() {
    let index = index_of(&[
        ("Flood maps", "Regional coverage"),
        ("Flood risk maps", "Regional flood risk coverage"),
        ("Drought", "Dry seasons"),
    ]);
    let hits = index.search("flood risk", &SearchOptions::DEFAULT);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id.get(), 1);
    assert_eq!(hits[0].query_terms, vec!["flood", "risk"]);
}

#[test]
fn test_exact_beats_fuzzy() {
    let index = index_of(&[("Floods", ""), ("Flood", "")]);
    let hits = index.search("flood", &SearchOptions::DEFAULT);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id.get(), 1);
}

const PREFIX_ONLY: SearchOptions = SearchOptions { fuzzy: 0.0, prefix: true };

#[test]
fn test_prefix_only_on_last_term() {
    let index = index_of(&[("Urbanization trends", ""), ("Urban heat", "")]);
    let last = index.search("urb", &PREFIX_ONLY);
    assert_eq!(last.len(), 2);
    // "urb" is not last here and must match exactly
    let first = index.search("urb heat", &PREFIX_ONLY);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].id.get(), 1);
}

#[test]
fn test_stored_fields_echoed() {
    let index = index_of(&[("Coastal Erosion", "Shoreline change")]);
    let hits = index.search("shoreline", &SearchOptions::DEFAULT);
    assert_eq!(hits[0].stored.get("title").and_then(|v| v.as_str()), Some("Coastal Erosion"));
    assert!(hits[0].stored.get("description").is_none());
}

// ============================================================================
// EDIT BUDGET
// ============================================================================

#[test]
fn test_edit_budget_follows_term_length() {
    assert_eq!(max_edits(2, 0.2), 0);
    assert_eq!(max_edits(3, 0.2), 1);
    assert_eq!(max_edits(5, 0.2), 1);
    assert_eq!(max_edits(8, 0.2), 2);
    assert_eq!(max_edits(13, 0.2), 3);
    assert_eq!(max_edits(100, 0.2), 6);
    assert_eq!(max_edits(10, 0.0), 0);
}

#[test]
fn test_short_terms_are_never_fuzzy() {
    let index = index_of(&[("EO", "")]);
    assert!(index.search("ex", &SearchOptions { fuzzy: 0.2, prefix: false }).is_empty());
}
