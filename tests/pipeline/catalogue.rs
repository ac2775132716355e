//! Views over the embedded catalogue.

use super::common::{catalogue, view_explorer};
use geohub::catalogue::views::{self, Scope, View};
use geohub::pagination::COUNTRY_GRID_PAGE_SIZE;
use geohub::{Catalogue, Error, QueryState};

#[test]
fn test_embedded_catalogue_is_valid() {
    let catalogue = catalogue();
    assert_eq!(catalogue.countries.len(), 12);
    assert_eq!(catalogue.challenges.len(), 9);
    assert_eq!(catalogue.focus_areas.len(), 7);
    catalogue.validate().unwrap();
}

#[test]
fn test_country_lookup_by_id_or_title() {
    let catalogue = catalogue();
    assert_eq!(catalogue.country("south-africa").unwrap().title, "South Africa");
    assert_eq!(catalogue.country("south africa").unwrap().id, "south-africa");
    assert!(matches!(catalogue.country("atlantis"), Err(Error::UnknownCountry(_))));
}

#[test]
fn test_country_grid_fits_one_page() {
    let explorer = view_explorer(View::Countries, Scope::default());
    let view = explorer.compute(&QueryState::new());
    assert_eq!(view.page_size, COUNTRY_GRID_PAGE_SIZE);
    assert_eq!(view.total_items, 12);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn test_country_grid_search() {
    let explorer = view_explorer(View::Countries, Scope::default());
    let view = explorer.compute(&QueryState::new().with_query("ghan"));
    assert_eq!(view.items[0].item.title(), "Ghana");
}

#[test]
fn test_challenges_of_focus_area() {
    let explorer = view_explorer(
        View::Challenges,
        Scope::default().with_focus("weather-hazard-disaster-resilience"),
    );
    let titles: Vec<&str> = explorer.collection().iter().map(|c| c.title()).collect();
    assert_eq!(titles, vec!["Climate Change", "Drought", "Flood"]);
}

#[test]
fn test_challenges_without_focus_lists_all() {
    let explorer = view_explorer(View::Challenges, Scope::default());
    assert_eq!(explorer.collection().len(), 9);
}

#[test]
fn test_challenges_scoped_to_country() {
    let explorer = view_explorer(View::Challenges, Scope::country("ghana").with_focus("one-health"));
    let titles: Vec<&str> = explorer.collection().iter().map(|c| c.title()).collect();
    // Overfishing is a One Health challenge, but no Ghanaian resource addresses it
    assert_eq!(titles, vec!["Loss of Biodiversity", "Illegal Mining", "Pollution"]);

    let south_africa = view_explorer(View::Challenges, Scope::country("south-africa"));
    assert_eq!(south_africa.collection().len(), 9);

    let unknown = views::collection(catalogue(), View::Challenges, &Scope::country("atlantis"));
    assert!(matches!(unknown, Err(Error::UnknownCountry(_))));
}

#[test]
fn test_challenge_tags_resolve_to_names() {
    let explorer = view_explorer(View::Challenges, Scope::default().with_focus("one-health"));
    let tags: Vec<Vec<&str>> = explorer
        .collection()
        .iter()
        .map(|c| c.field("tags.name"))
        .collect();
    assert!(tags.iter().all(|tags| tags.contains(&"One Health")));
}

#[test]
fn test_resources_narrowed_by_challenge() {
    let scope = Scope::country("south-africa").with_challenge("flood");
    let explorer = view_explorer(View::Resources, scope);
    assert_eq!(explorer.collection().len(), 2);
    assert!(explorer
        .collection()
        .iter()
        .all(|r| r.field("challenges.title").contains(&"Flood")));
}

#[test]
fn test_resource_records_carry_country() {
    let explorer = view_explorer(View::Resources, Scope::country("ghana"));
    for item in explorer.collection().iter() {
        assert_eq!(item.str("country"), Some("Ghana"));
        assert_eq!(item.str("countryId"), Some("ghana"));
        assert!(item.str("name").is_none());
    }
}

#[test]
fn test_country_views_need_a_country() {
    let catalogue = catalogue();
    for view in View::ALL.into_iter().filter(|v| v.needs_country()) {
        let result = views::collection(catalogue, view, &Scope::default());
        assert!(matches!(result, Err(Error::MissingCountry(_))), "{}", view);
    }
}

#[test]
fn test_unknown_references_are_reported() {
    let catalogue = catalogue();
    let bad_focus = views::collection(catalogue, View::Challenges, &Scope::default().with_focus("oceans"));
    assert!(matches!(bad_focus, Err(Error::UnknownFocusArea(_))));

    let bad_challenge = views::collection(
        catalogue,
        View::Resources,
        &Scope::country("ghana").with_challenge("volcanoes"),
    );
    assert!(matches!(bad_challenge, Err(Error::UnknownChallenge(_))));
}

#[test]
fn test_catalogue_rejects_dangling_challenge() {
    let json = r#"{
        "focusAreas": [],
        "challenges": [{ "id": "flood", "title": "Flood", "description": "", "tags": ["water"] }],
        "countries": []
    }"#;
    let err = Catalogue::from_json(json).unwrap_err();
    assert!(matches!(err, Error::UnknownReference { kind: "focus area", .. }));
}
