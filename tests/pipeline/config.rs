//! Loading explorer configuration from disk.

use super::common::{catalogue, titles};
use geohub::catalogue::views::{self, Scope, View};
use geohub::{Error, ExplorerConfig, QueryState};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_overrides_preset() {
    let file = write_config(
        r#"{
            "index": { "fields": ["title"], "storeFields": ["title"] },
            "facets": [{ "name": "Kind", "path": "type" }],
            "pageSize": 2
        }"#,
    );
    let config = ExplorerConfig::from_json_file(file.path()).unwrap();
    let explorer = views::explorer_with(catalogue(), View::Resources, &Scope::country("ghana"), config).unwrap();

    let view = explorer.compute(&QueryState::new().toggle_facet("Kind", "Knowledge Package"));
    assert_eq!(view.page_size, 2);
    assert_eq!(view.total_items, 2);
    assert_eq!(view.facets[0].name, "Kind");

    // Only titles are indexed now, so description words no longer match
    let view = explorer.compute(&QueryState::new().with_query("algal"));
    assert!(view.is_empty());
    let view = explorer.compute(&QueryState::new().with_query("urban extent"));
    assert_eq!(titles(&view), vec!["Detecting Change in Urban Extent Using Digital Earth Africa Data Cube"]);
}

#[test]
fn test_snake_case_page_size_accepted() {
    let file = write_config(r#"{ "index": { "fields": ["name"], "store_fields": ["name"] }, "page_size": 4 }"#);
    let config = ExplorerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.page_size, 4);
    assert_eq!(config.index.store_fields, vec!["name"]);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ExplorerConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_invalid_page_size_in_file() {
    let file = write_config(r#"{ "index": { "fields": ["title"] }, "pageSize": 0 }"#);
    assert!(matches!(
        ExplorerConfig::from_json_file(file.path()),
        Err(Error::InvalidPageSize(0))
    ));
}
