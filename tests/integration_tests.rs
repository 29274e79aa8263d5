use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

use docfind::index::load_index;
use docfind::search::{run_filter, FilterAction};

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_with_invalid_index_file() {
    let fixture = fixture_path("invalid.json");

    Command::cargo_bin("docfind")
        .unwrap()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    Command::cargo_bin("docfind")
        .unwrap()
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index file not found"));
}

#[test]
fn test_cli_help_flag() {
    Command::cargo_bin("docfind")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive documentation index browser",
        ));
}

#[test]
fn test_cli_version_flag() {
    Command::cargo_bin("docfind")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docfind"));
}

#[test]
fn test_fixture_files_exist() {
    // Verify all our test fixtures are present
    assert!(fixture_path("docs.json").exists());
    assert!(fixture_path("invalid.json").exists());
}

#[test]
fn test_fixture_index_loads_and_filters() {
    let index = load_index(&fixture_path("docs.json")).unwrap();
    assert_eq!(index.modules.len(), 3);
    assert_eq!(index.pages.len(), 3);

    match run_filter(&index, "str") {
        FilterAction::Show(set) => {
            assert_eq!(set.module_count, 1);
            assert_eq!(set.results[0].title, "strings");
            assert_eq!(set.results[0].badge.as_deref(), Some("module"));
        }
        other => panic!("expected results, got {:?}", other),
    }
}
