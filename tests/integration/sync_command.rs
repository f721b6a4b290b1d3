//! Integration tests for the sync operation

use serde_json::json;
use vsettings::settings::Artifact;
use vsettings::sync;

use crate::integration::TestRepo;

#[test]
fn test_sync_merges_local_over_project() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({}));
    repo.write_json(&paths.project, &json!({"a": 1, "b": 2}));
    repo.write_json(&paths.local, &json!({"b": 3, "c": 4}));

    sync::synchronize(&paths).unwrap();
    assert_eq!(repo.read_json(&paths.working), json!({"a": 1, "b": 3, "c": 4}));
}

#[test]
fn test_sync_merge_is_shallow() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({}));
    repo.write_json(
        &paths.project,
        &json!({"files.exclude": {"target": true, "node_modules": true}}),
    );
    repo.write_json(&paths.local, &json!({"files.exclude": {"dist": true}}));

    sync::synchronize(&paths).unwrap();
    assert_eq!(
        repo.read_json(&paths.working),
        json!({"files.exclude": {"dist": true}})
    );
}

#[test]
fn test_sync_output_is_pretty_printed() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({}));
    repo.write_json(&paths.project, &json!({"a": 1}));
    repo.write_json(&paths.local, &json!({"b": [true]}));

    sync::synchronize(&paths).unwrap();
    assert_eq!(
        repo.read(&paths.working),
        "{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}\n"
    );
}

#[test]
fn test_sync_never_overwrites_project() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    let project_raw = "{\"shared\": \"yes\"}";
    repo.write(&paths.project, project_raw);
    repo.write_json(&paths.working, &json!({"shared": "no", "mine": 1}));

    let summary = sync::synchronize(&paths).unwrap();
    assert!(!summary.reconcile.created(Artifact::Project));
    assert_eq!(repo.read(&paths.project), project_raw);

    // Local was derived on the way in, so the working file round-trips
    assert_eq!(repo.read_json(&paths.local), json!({"shared": "no", "mine": 1}));
    assert_eq!(
        repo.read_json(&paths.working),
        json!({"shared": "no", "mine": 1})
    );
}

#[test]
fn test_sync_preserves_working_edits_only_through_local() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({"a": 1}));
    sync::synchronize(&paths).unwrap();

    // Editing working directly after local exists is discarded by the next sync
    repo.write_json(&paths.working, &json!({"a": 1, "scratch": true}));
    sync::synchronize(&paths).unwrap();
    assert_eq!(repo.read_json(&paths.working), json!({"a": 1}));
}

#[test]
fn test_sync_rejects_malformed_local() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({"keep": 1}));
    repo.write_json(&paths.project, &json!({}));
    repo.write(&paths.local, "{ broken");

    let err = sync::synchronize(&paths).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON"));
    // Working settings are not replaced when the merge inputs cannot be read
    assert_eq!(repo.read_json(&paths.working), json!({"keep": 1}));
}

#[test]
fn test_sync_rejects_non_object_project() {
    let repo = TestRepo::new();
    let paths = repo.paths();
    repo.write_json(&paths.working, &json!({}));
    repo.write(&paths.project, "[]");
    repo.write_json(&paths.local, &json!({}));

    let err = sync::synchronize(&paths).unwrap_err();
    assert!(err.to_string().contains("Expected a JSON object"));
}
