//! Integration tests for export and import

use predicates::prelude::*;

mod common;
use common::{create_entry, init_journal, reflekt_cmd};

#[test]
fn test_export_writes_default_file() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "Backed up"]);

    reflekt_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported journal to"));

    let found = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            name.starts_with("reflekt-backup-") && name.ends_with(".json")
        });
    assert!(found, "expected a reflekt-backup-*.json file");
}

#[test]
fn test_export_import_round_trip() {
    let source = init_journal();
    create_entry(source.path(), &["--title", "First", "--mood", "3"]);
    create_entry(source.path(), &["--title", "Second", "--tags", "travel"]);

    let backup = source.path().join("backup.json");
    reflekt_cmd()
        .current_dir(source.path())
        .args(["export", "--output", backup.to_str().unwrap()])
        .assert()
        .success();

    let target = init_journal();
    reflekt_cmd()
        .current_dir(target.path())
        .args(["import", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries (0 already present)"));

    reflekt_cmd()
        .current_dir(target.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Second"));
}

#[test]
fn test_import_skips_known_entries() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "Original"]);

    let backup = temp.path().join("backup.json");
    reflekt_cmd()
        .current_dir(temp.path())
        .args(["export", "--output", backup.to_str().unwrap()])
        .assert()
        .success();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["import", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 entries (1 already present)"));
}

#[test]
fn test_import_merges_settings() {
    let source = init_journal();
    reflekt_cmd()
        .current_dir(source.path())
        .args(["config", "theme", "light"])
        .assert()
        .success();

    let backup = source.path().join("backup.json");
    reflekt_cmd()
        .current_dir(source.path())
        .args(["export", "--output", backup.to_str().unwrap()])
        .assert()
        .success();

    let target = init_journal();
    reflekt_cmd()
        .current_dir(target.path())
        .args(["import", backup.to_str().unwrap()])
        .assert()
        .success();

    reflekt_cmd()
        .current_dir(target.path())
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn test_import_rejects_invalid_json() {
    let temp = init_journal();
    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, "{this is not json").unwrap();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_import_rejects_payload_without_entries() {
    let temp = init_journal();
    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, r#"{"settings": {}}"#).unwrap();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("entries"));
}

#[test]
fn test_import_missing_file_fails() {
    let temp = init_journal();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["import", "no-such-file.json"])
        .assert()
        .failure()
        .code(1);
}
