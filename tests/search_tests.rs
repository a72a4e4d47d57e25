//! Integration tests for search and date filtering

use chrono::{Duration, Utc};
use predicates::prelude::*;

mod common;
use common::{create_entry, init_journal, reflekt_cmd};

#[test]
fn test_search_matches_title() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "Gratitude list"]);
    create_entry(temp.path(), &["--title", "Grocery run"]);

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "gratitude"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gratitude list"))
        .stdout(predicate::str::contains("Grocery run").not());
}

#[test]
fn test_search_matches_content_without_markup() {
    let temp = init_journal();
    create_entry(
        temp.path(),
        &["--title", "Evening", "--content", "<p>quiet evening walk</p>"],
    );

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Evening"));

    // Tag names inside markup are not searchable text
    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "<p>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_search_matches_tags() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "Standup", "--tags", "work"]);
    create_entry(temp.path(), &["--title", "Run", "--tags", "health"]);

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup"))
        .stdout(predicate::str::contains("Run").not());
}

#[test]
fn test_search_tag_filter_is_exact() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "One", "--tags", "work"]);
    create_entry(temp.path(), &["--title", "Two", "--tags", "workout"]);

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "--tag", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("One"))
        .stdout(predicate::str::contains("Two").not());
}

#[test]
fn test_search_mood_filter() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "High", "--mood", "5"]);
    create_entry(temp.path(), &["--title", "Low", "--mood", "2"]);
    create_entry(temp.path(), &["--title", "None"]);

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "--mood", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High"))
        .stdout(predicate::str::contains("Low").not())
        .stdout(predicate::str::contains("None").not());
}

#[test]
fn test_search_filters_are_conjunctive() {
    let temp = init_journal();
    create_entry(
        temp.path(),
        &["--title", "Deep work", "--mood", "4", "--tags", "work"],
    );
    create_entry(
        temp.path(),
        &["--title", "Work stress", "--mood", "2", "--tags", "work"],
    );

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "work", "--mood", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep work"))
        .stdout(predicate::str::contains("Work stress").not());
}

#[test]
fn test_search_date_range_includes_today() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "Today's note"]);

    let today = Utc::now().format("%d-%m-%Y").to_string();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "--from", &today, "--to", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's note"));

    let tomorrow = (Utc::now() + Duration::days(1))
        .format("%d-%m-%Y")
        .to_string();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "--from", &tomorrow])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_search_rejects_bad_date() {
    let temp = init_journal();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["search", "--from", "2025-01-17"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("DD-MM-YYYY"));
}

#[test]
fn test_list_date_filter() {
    let temp = init_journal();
    create_entry(temp.path(), &["--title", "Daily note"]);

    let today = Utc::now().format("%d-%m-%Y").to_string();

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["list", "--date", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily note"));

    reflekt_cmd()
        .current_dir(temp.path())
        .args(["list", "--date", "01-01-2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
