// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `revq` listing: filters, lookups, and output formats.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EXPORT: &str = r#"[
  {
    "key": "PCR-101",
    "summary": "[1] Даниил Хармс (student@yandex.ru)",
    "status": { "key": "open" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000",
    "components": [{ "id": 100500, "name": "backend-developer" }]
  },
  {
    "key": "PCR-102",
    "summary": "[2] Алиса Селезнёва (alice@yandex.ru)",
    "status": { "key": "inReview" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000",
    "components": [{ "id": 100500, "name": "backend-developer" }]
  },
  {
    "key": "PCR-103",
    "summary": "[3] Boris Strugatsky (boris@yandex.ru)",
    "status": { "key": "onTheSideOfUser" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000",
    "components": [{ "id": 100501, "name": "data-scientist" }]
  },
  {
    "key": "PCR-104",
    "summary": "[4] Grace Hopper (grace@yandex.ru)",
    "status": { "key": "resolved" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000",
    "components": [{ "id": 100501, "name": "data-scientist" }]
  },
  {
    "key": "PCR-105",
    "summary": "[5] Ada Lovelace (ada@yandex.ru)",
    "status": { "key": "closed" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000",
    "components": [{ "id": 100500, "name": "backend-developer" }]
  }
]"#;

const CONFIG: &str = r#"
month_start = 15

[component_suffixes]
backend-developer = "1"

[tracker]
queue = "PCR"
base_url = "https://st.example.com"
"#;

struct Fixture {
    _temp: TempDir,
    export: PathBuf,
    config: PathBuf,
}

fn fixture() -> Fixture {
    let temp = TempDir::new().unwrap();
    let export = temp.path().join("export.json");
    let config = temp.path().join("config.toml");
    fs::write(&export, EXPORT).unwrap();
    fs::write(&config, CONFIG).unwrap();
    Fixture {
        _temp: temp,
        export,
        config,
    }
}

fn revq(fixture: &Fixture) -> Command {
    let mut cmd = cargo_bin_cmd!("revq");
    cmd.arg("-i")
        .arg(&fixture.export)
        .arg("--config")
        .arg(&fixture.config);
    cmd
}

#[test]
fn default_listing_hides_finished_homeworks() {
    let f = fixture();
    revq(&f)
        .assert()
        .success()
        .stdout(predicate::str::contains("Даниил Хармс"))
        .stdout(predicate::str::contains("Алиса Селезнёва"))
        .stdout(predicate::str::contains("Boris Strugatsky"))
        .stdout(predicate::str::contains("Grace Hopper").not())
        .stdout(predicate::str::contains("Ada Lovelace").not());
}

#[test]
fn listing_links_to_the_configured_tracker() {
    let f = fixture();
    revq(&f)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://st.example.com/PCR-101"));
}

#[test]
fn student_filter_is_case_insensitive_cyrillic_included() {
    let f = fixture();
    revq(&f)
        .arg("-s")
        .arg("хармс")
        .assert()
        .success()
        .stdout(predicate::str::contains("Даниил Хармс"))
        .stdout(predicate::str::contains("Алиса Селезнёва").not());
}

#[test]
fn problems_filter_keeps_only_listed_problems() {
    let f = fixture();
    revq(&f)
        .arg("-m")
        .arg("all")
        .arg("-p")
        .arg("2,4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Алиса Селезнёва"))
        .stdout(predicate::str::contains("Grace Hopper"))
        .stdout(predicate::str::contains("Даниил Хармс").not());
}

#[test]
fn cohort_filter_uses_configured_suffixes() {
    let f = fixture();
    revq(&f)
        .arg("-m")
        .arg("all")
        .arg("-c")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Даниил Хармс"))
        .stdout(predicate::str::contains("Boris Strugatsky").not());
}

#[test]
fn number_lookup_ignores_the_mode() {
    let f = fixture();
    // 5 is closed, which the default mode would hide.
    revq(&f)
        .arg("-n")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Даниил Хармс").not());
}

#[test]
fn number_lookup_miss_fails() {
    let f = fixture();
    revq(&f)
        .arg("-n")
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn date_range_outside_the_updates_is_empty() {
    let f = fixture();
    revq(&f)
        .arg("--from")
        .arg("2021-06-01")
        .arg("--to")
        .arg("2021-06-30")
        .assert()
        .success()
        .stdout(predicate::str::contains("PCR-").not());
}

#[test]
fn json_output_is_parseable_and_complete() {
    let f = fixture();
    let output = revq(&f)
        .arg("-m")
        .arg("all")
        .arg("-o")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let homeworks = json["homeworks"].as_array().unwrap();
    assert_eq!(homeworks.len(), 5);
    assert_eq!(homeworks[0]["status"], "in_review");
    assert!(homeworks.iter().any(|h| h["issue_key"] == "PCR-101"));
}

#[test]
fn missing_export_file_fails_with_a_hint() {
    let f = fixture();
    let mut cmd = cargo_bin_cmd!("revq");
    cmd.arg("-i")
        .arg("/nonexistent/export.json")
        .arg("--config")
        .arg(&f.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}

#[test]
fn malformed_config_fails() {
    let f = fixture();
    fs::write(&f.config, "month_start = 99\n").unwrap();
    revq(&f)
        .assert()
        .failure()
        .stderr(predicate::str::contains("month_start"));
}
