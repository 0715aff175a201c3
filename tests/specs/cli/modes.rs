// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `revq` filter modes.

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
    "key": "PCR-201",
    "summary": "[1] Даниил Хармс (student@yandex.ru)",
    "status": { "key": "open" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000"
  },
  {
    "key": "PCR-202",
    "summary": "[2] Алиса Селезнёва (alice@yandex.ru)",
    "status": { "key": "onTheSideOfUser" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000"
  },
  {
    "key": "PCR-203",
    "summary": "[3] Ada Lovelace (ada@yandex.ru)",
    "status": { "key": "closed" },
    "statusStartTime": "2021-05-11T12:00:00.000+0000"
  }
]"#;

const CONFIG: &str = "month_start = 15\n";

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

fn revq_mode(fixture: &Fixture, mode: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("revq");
    cmd.arg("-i")
        .arg(&fixture.export)
        .arg("--config")
        .arg(&fixture.config)
        .arg("-m")
        .arg(mode);
    cmd
}

#[test]
fn open_mode_keeps_only_reviewer_side_homeworks() {
    let f = fixture();
    revq_mode(&f, "open")
        .assert()
        .success()
        .stdout(predicate::str::contains("PCR-201"))
        .stdout(predicate::str::contains("PCR-202").not())
        .stdout(predicate::str::contains("PCR-203").not());
}

#[test]
fn closed_mode_keeps_only_finished_homeworks() {
    let f = fixture();
    revq_mode(&f, "closed")
        .assert()
        .success()
        .stdout(predicate::str::contains("PCR-203"))
        .stdout(predicate::str::contains("PCR-201").not());
}

#[test]
fn all_mode_keeps_everything() {
    let f = fixture();
    revq_mode(&f, "all")
        .assert()
        .success()
        .stdout(predicate::str::contains("PCR-201"))
        .stdout(predicate::str::contains("PCR-202"))
        .stdout(predicate::str::contains("PCR-203"));
}

#[test]
fn underscores_are_accepted_in_mode_names() {
    let f = fixture();
    revq_mode(&f, "closed_this_month").assert().success();
}

// The export's updates are all in 2021, long outside any current window.
#[test]
fn closed_this_month_windows_out_old_homeworks() {
    let f = fixture();
    revq_mode(&f, "closed-this-month")
        .assert()
        .success()
        .stdout(predicate::str::contains("PCR-").not());
}

#[test]
fn unknown_mode_is_rejected_with_the_valid_choices() {
    let f = fixture();
    revq_mode(&f, "everything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mode"))
        .stderr(predicate::str::contains("closed-previous-month"));
}
