// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sieve archives`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A sieve command isolated from the user's config and log settings.
fn sieve(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sieve");
    cmd.env_remove("SIEVE_CONFIG")
        .env_remove("SIEVE_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn run_json(home: &TempDir, args: &[&str]) -> Value {
    let output = sieve(home).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn no_flags_prints_bare_action() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .arg("archives")
        .assert()
        .success()
        .stdout("{\"action\":\"list_archives\",\"payload\":{}}\n");
}

#[test]
fn groups_dates_and_query() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &[
            "archives",
            "--group",
            "1,2",
            "--from",
            "2020-01-01",
            "--to",
            "2020-01-31T23:59:59Z",
            "-q",
            "refund",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({
            "action": "list_archives",
            "payload": {
                "filters": {
                    "group_ids": [1, 2],
                    "from": "2020-01-01T00:00:00.000000Z",
                    "to": "2020-01-31T23:59:59.000000Z",
                    "query": "refund",
                }
            }
        })
    );
}

#[test]
fn property_specs_and_event_types() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &[
            "archives",
            "--body-only",
            "--agents",
            "?",
            "--tags",
            "!spam",
            "--sales",
            "1,2",
            "--event-types",
            "!filled_form",
            "--survey",
            "post_chat:42",
            "--property",
            "routing.pinned=true",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({
            "filters": {
                "agents": { "exists": true },
                "properties": { "routing": { "pinned": { "values": [true], "require_every_value": false } } },
                "tags": { "exclude_values": ["spam"], "require_every_value": false },
                "sales": { "values": [1, 2], "require_every_value": false },
                "surveys": [{ "type": "post_chat", "answer_id": "42" }],
                "event_types": { "exclude_values": ["filled_form"], "require_every_value": false },
            }
        })
    );
}

#[test]
fn thread_lookup_discards_other_filters() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args([
            "archives",
            "--body-only",
            "--group",
            "1",
            "--tags",
            "vip",
            "--thread",
            "K600PKZON8,K600PKZON9",
        ])
        .assert()
        .success()
        .stdout("{\"filters\":{\"thread_ids\":[\"K600PKZON8\",\"K600PKZON9\"]}}\n");
}

#[test]
fn filters_file_is_merged_with_flags() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("saved.json");
    std::fs::write(&path, r#"{"query":"old","group_ids":[7]}"#).unwrap();

    let value = run_json(
        &home,
        &[
            "archives",
            "--body-only",
            "--filters-file",
            path.to_str().unwrap(),
            "-q",
            "new",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({ "filters": { "group_ids": [7], "query": "new" } })
    );
}

#[test]
fn paging_flags_are_top_level() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &[
            "archives",
            "--body-only",
            "-n",
            "25",
            "--sort-order",
            "asc",
            "--page-id",
            "MTU5",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({ "page_id": "MTU5", "sort_order": "asc", "limit": 25 })
    );
}

#[test]
fn pretty_output_is_indented() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["archives", "--pretty", "-q", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"action\": \"list_archives\""));
}

#[yare::parameterized(
    bad_date = { &["archives", "--from", "yesterday"], "invalid timestamp" },
    bad_survey = { &["archives", "--survey", "post_chat"], "invalid survey filter" },
    bad_property = { &["archives", "--property", "pinned"], "invalid property filter" },
)]
fn invalid_input_fails_with_hint(args: &[&str], message: &str) {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message))
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_filters_file_fails() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["archives", "--filters-file", "/nonexistent/saved.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
