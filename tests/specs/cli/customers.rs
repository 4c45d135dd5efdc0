// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sieve customers`.

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
        .arg("customers")
        .assert()
        .success()
        .stdout("{\"action\":\"list_customers\",\"payload\":{}}\n");
}

#[test]
fn value_sets_ranges_and_dates() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &[
            "customers",
            "--body-only",
            "--country",
            "!PL",
            "--chat-groups",
            "0,19",
            "--chats-count",
            "gte:1,lte:5",
            "--visits-count",
            "eq:0",
            "--created",
            "gte:2020-01-01,lt:2020-02-01T00:00:00+01:00",
            "--include-without-chats",
            "false",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({
            "filters": {
                "country": { "exclude_values": ["PL"] },
                "chat_group_ids": { "values": [0, 19] },
                "chats_count": { "lte": 5, "gte": 1 },
                "visits_count": { "eq": 0 },
                "created_at": {
                    "lt": "2020-02-01T00:00:00.000000+01:00",
                    "gte": "2020-01-01T00:00:00.000000Z",
                },
                "include_customers_without_chats": false,
            }
        })
    );
}

#[test]
fn sort_by_accepts_dashes() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &["customers", "--body-only", "--sort-by", "customer-last-event"],
    );
    similar_asserts::assert_eq!(value, json!({ "sort_by": "customer_last_event" }));
}

#[test]
fn sort_by_comes_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("sieve.toml");
    std::fs::write(&config, "limit = 50\n\n[customers]\nsort_by = \"visits_count\"\n").unwrap();

    let value = run_json(
        &home,
        &[
            "--config",
            config.to_str().unwrap(),
            "customers",
            "--body-only",
        ],
    );
    similar_asserts::assert_eq!(value, json!({ "limit": 50, "sort_by": "visits_count" }));
}

#[yare::parameterized(
    bad_range_bound = { &["customers", "--chats-count", "most:5"], "invalid range" },
    bad_range_number = { &["customers", "--chats-count", "gte:many"], "invalid range" },
    bad_date = { &["customers", "--created", "gte:someday"], "invalid timestamp" },
    bad_sort_by = { &["customers", "--sort-by", "email"], "invalid sort field" },
    bad_group = { &["customers", "--chat-groups", "1,x"], "invalid value 'x'" },
)]
fn invalid_input_is_rejected(args: &[&str], message: &str) {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}
