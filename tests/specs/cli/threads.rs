// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sieve threads`.

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
fn chat_id_is_required() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .arg("threads")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--chat-id"));
}

#[test]
fn chat_id_only() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["threads", "--chat-id", "PJ0MRSHTDG"])
        .assert()
        .success()
        .stdout("{\"action\":\"list_threads\",\"payload\":{\"chat_id\":\"PJ0MRSHTDG\"}}\n");
}

#[test]
fn dates_and_min_events_count() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &[
            "threads",
            "--body-only",
            "--chat-id",
            "PJ0MRSHTDG",
            "--from",
            "2020-01-01",
            "--to",
            "2020-01-02T10:00:00.5Z",
            "--min-events-count",
            "2",
            "--sort-order",
            "desc",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({
            "chat_id": "PJ0MRSHTDG",
            "filters": {
                "from": "2020-01-01T00:00:00.000000Z",
                "to": "2020-01-02T10:00:00.500000Z",
            },
            "sort_order": "desc",
            "min_events_count": 2,
        })
    );
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let home = TempDir::new().unwrap();
    let output = sieve(&home)
        .args(["-vv", "threads", "--chat-id", "X", "--body-only"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout, json!({ "chat_id": "X" }));
    assert!(String::from_utf8_lossy(&output.stderr).contains("rendered list_threads request"));
}
