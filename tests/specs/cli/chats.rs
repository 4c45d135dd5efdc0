// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sieve chats`.

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
fn default_includes_active_chats() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .arg("chats")
        .assert()
        .success()
        .stdout("{\"action\":\"list_chats\",\"payload\":{}}\n");
}

#[test]
fn without_active_sends_explicit_false() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["chats", "--body-only", "--without-active"])
        .assert()
        .success()
        .stdout("{\"filters\":{\"include_active\":false}}\n");
}

#[test]
fn groups_and_properties() {
    let home = TempDir::new().unwrap();
    let value = run_json(
        &home,
        &[
            "chats",
            "--body-only",
            "--with-chats-without-threads",
            "--group",
            "3",
            "--property",
            "source.type=api,facebook",
            "--property",
            "routing.pinned=!?",
            "--require-every-value",
        ],
    );
    similar_asserts::assert_eq!(
        value,
        json!({
            "filters": {
                "include_chats_without_threads": true,
                "group_ids": [3],
                "properties": {
                    "routing": { "pinned": { "exists": false } },
                    "source": {
                        "type": { "values": ["api", "facebook"], "require_every_value": true }
                    },
                },
            }
        })
    );
}

#[test]
fn config_limit_and_order_apply() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("sieve.toml");
    std::fs::write(&config, "limit = 10\nsort_order = \"desc\"\n").unwrap();

    let value = run_json(
        &home,
        &[
            "chats",
            "--config",
            config.to_str().unwrap(),
            "--body-only",
            "-n",
            "5",
        ],
    );
    similar_asserts::assert_eq!(value, json!({ "sort_order": "desc", "limit": 5 }));
}

#[test]
fn config_from_environment() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("env.toml");
    std::fs::write(&config, "pretty = true\n").unwrap();

    sieve(&home)
        .env("SIEVE_CONFIG", &config)
        .args(["chats", "--without-active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"payload\": {"));
}

#[test]
fn default_config_location_is_read() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("sieve");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "limit = 3\n").unwrap();

    let value = run_json(&home, &["chats", "--body-only"]);
    similar_asserts::assert_eq!(value, json!({ "limit": 3 }));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["chats", "--config", "/nonexistent/sieve.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn invalid_log_directive_warns_and_still_runs() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .env("SIEVE_LOG", "sieve_core=loud")
        .args(["chats", "--body-only"])
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(predicate::str::contains("invalid SIEVE_LOG directive"))
        .stderr(predicate::str::contains("sieve_core=loud"));
}
