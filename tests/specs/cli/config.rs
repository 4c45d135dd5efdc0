// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sieve config`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
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

#[test]
fn show_defaults_is_minimal() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pretty = false"));
}

#[test]
fn show_echoes_loaded_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("sieve.toml");
    std::fs::write(
        &config,
        "limit = 25\nsort_order = \"asc\"\n\n[customers]\nsort_by = \"created_at\"\n",
    )
    .unwrap();

    sieve(&home)
        .args(["--config", config.to_str().unwrap(), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit = 25"))
        .stdout(predicate::str::contains("sort_order = \"asc\""))
        .stdout(predicate::str::contains("sort_by = \"created_at\""));
}

#[test]
fn path_points_into_config_home() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sieve"))
        .stdout(predicate::str::contains("config.toml"));
}

#[yare::parameterized(
    unknown_key = { "colour = true\n" },
    wrong_type = { "limit = \"many\"\n" },
    bad_order = { "sort_order = \"sideways\"\n" },
    not_toml = { "limit = \n" },
)]
fn invalid_config_is_rejected(content: &str) {
    let home = TempDir::new().unwrap();
    let config = home.path().join("sieve.toml");
    std::fs::write(&config, content).unwrap();

    sieve(&home)
        .args(["--config", config.to_str().unwrap(), "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[yare::parameterized(
    broken_file = { Some("limit = \n") },
    missing_file = { None },
)]
fn path_does_not_read_config(content: Option<&str>) {
    let home = TempDir::new().unwrap();
    let config = home.path().join("sieve.toml");
    if let Some(content) = content {
        std::fs::write(&config, content).unwrap();
    }

    sieve(&home)
        .args(["--config", config.to_str().unwrap(), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
