// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sieve completion`.

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

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_mentions_list_commands(shell: &str) {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("archives"))
        .stdout(predicate::str::contains("customers"));
}

#[test]
fn completion_invalid_shell_fails() {
    let home = TempDir::new().unwrap();
    sieve(&home)
        .args(["completion", "tcsh"])
        .assert()
        .failure();
}
