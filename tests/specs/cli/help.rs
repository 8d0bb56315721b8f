// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the help and version surface.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_lists_the_subcommands() {
    cargo_bin_cmd!("fieldline")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("queue"))
        .stdout(predicate::str::contains("ping"));
}

#[test]
fn version_prints_the_package_version() {
    cargo_bin_cmd!("fieldline")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fieldline"));
}

#[test]
fn new_help_shows_examples() {
    cargo_bin_cmd!("fieldline")
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn queue_help_lists_queue_commands() {
    cargo_bin_cmd!("fieldline")
        .args(["queue", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flush"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn unknown_subcommand_fails() {
    cargo_bin_cmd!("fieldline")
        .arg("frobnicate")
        .assert()
        .failure();
}
