// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;

use commoji::cli::{Cli, Commands};

fn commoji(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("commoji").unwrap();
    cmd.env("COMMOJI_HOME", home).env("NO_COLOR", "1");
    cmd
}

// ─── Binary ──────────────────────────────────────────────────────────────────

#[test]
fn info_shows_paths_and_defaults() {
    let home = tempfile::tempdir().unwrap();
    commoji(home.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("emoji_set"))
        .stdout(predicate::str::contains("gitmoji"));
}

#[test]
fn info_reflects_saved_config() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "emoji_set = \"ai-devmojis\"\nskip_scope = true\n",
    )
    .unwrap();
    commoji(home.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("ai-devmojis"))
        .stdout(predicate::str::is_match(r"skip_scope\s*: true").unwrap());
}

#[test]
fn info_survives_malformed_config() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.toml"), "skip_scope = [").unwrap();
    commoji(home.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitmoji"));
}

#[test]
fn completions_for_bash() {
    let home = tempfile::tempdir().unwrap();
    commoji(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commoji"));
}

#[test]
fn commit_outside_repository_fails() {
    let home = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    commoji(home.path())
        .args(["commit", "--repo"])
        .arg(outside.path())
        .env("GIT_CEILING_DIRECTORIES", outside.path().parent().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

// ─── Argument parsing ────────────────────────────────────────────────────────

#[test]
fn commit_flags_parse() {
    let cli = Cli::try_parse_from([
        "commoji", "commit", "--add", "--push", "--remote", "origin", "--remote", "backup",
        "--simple", "src/lib.rs",
    ])
    .unwrap();
    let Some(Commands::Commit(args)) = cli.command else {
        panic!("expected commit subcommand");
    };
    assert!(args.add && args.push && args.simple);
    assert!(!args.dry && !args.sign && !args.keep_alive);
    assert_eq!(args.remote, vec!["origin", "backup"]);
    assert_eq!(args.files, vec!["src/lib.rs"]);
}

#[test]
fn negative_flag_overrides_earlier_flag() {
    let cli = Cli::try_parse_from(["commoji", "commit", "--push", "--no-push"]).unwrap();
    let Some(Commands::Commit(args)) = cli.command else {
        panic!("expected commit subcommand");
    };
    assert!(!args.push);
}

#[test]
fn no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["commoji"]).unwrap();
    assert!(cli.command.is_none());
}
