// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::{BTreeMap, BTreeSet};

use commoji::cli::CommitArgs;
use commoji::config::{AppPaths, CommitFlag, Config, ConfigStore};
use commoji::domain::EmojiSet;
use proptest::prelude::*;

// ─── Default values ──────────────────────────────────────────────────────────

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(!config.skip_scope);
    assert!(!config.skip_message);
    assert!(config.capitalize_title);
    assert!(config.enable_history);
    assert_eq!(config.emoji_set, EmojiSet::Gitmoji);
    assert!(config.default_commit_flags.is_empty());
    assert_eq!(config.commit_arg("repo"), Some("."));
    assert_eq!(config.commit_arg("remote"), Some("origin"));
}

// ─── TOML deserialization ────────────────────────────────────────────────────

#[test]
fn load_from_valid_toml() {
    let toml_str = r#"
skip_scope = true
capitalize_title = false
emoji_set = "ai-devmojis"
default_commit_flags = ["add", "keep_alive", "push"]

[default_commit_args]
repo = ""
remote = "origin, upstream"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.skip_scope);
    assert!(!config.skip_message);
    assert!(!config.capitalize_title);
    assert_eq!(config.emoji_set, EmojiSet::AiDevmojis);
    assert_eq!(
        config.default_commit_flags,
        BTreeSet::from([CommitFlag::Add, CommitFlag::KeepAlive, CommitFlag::Push])
    );
    assert_eq!(config.commit_arg("repo"), None, "blank means ask at use time");
    assert_eq!(config.default_remotes(), vec!["origin", "upstream"]);
}

#[test]
fn load_partial_toml_uses_defaults() {
    let config: Config = toml::from_str("skip_message = true").unwrap();
    assert!(config.skip_message);
    assert!(config.capitalize_title);
    assert!(config.enable_history);
    assert_eq!(config.default_remotes(), vec!["origin"]);
}

#[test]
fn empty_toml_uses_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_emoji_set_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str(r#"emoji_set = "nope""#);
    assert!(result.is_err());
}

// ─── Store ───────────────────────────────────────────────────────────────────

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.toml"));
    assert_eq!(store.load(), Config::default());
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "skip_scope = [unterminated").unwrap();
    assert_eq!(ConfigStore::new(&path).load(), Config::default());

    std::fs::write(&path, r#"skip_scope = "maybe""#).unwrap();
    assert_eq!(ConfigStore::new(&path).load(), Config::default());
}

#[test]
fn save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("nested").join("config.toml"));
    let config = Config {
        skip_scope: true,
        ..Config::default()
    };
    store.save(&config).unwrap();
    assert_eq!(store.load(), config);
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.toml"));
    store.save(&Config::default()).unwrap();
    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn save_keeps_removed_map_keys_removed() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.toml"));
    let config = Config {
        default_commit_args: BTreeMap::from([("repo".to_string(), "/src/app".to_string())]),
        ..Config::default()
    };
    store.save(&config).unwrap();
    let loaded = store.load();
    assert_eq!(loaded.commit_arg("remote"), None);
    assert_eq!(loaded.commit_arg("repo"), Some("/src/app"));
}

#[test]
fn app_paths_layout() {
    let paths = AppPaths::at("/tmp/commoji-home");
    assert_eq!(paths.config_file(), paths.root().join("config.toml"));
    assert_eq!(paths.history_file(), paths.root().join("history.jsonl"));
    assert_eq!(
        paths.custom_emojis_file(),
        paths.root().join("custom_emojis.toml")
    );
}

// ─── Start arguments ─────────────────────────────────────────────────────────

#[test]
fn start_args_follow_config() {
    let config = Config {
        default_commit_flags: BTreeSet::from([CommitFlag::Push, CommitFlag::Simple]),
        default_commit_args: BTreeMap::from([
            ("repo".to_string(), "../app".to_string()),
            ("remote".to_string(), "origin,backup".to_string()),
        ]),
        ..Config::default()
    };
    let (args, ask_repo) = CommitArgs::from_config(&config);
    assert!(!ask_repo);
    assert!(args.push && args.simple);
    assert!(!args.add && !args.dry);
    assert_eq!(args.remote, vec!["origin", "backup"]);
    assert_eq!(
        args.command_line(),
        "commoji commit --repo ../app --push --simple --remote origin --remote backup"
    );
}

#[test]
fn start_asks_for_blank_repo() {
    let config = Config {
        default_commit_args: BTreeMap::from([("repo".to_string(), "  ".to_string())]),
        ..Config::default()
    };
    let (args, ask_repo) = CommitArgs::from_config(&config);
    assert!(ask_repo);
    assert!(args.remote.is_empty(), "remotes only apply with push");
}

#[test]
fn describe_lists_every_key() {
    let keys: Vec<&str> = Config::default()
        .describe()
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        keys,
        vec![
            "skip_scope",
            "skip_message",
            "capitalize_title",
            "enable_history",
            "emoji_set",
            "default_commit_flags",
            "default_commit_args",
        ]
    );
}

// ─── Round trip ──────────────────────────────────────────────────────────────

fn arb_config() -> impl Strategy<Value = Config> {
    (
        any::<[bool; 4]>(),
        prop::sample::select(EmojiSet::ALL.to_vec()),
        prop::sample::subsequence(CommitFlag::ALL.to_vec(), 0..=CommitFlag::ALL.len()),
        prop::collection::btree_map(
            prop::sample::select(vec!["repo".to_string(), "remote".to_string()]),
            "[a-z0-9./, ]{0,16}",
            0..=2,
        ),
    )
        .prop_map(|(toggles, emoji_set, flags, args)| Config {
            skip_scope: toggles[0],
            skip_message: toggles[1],
            capitalize_title: toggles[2],
            enable_history: toggles[3],
            emoji_set,
            default_commit_flags: flags.into_iter().collect(),
            default_commit_args: args,
        })
}

proptest! {
    #[test]
    fn save_then_load_returns_same_config(config in arb_config()) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.toml"));
        store.save(&config).unwrap();
        prop_assert_eq!(store.load(), config);
    }
}
