// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::EmojiSet;
use crate::error::{Error, Result};

/// Keys accepted in `default_commit_args`.
pub const COMMIT_ARG_KEYS: &[(&str, &str)] = &[
    ("repo", "Path to the git repository"),
    ("remote", "Comma-separated list of remotes to push to"),
];

/// Boolean `commit` flags that `start` can switch on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitFlag {
    Add,
    Dry,
    KeepAlive,
    Push,
    Sign,
    Simple,
}

impl CommitFlag {
    pub const ALL: &'static [CommitFlag] = &[
        CommitFlag::Add,
        CommitFlag::Dry,
        CommitFlag::KeepAlive,
        CommitFlag::Push,
        CommitFlag::Sign,
        CommitFlag::Simple,
    ];

    /// Name as written on the command line, without dashes.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Dry => "dry",
            Self::KeepAlive => "keep-alive",
            Self::Push => "push",
            Self::Sign => "sign",
            Self::Simple => "simple",
        }
    }
}

impl std::fmt::Display for CommitFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cli_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Never ask for a commit scope
    #[serde(default)]
    pub skip_scope: bool,

    /// Never ask for a commit description
    #[serde(default)]
    pub skip_message: bool,

    /// Upper-case the first letter of the title (default: true)
    #[serde(default = "default_true")]
    pub capitalize_title: bool,

    /// Record commits for autocomplete and emoji ranking (default: true)
    #[serde(default = "default_true")]
    pub enable_history: bool,

    #[serde(default)]
    pub emoji_set: EmojiSet,

    /// Flags switched on by `commoji start`
    #[serde(default)]
    pub default_commit_flags: BTreeSet<CommitFlag>,

    /// Values used by `commoji start`; blank means "ask at use time"
    #[serde(default = "default_commit_args")]
    pub default_commit_args: BTreeMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_commit_args() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("repo".to_string(), ".".to_string()),
        ("remote".to_string(), "origin".to_string()),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_scope: false,
            skip_message: false,
            capitalize_title: default_true(),
            enable_history: default_true(),
            emoji_set: EmojiSet::default(),
            default_commit_flags: BTreeSet::new(),
            default_commit_args: default_commit_args(),
        }
    }
}

impl Config {
    /// Non-blank default for a `default_commit_args` key.
    pub fn commit_arg(&self, key: &str) -> Option<&str> {
        self.default_commit_args
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Remotes from the comma-separated `remote` default.
    pub fn default_remotes(&self) -> Vec<String> {
        self.commit_arg("remote")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `key: value` lines for `commoji info`, in persisted key order.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let flags: Vec<&str> = self
            .default_commit_flags
            .iter()
            .map(CommitFlag::cli_name)
            .collect();
        let args: Vec<String> = self
            .default_commit_args
            .iter()
            .map(|(k, v)| format!("{k}={v:?}"))
            .collect();
        vec![
            ("skip_scope", self.skip_scope.to_string()),
            ("skip_message", self.skip_message.to_string()),
            ("capitalize_title", self.capitalize_title.to_string()),
            ("enable_history", self.enable_history.to_string()),
            ("emoji_set", self.emoji_set.to_string()),
            ("default_commit_flags", format!("[{}]", flags.join(", "))),
            ("default_commit_args", format!("{{{}}}", args.join(", "))),
        ]
    }
}

/// Location of every file commoji persists.
#[derive(Debug, Clone)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// `COMMOJI_HOME` if set, otherwise the platform config directory.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os("COMMOJI_HOME").filter(|h| !h.is_empty()) {
            return Ok(Self::at(home));
        }
        ProjectDirs::from("", "", "commoji")
            .map(|dirs| Self::at(dirs.config_dir()))
            .ok_or_else(|| Error::Config("Cannot determine config directory".into()))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join("history.jsonl")
    }

    pub fn custom_emojis_file(&self) -> PathBuf {
        self.root.join("custom_emojis.toml")
    }
}

/// Owns the persisted config document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persisted config, or defaults when there is none or it is malformed.
    pub fn load(&self) -> Config {
        self.extract(self.file_figment())
    }

    /// Like [`load`](Self::load), with `COMMOJI_*` environment overrides for this run.
    pub fn load_effective(&self) -> Config {
        self.extract(self.file_figment().merge(Env::prefixed("COMMOJI_")))
    }

    fn file_figment(&self) -> Figment {
        let figment = Figment::new();
        if self.path.exists() {
            figment.merge(Toml::file(&self.path))
        } else {
            figment
        }
    }

    fn extract(&self, figment: Figment) -> Config {
        match figment.extract::<Config>() {
            Ok(config) => {
                debug!(path = %self.path.display(), "config loaded");
                config
            }
            Err(e) => {
                let err = Error::ConfigLoad {
                    path: self.path.clone(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "falling back to default config");
                Config::default()
            }
        }
    }

    /// Atomically replace the persisted config.
    pub fn save(&self, config: &Config) -> Result<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        write_atomic(dir, &self.path, content.as_bytes())?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

/// Write to a temp file in `dir`, then rename it over `path`.
pub(crate) fn write_atomic(dir: &Path, path: &Path, content: &[u8]) -> Result<()> {
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    // Set secure permissions (0600)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600))?;
    }

    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
