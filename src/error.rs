// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Nothing staged for commit")]
    #[diagnostic(
        code(commoji::git::nothing_staged),
        help("Stage files with: git add <files>, or rerun with --add to pick them interactively")
    )]
    NothingStaged,

    #[error("{} is not a git repository", path.display())]
    #[diagnostic(
        code(commoji::git::not_repo),
        help("Run this command inside a git repository or pass --repo <path>")
    )]
    NotAGitRepo { path: PathBuf },

    #[error("Merge in progress")]
    #[diagnostic(
        code(commoji::git::merge),
        help("Complete or abort the merge: git merge --abort")
    )]
    MergeInProgress,

    #[error("Wizard aborted by user")]
    UserAbort,

    #[error("No file selected, nothing to commit")]
    NoFilesSelected,

    #[error("Push failed for every selected remote: {}", remotes.join(", "))]
    #[diagnostic(
        code(commoji::push::failed),
        help("The commit was created locally. Fix the remote(s) and push again")
    )]
    PushFailed { remotes: Vec<String> },

    #[error("Cannot load emoji source {origin}: {reason}")]
    #[diagnostic(
        code(commoji::catalog::load),
        help("Every [[emoji]] entry needs a non-empty `code` and `glyph`")
    )]
    CatalogLoad { origin: String, reason: String },

    #[error("History log {} is corrupt: {reason}", path.display())]
    #[diagnostic(
        code(commoji::history::corrupt),
        help("Fix or remove the file; history is disabled until then")
    )]
    HistoryCorruption { path: PathBuf, reason: String },

    #[error("Cannot load config {}: {reason}", path.display())]
    #[diagnostic(
        code(commoji::config::load),
        help("Run `commoji config` to rewrite it")
    )]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commoji::config::error))]
    Config(String),

    #[error("Git error: {0}")]
    #[diagnostic(code(commoji::git::error))]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
