// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::{CommitFlag, Config};

#[derive(Parser, Debug)]
#[command(name = "commoji")]
#[command(version)]
#[command(about = "Interactive gitmoji commit wizard", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Commit staged files. Use --add to pick files to stage interactively
    Commit(CommitArgs),
    /// Configure commoji interactively
    Config,
    /// Show paths and current configuration
    Info,
    /// Run `commit` with the default flags and arguments from the config
    Start,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct CommitArgs {
    /// Path to the git repository
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Interactively select unstaged and untracked files to stage
    #[arg(long, overrides_with = "no_add")]
    pub add: bool,
    #[arg(long, hide = true, overrides_with = "add")]
    pub no_add: bool,

    /// `git push` after the commit; several remotes are picked interactively
    #[arg(long, overrides_with = "no_push")]
    pub push: bool,
    #[arg(long, hide = true, overrides_with = "push")]
    pub no_push: bool,

    /// Print the formatted message instead of committing
    #[arg(long, overrides_with = "no_dry")]
    pub dry: bool,
    #[arg(long, hide = true, overrides_with = "dry")]
    pub no_dry: bool,

    /// Remote to push to (repeatable); skips the interactive remote picker
    #[arg(long)]
    pub remote: Vec<String>,

    /// Stay alive after a commit, ready for the next one
    #[arg(long, overrides_with = "no_keep_alive")]
    pub keep_alive: bool,
    #[arg(long, hide = true, overrides_with = "keep_alive")]
    pub no_keep_alive: bool,

    /// Conventional type and gitmoji in one choice, e.g. `✨ feat(scope): ...`
    #[arg(long, overrides_with = "no_simple")]
    pub simple: bool,
    #[arg(long, hide = true, overrides_with = "simple")]
    pub no_simple: bool,

    /// GPG-sign the commit (git commit -S)
    #[arg(long, overrides_with = "no_sign")]
    pub sign: bool,
    #[arg(long, hide = true, overrides_with = "sign")]
    pub no_sign: bool,

    /// Files to stage instead of picking them interactively
    pub files: Vec<String>,
}

impl Default for CommitArgs {
    fn default() -> Self {
        Self {
            repo: PathBuf::from("."),
            add: false,
            no_add: false,
            push: false,
            no_push: false,
            dry: false,
            no_dry: false,
            remote: Vec::new(),
            keep_alive: false,
            no_keep_alive: false,
            simple: false,
            no_simple: false,
            sign: false,
            no_sign: false,
            files: Vec::new(),
        }
    }
}

impl CommitArgs {
    /// Arguments `commoji start` runs with, and whether the repo must be asked for.
    pub fn from_config(config: &Config) -> (Self, bool) {
        let mut args = Self::default();
        for flag in &config.default_commit_flags {
            args.set_flag(*flag);
        }
        let repo = config.commit_arg("repo");
        if let Some(repo) = repo {
            args.repo = PathBuf::from(repo);
        }
        if args.push {
            args.remote = config.default_remotes();
        }
        (args, repo.is_none())
    }

    fn set_flag(&mut self, flag: CommitFlag) {
        match flag {
            CommitFlag::Add => self.add = true,
            CommitFlag::Dry => self.dry = true,
            CommitFlag::KeepAlive => self.keep_alive = true,
            CommitFlag::Push => self.push = true,
            CommitFlag::Sign => self.sign = true,
            CommitFlag::Simple => self.simple = true,
        }
    }

    /// Equivalent command line, for display.
    pub fn command_line(&self) -> String {
        let mut cmd = vec![
            "commoji".to_string(),
            "commit".to_string(),
            "--repo".to_string(),
            self.repo.display().to_string(),
        ];
        let flags = [
            (self.add, CommitFlag::Add),
            (self.dry, CommitFlag::Dry),
            (self.keep_alive, CommitFlag::KeepAlive),
            (self.push, CommitFlag::Push),
            (self.sign, CommitFlag::Sign),
            (self.simple, CommitFlag::Simple),
        ];
        for (on, flag) in flags {
            if on {
                cmd.push(format!("--{}", flag.cli_name()));
            }
        }
        for remote in &self.remote {
            cmd.push("--remote".to_string());
            cmd.push(remote.clone());
        }
        cmd.extend(self.files.iter().cloned());
        cmd.join(" ")
    }
}
