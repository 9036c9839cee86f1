// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};
use std::process::Output;

use tokio::process::Command;
use tracing::debug;

use crate::domain::FileStatus;
use crate::error::{Error, Result};

/// Version-control operations the commit flow needs.
#[allow(async_fn_in_trait)]
pub trait Vcs {
    async fn status(&self) -> Result<FileStatus>;

    async fn stage(&self, paths: &[String]) -> Result<()>;

    /// Create a commit and return its short id.
    async fn commit(&self, message: &str, sign: bool) -> Result<String>;

    /// Configured remotes in config order.
    async fn remotes(&self) -> Result<Vec<String>>;

    /// Whether `remote` already has the current branch.
    async fn has_upstream(&self, remote: &str) -> Result<bool>;

    async fn push(&self, remote: &str, set_upstream: bool) -> Result<()>;

    /// Commits `(ahead, behind)` of the current branch against its copy on
    /// `remote`, or `None` when the remote does not have the branch.
    async fn ahead_behind(&self, remote: &str) -> Result<Option<(usize, usize)>>;

    async fn pull(&self, remote: &str) -> Result<()>;
}

pub struct GitService {
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|_| Error::NotAGitRepo {
            path: path.to_path_buf(),
        })?;

        // Check for merge/rebase in progress
        if matches!(repo.state(), Some(gix::state::InProgress::Merge)) {
            return Err(Error::MergeInProgress);
        }

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();
        let work_dir = std::fs::canonicalize(&work_dir).unwrap_or(work_dir);

        Ok(Self { work_dir })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Rewrite paths given relative to `cwd` so they are relative to the work tree.
    pub fn relative_paths(&self, cwd: &Path, files: &[String]) -> Vec<String> {
        files
            .iter()
            .map(|f| repo_relative(&self.work_dir, cwd, f))
            .collect()
    }

    async fn output(&self, args: &[&str]) -> Result<Output> {
        debug!(?args, "git");
        Ok(Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await?)
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Paths from `-z` output.
    async fn paths(&self, args: &[&str]) -> Result<Vec<String>> {
        Ok(self
            .run(args)
            .await?
            .split('\0')
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect())
    }

    async fn current_branch(&self) -> Result<String> {
        let branch = self
            .run(&["symbolic-ref", "--short", "HEAD"])
            .await
            .map_err(|_| Error::Git("Cannot push from a detached HEAD".into()))?;
        Ok(branch.trim().to_string())
    }
}

impl Vcs for GitService {
    async fn status(&self) -> Result<FileStatus> {
        Ok(FileStatus {
            staged: self.paths(&["diff", "--cached", "--name-only", "-z"]).await?,
            unstaged: self.paths(&["diff", "--name-only", "-z"]).await?,
            untracked: self
                .paths(&["ls-files", "--others", "--exclude-standard", "-z"])
                .await?,
        })
    }

    async fn stage(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run(&args).await?;
        Ok(())
    }

    async fn commit(&self, message: &str, sign: bool) -> Result<String> {
        let mut args = vec!["commit", "-m", message];
        if sign {
            args.push("-S");
        }
        self.run(&args).await?;
        let id = self.run(&["rev-parse", "--short", "HEAD"]).await?;
        Ok(id.trim().to_string())
    }

    async fn remotes(&self) -> Result<Vec<String>> {
        Ok(self
            .run(&["remote"])
            .await?
            .lines()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect())
    }

    async fn has_upstream(&self, remote: &str) -> Result<bool> {
        let branch = self.current_branch().await?;
        let output = self
            .output(&["ls-remote", "--exit-code", "--heads", remote, &branch])
            .await?;
        // --exit-code: 2 means the remote has no such branch
        match output.status.code() {
            Some(0) => Ok(true),
            Some(2) => Ok(false),
            _ => Err(Error::Git(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            )),
        }
    }

    async fn push(&self, remote: &str, set_upstream: bool) -> Result<()> {
        let branch = self.current_branch().await?;
        let mut args = vec!["push"];
        if set_upstream {
            args.push("--set-upstream");
        }
        args.extend([remote, branch.as_str()]);
        self.run(&args).await?;
        Ok(())
    }

    async fn ahead_behind(&self, remote: &str) -> Result<Option<(usize, usize)>> {
        let branch = self.current_branch().await?;
        let tracking = format!("refs/remotes/{remote}/{branch}");
        let exists = self
            .output(&["rev-parse", "--verify", "--quiet", &tracking])
            .await?;
        if !exists.status.success() {
            return Ok(None);
        }

        let range = format!("HEAD...{tracking}");
        let counts = self
            .run(&["rev-list", "--left-right", "--count", &range])
            .await?;
        let mut parts = counts.split_whitespace().map(str::parse::<usize>);
        match (parts.next(), parts.next()) {
            (Some(Ok(ahead)), Some(Ok(behind))) => Ok(Some((ahead, behind))),
            _ => Err(Error::Git(format!(
                "unexpected rev-list output: {}",
                counts.trim()
            ))),
        }
    }

    async fn pull(&self, remote: &str) -> Result<()> {
        let branch = self.current_branch().await?;
        self.run(&["pull", remote, &branch]).await?;
        Ok(())
    }
}

/// Resolve `path`, given relative to `cwd`, against the work tree at `work_dir`.
///
/// Paths that no longer exist (deleted files) are resolved through their parent
/// directory. Paths outside the work tree are returned unchanged for git to reject.
pub fn repo_relative(work_dir: &Path, cwd: &Path, path: &str) -> String {
    let joined = cwd.join(path);
    let absolute = std::fs::canonicalize(&joined).unwrap_or_else(|_| {
        match (joined.parent(), joined.file_name()) {
            (Some(parent), Some(name)) => std::fs::canonicalize(parent)
                .map(|p| p.join(name))
                .unwrap_or_else(|_| joined.clone()),
            _ => joined.clone(),
        }
    });
    match absolute.strip_prefix(work_dir) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}
