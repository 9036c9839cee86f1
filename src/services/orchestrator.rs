// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::domain::{CommitDraft, FileStatus, HistoryRecord};
use crate::error::{Error, Result};
use crate::services::git::Vcs;
use crate::services::history::HistoryStore;
use crate::services::prompt::{Answer, Prompter};

/// How a finished draft is turned into a commit.
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    /// Files passed on the command line; staged instead of the wizard's selection
    pub explicit_files: Vec<String>,
    pub sign: bool,
    pub push: bool,
    /// `--remote` overrides for the remote picker
    pub remotes: Vec<String>,
    pub capitalize_title: bool,
    pub repo: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    PushedWithUpstream,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePush {
    pub remote: String,
    pub outcome: PushOutcome,
}

/// Per-remote push results, collected after every attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushReport {
    pub results: Vec<RemotePush>,
}

impl PushReport {
    pub fn succeeded(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PushOutcome::Pushed | PushOutcome::PushedWithUpstream))
            .map(|r| r.remote.as_str())
            .collect()
    }

    pub fn failed(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PushOutcome::Failed(_)))
            .map(|r| r.remote.as_str())
            .collect()
    }

    /// Error only when remotes were attempted and none of them worked.
    pub fn into_result(self) -> Result<Self> {
        let attempted = self
            .results
            .iter()
            .filter(|r| r.outcome != PushOutcome::Skipped)
            .count();
        let failed = self.failed();
        if attempted > 0 && failed.len() == attempted {
            return Err(Error::PushFailed {
                remotes: failed.into_iter().map(String::from).collect(),
            });
        }
        Ok(self)
    }
}

/// Choices of the keep-alive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    CommitAgain,
    PushAndCommitAgain,
    SyncAndCommitAgain,
    Quit,
}

impl NextAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::CommitAgain => "Commit again",
            Self::PushAndCommitAgain => "Push and commit again",
            Self::SyncAndCommitAgain => "Sync (pull then push) and commit again",
            Self::Quit => "Quit commoji",
        }
    }
}

/// Where the current branch stands on one remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDiff {
    pub remote: String,
    /// `(ahead, behind)`; `None` when the remote does not have the branch
    pub counts: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemotesDiff {
    pub remotes: Vec<RemoteDiff>,
}

impl RemotesDiff {
    /// True when every remote is level with the local branch.
    pub fn is_empty(&self) -> bool {
        self.remotes.iter().all(|r| r.counts == Some((0, 0)))
    }

    /// Pulling needs the branch on every remote.
    pub fn can_sync(&self) -> bool {
        !self.is_empty() && self.remotes.iter().all(|r| r.counts.is_some())
    }

    /// Menu entries: push and sync are only offered when something differs.
    pub fn choices(&self) -> Vec<NextAction> {
        let mut choices = vec![NextAction::CommitAgain];
        if !self.is_empty() {
            choices.push(NextAction::PushAndCommitAgain);
            if self.can_sync() {
                choices.push(NextAction::SyncAndCommitAgain);
            }
        }
        choices.push(NextAction::Quit);
        choices
    }

    /// Lines to show before the keep-alive menu; empty when nothing differs.
    pub fn lines(&self) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut lines = vec!["Remotes diff:".to_string()];
        for diff in &self.remotes {
            match diff.counts {
                None => lines.push(format!("{} does not have this branch", diff.remote)),
                Some((ahead, behind)) => {
                    if behind > 0 {
                        lines.push(format!("behind {} by {behind} commit(s)", diff.remote));
                    }
                    if ahead > 0 {
                        lines.push(format!("ahead {} by {ahead} commit(s)", diff.remote));
                    }
                }
            }
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePull {
    pub remote: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommitOutcome {
    pub id: String,
    pub message: String,
    pub staged: Vec<String>,
    pub push: Option<PushReport>,
}

/// Stage, commit and push against a [`Vcs`].
pub struct CommitOrchestrator<'a, V: Vcs> {
    vcs: &'a V,
}

impl<'a, V: Vcs> CommitOrchestrator<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// Fail early when nothing is staged and nothing can be added.
    pub fn preflight(status: &FileStatus, explicit: &[String], add: bool) -> Result<()> {
        if status.staged.is_empty() && explicit.is_empty() && !add {
            return Err(Error::NothingStaged);
        }
        Ok(())
    }

    /// Stage `explicit` if given, else `selected`; an existing stage is kept as-is.
    pub async fn stage(&self, explicit: &[String], selected: &[String]) -> Result<Vec<String>> {
        let to_stage = if explicit.is_empty() { selected } else { explicit };

        if !to_stage.is_empty() {
            debug!(count = to_stage.len(), "staging files");
            self.vcs.stage(to_stage).await?;
        }

        let staged = self.vcs.status().await?.staged;
        if staged.is_empty() {
            return Err(Error::NothingStaged);
        }
        Ok(staged)
    }

    pub async fn commit(&self, message: &str, sign: bool) -> Result<String> {
        self.vcs.commit(message, sign).await
    }

    /// Full flow for a finished draft. The history record is written only
    /// once the commit exists.
    pub async fn finish(
        &self,
        draft: &CommitDraft,
        options: &CommitOptions,
        history: &mut HistoryStore,
        prompter: &mut dyn Prompter,
    ) -> Result<CommitOutcome> {
        let staged = self.stage(&options.explicit_files, &draft.files).await?;
        let message = draft.message(options.capitalize_title);
        let id = self.commit(&message, options.sign).await?;
        debug!(%id, "commit created");

        let record = HistoryRecord {
            timestamp: Utc::now(),
            repo_path: options.repo.clone(),
            emoji_code: draft.emoji.code.clone(),
            scope: draft.scope.clone(),
            title: draft.final_title(options.capitalize_title),
            description: draft.description.clone(),
            files: staged.iter().cloned().collect::<BTreeSet<_>>(),
        };
        if let Err(e) = history.append(record) {
            warn!(error = %e, "could not record commit in history");
        }

        let push = if options.push {
            Some(self.push(&options.remotes, prompter).await?)
        } else {
            None
        };

        Ok(CommitOutcome {
            id,
            message,
            staged,
            push,
        })
    }

    /// Push to every selected remote. A failure on one remote does not stop the others.
    pub async fn push(&self, overrides: &[String], prompter: &mut dyn Prompter) -> Result<PushReport> {
        let configured = self.vcs.remotes().await?;
        let selected = choose_remotes(&configured, overrides, prompter, RemoteAction::Push)?;

        let mut report = PushReport::default();
        for remote in selected {
            let outcome = self.push_one(&remote, prompter).await?;
            if let PushOutcome::Failed(ref reason) = outcome {
                warn!(%remote, %reason, "push failed");
            }
            report.results.push(RemotePush { remote, outcome });
        }
        Ok(report)
    }

    /// Compare the current branch with every configured remote. Remotes that
    /// cannot be compared are left out.
    pub async fn remotes_diff(&self) -> Result<RemotesDiff> {
        let mut diff = RemotesDiff::default();
        for remote in self.vcs.remotes().await? {
            match self.vcs.ahead_behind(&remote).await {
                Ok(counts) => diff.remotes.push(RemoteDiff { remote, counts }),
                Err(e) => debug!(%remote, error = %e, "cannot compare with remote"),
            }
        }
        Ok(diff)
    }

    /// Pull from every selected remote, chosen the same way as for a push.
    pub async fn pull(&self, overrides: &[String], prompter: &mut dyn Prompter) -> Result<Vec<RemotePull>> {
        let configured = self.vcs.remotes().await?;
        let selected = choose_remotes(&configured, overrides, prompter, RemoteAction::Pull)?;

        let mut results = Vec::new();
        for remote in selected {
            let spinner = spinner(format!("Pulling from {remote}..."));
            let result = self.vcs.pull(&remote).await;
            spinner.finish_and_clear();

            let error = result.err().map(|e| e.to_string());
            if let Some(ref reason) = error {
                warn!(%remote, %reason, "pull failed");
            }
            results.push(RemotePull { remote, error });
        }
        Ok(results)
    }

    async fn push_one(&self, remote: &str, prompter: &mut dyn Prompter) -> Result<PushOutcome> {
        let has_upstream = match self.vcs.has_upstream(remote).await {
            Ok(found) => found,
            Err(e) => return Ok(PushOutcome::Failed(e.to_string())),
        };

        if !has_upstream {
            let prompt = format!("'{remote}' does not have this branch. Create upstream branch?");
            match prompter.confirm(&prompt, true)? {
                Answer::Value(true) => {}
                _ => return Ok(PushOutcome::Skipped),
            }
        }

        let spinner = spinner(format!("Pushing to {remote}..."));
        let result = self.vcs.push(remote, !has_upstream).await;
        spinner.finish_and_clear();

        Ok(match result {
            Ok(()) if has_upstream => PushOutcome::Pushed,
            Ok(()) => PushOutcome::PushedWithUpstream,
            Err(e) => PushOutcome::Failed(e.to_string()),
        })
    }
}

fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[derive(Debug, Clone, Copy)]
enum RemoteAction {
    Push,
    Pull,
}

impl RemoteAction {
    fn name(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Push => "Select remotes to push to",
            Self::Pull => "Select remotes to pull from",
        }
    }
}

/// Decide which remotes to push to. Several remotes without overrides need a choice.
pub fn select_remotes(
    configured: &[String],
    overrides: &[String],
    prompter: &mut dyn Prompter,
) -> Result<Vec<String>> {
    choose_remotes(configured, overrides, prompter, RemoteAction::Push)
}

fn choose_remotes(
    configured: &[String],
    overrides: &[String],
    prompter: &mut dyn Prompter,
    action: RemoteAction,
) -> Result<Vec<String>> {
    let name = action.name();
    if configured.is_empty() {
        warn!("no remote configured, skipping {name}");
        return Ok(Vec::new());
    }

    if !overrides.is_empty() {
        let mut selected = Vec::new();
        for remote in overrides {
            if !configured.contains(remote) {
                warn!(%remote, "unknown remote ignored");
            } else if !selected.contains(remote) {
                selected.push(remote.clone());
            }
        }
        return Ok(selected);
    }

    if configured.len() == 1 {
        return Ok(configured.to_vec());
    }

    let defaults = vec![true; configured.len()];
    let picked = match prompter.multi_select(action.prompt(), configured, &defaults)? {
        Answer::Value(picked) => picked,
        Answer::Interrupted => Vec::new(),
    };
    if picked.is_empty() {
        warn!("no remote selected, skipping {name}");
    }
    Ok(picked.into_iter().map(|i| configured[i].clone()).collect())
}
