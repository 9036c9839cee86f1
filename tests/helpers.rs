// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};

use commoji::Result;
use commoji::domain::{FileStatus, HistoryRecord};
use commoji::error::Error;
use commoji::services::git::Vcs;
use commoji::services::prompt::{Answer, Prompter, TextRequest};

/// A canned answer for the next prompt, whatever its kind.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Reply {
    Index(usize),
    Indices(Vec<usize>),
    Text(String),
    Bool(bool),
    Interrupt,
}

#[allow(dead_code)]
pub fn text(s: &str) -> Reply {
    Reply::Text(s.to_string())
}

/// One prompt as the prompter saw it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Asked {
    pub prompt: String,
    pub suggestions: Vec<String>,
}

/// Prompter that answers from a script and records what it was asked.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub asked: Vec<Asked>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.asked.iter().map(|a| a.prompt.as_str()).collect()
    }

    fn next(&mut self, prompt: &str, suggestions: &[String]) -> Reply {
        self.asked.push(Asked {
            prompt: prompt.to_string(),
            suggestions: suggestions.to_vec(),
        });
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for {prompt:?}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, _items: &[String], _default: usize) -> Result<Answer<usize>> {
        match self.next(prompt, &[]) {
            Reply::Index(i) => Ok(Answer::Value(i)),
            Reply::Interrupt => Ok(Answer::Interrupted),
            other => panic!("select {prompt:?} got {other:?}"),
        }
    }

    fn fuzzy_select(&mut self, prompt: &str, items: &[String]) -> Result<Answer<usize>> {
        self.select(prompt, items, 0)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        _items: &[String],
        _defaults: &[bool],
    ) -> Result<Answer<Vec<usize>>> {
        match self.next(prompt, &[]) {
            Reply::Indices(picked) => Ok(Answer::Value(picked)),
            Reply::Interrupt => Ok(Answer::Interrupted),
            other => panic!("multi_select {prompt:?} got {other:?}"),
        }
    }

    fn text(&mut self, request: TextRequest<'_>) -> Result<Answer<String>> {
        match self.next(request.prompt, request.suggestions) {
            Reply::Text(s) => Ok(Answer::Value(s)),
            Reply::Interrupt => Ok(Answer::Interrupted),
            other => panic!("text {:?} got {other:?}", request.prompt),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<Answer<bool>> {
        match self.next(prompt, &[]) {
            Reply::Bool(b) => Ok(Answer::Value(b)),
            Reply::Interrupt => Ok(Answer::Interrupted),
            other => panic!("confirm {prompt:?} got {other:?}"),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeState {
    pub status: FileStatus,
    pub commits: Vec<(String, bool)>,
    pub remotes: Vec<String>,
    /// Remotes that already have the branch
    pub upstream: HashSet<String>,
    /// Remotes whose push fails
    pub failing: HashSet<String>,
    /// `(remote, set_upstream)` for every push attempt
    pub pushes: Vec<(String, bool)>,
    /// `(ahead, behind)` per remote; level when absent
    pub diffs: HashMap<String, (usize, usize)>,
    pub pulls: Vec<String>,
}

/// In-memory repository.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeVcs {
    pub state: RefCell<FakeState>,
}

#[allow(dead_code)]
impl FakeVcs {
    pub fn with_status(staged: &[&str], unstaged: &[&str], untracked: &[&str]) -> Self {
        let owned = |paths: &[&str]| paths.iter().map(|p| p.to_string()).collect();
        Self {
            state: RefCell::new(FakeState {
                status: FileStatus {
                    staged: owned(staged),
                    unstaged: owned(unstaged),
                    untracked: owned(untracked),
                },
                ..FakeState::default()
            }),
        }
    }

    pub fn with_remotes(self, remotes: &[&str]) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let names: Vec<String> = remotes.iter().map(|r| r.to_string()).collect();
            state.upstream = names.iter().cloned().collect();
            state.remotes = names;
        }
        self
    }

    pub fn without_upstream(self, remote: &str) -> Self {
        self.state.borrow_mut().upstream.remove(remote);
        self
    }

    pub fn with_diff(self, remote: &str, ahead: usize, behind: usize) -> Self {
        self.state
            .borrow_mut()
            .diffs
            .insert(remote.to_string(), (ahead, behind));
        self
    }

    pub fn failing(self, remote: &str) -> Self {
        self.state.borrow_mut().failing.insert(remote.to_string());
        self
    }

    pub fn commit_messages(&self) -> Vec<String> {
        self.state
            .borrow()
            .commits
            .iter()
            .map(|(m, _)| m.clone())
            .collect()
    }
}

impl Vcs for FakeVcs {
    async fn status(&self) -> Result<FileStatus> {
        Ok(self.state.borrow().status.clone())
    }

    async fn stage(&self, paths: &[String]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        for path in paths {
            state.status.unstaged.retain(|p| p != path);
            state.status.untracked.retain(|p| p != path);
            if !state.status.staged.contains(path) {
                state.status.staged.push(path.clone());
            }
        }
        Ok(())
    }

    async fn commit(&self, message: &str, sign: bool) -> Result<String> {
        let mut state = self.state.borrow_mut();
        if state.status.staged.is_empty() {
            return Err(Error::NothingStaged);
        }
        state.status.staged.clear();
        state.commits.push((message.to_string(), sign));
        Ok(format!("abc{:04}", state.commits.len()))
    }

    async fn remotes(&self) -> Result<Vec<String>> {
        Ok(self.state.borrow().remotes.clone())
    }

    async fn has_upstream(&self, remote: &str) -> Result<bool> {
        Ok(self.state.borrow().upstream.contains(remote))
    }

    async fn push(&self, remote: &str, set_upstream: bool) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.pushes.push((remote.to_string(), set_upstream));
        if state.failing.contains(remote) {
            return Err(Error::Git(format!("could not read from remote '{remote}'")));
        }
        if set_upstream {
            state.upstream.insert(remote.to_string());
        }
        if let Some(diff) = state.diffs.get_mut(remote) {
            diff.0 = 0;
        }
        Ok(())
    }

    async fn ahead_behind(&self, remote: &str) -> Result<Option<(usize, usize)>> {
        let state = self.state.borrow();
        if !state.upstream.contains(remote) {
            return Ok(None);
        }
        Ok(Some(state.diffs.get(remote).copied().unwrap_or((0, 0))))
    }

    async fn pull(&self, remote: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.pulls.push(remote.to_string());
        if state.failing.contains(remote) {
            return Err(Error::Git(format!("could not read from remote '{remote}'")));
        }
        if let Some(diff) = state.diffs.get_mut(remote) {
            diff.1 = 0;
        }
        Ok(())
    }
}

/// History record at a fixed timestamp; log order is what matters.
#[allow(dead_code)]
pub fn record(repo: &Path, code: &str, title: &str) -> HistoryRecord {
    HistoryRecord {
        timestamp: Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
        repo_path: repo.to_path_buf(),
        emoji_code: code.to_string(),
        scope: None,
        title: title.to_string(),
        description: None,
        files: BTreeSet::new(),
    }
}

#[allow(dead_code)]
pub fn record_with_scope(repo: &Path, code: &str, scope: &str, title: &str) -> HistoryRecord {
    HistoryRecord {
        scope: Some(scope.to_string()),
        ..record(repo, code, title)
    }
}

#[allow(dead_code)]
pub fn repo(name: &str) -> PathBuf {
    PathBuf::from(format!("/work/{name}"))
}
