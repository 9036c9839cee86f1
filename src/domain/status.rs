// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Paths grouped by their state in the working copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStatus {
    pub staged: Vec<String>,
    pub unstaged: Vec<String>,
    pub untracked: Vec<String>,
}

impl FileStatus {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.untracked.is_empty()
    }

    /// Files that could still be staged, unstaged first then untracked.
    pub fn stageable(&self) -> Vec<String> {
        let mut files = Vec::with_capacity(self.unstaged.len() + self.untracked.len());
        for path in self.unstaged.iter().chain(&self.untracked) {
            if !files.contains(path) {
                files.push(path.clone());
            }
        }
        files
    }
}
