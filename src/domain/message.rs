// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use super::EmojiEntry;

/// Everything the wizard collected for one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    /// Files picked in the file-selection step (empty when it did not run)
    pub files: Vec<String>,
    pub emoji: EmojiEntry,
    /// Conventional type, only set for simple commits
    pub kind: Option<String>,
    pub scope: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl CommitDraft {
    /// Title as it will appear in the commit header.
    pub fn final_title(&self, capitalize: bool) -> String {
        let title = self.title.trim();
        if capitalize {
            capitalize_first(title)
        } else {
            title.to_string()
        }
    }

    pub fn message(&self, capitalize: bool) -> String {
        format_message(
            &self.emoji.glyph,
            self.kind.as_deref(),
            self.scope.as_deref(),
            &self.final_title(capitalize),
            self.description.as_deref(),
        )
    }
}

/// Render `<glyph> <type>[(<scope>)]: <title>` plus an optional body paragraph.
///
/// Without a type the header becomes `<glyph> (<scope>): <title>`, or just
/// `<glyph> <title>` when there is no scope either.
pub fn format_message(
    glyph: &str,
    kind: Option<&str>,
    scope: Option<&str>,
    title: &str,
    description: Option<&str>,
) -> String {
    let kind = kind.map(str::trim).filter(|k| !k.is_empty());
    let scope = scope.map(str::trim).filter(|s| !s.is_empty());

    let mut header = glyph.trim().to_string();
    match (kind, scope) {
        (Some(k), Some(s)) => header.push_str(&format!(" {k}({s}):")),
        (Some(k), None) => header.push_str(&format!(" {k}:")),
        (None, Some(s)) => header.push_str(&format!(" ({s}):")),
        (None, None) => {}
    }
    header.push(' ');
    header.push_str(title.trim());

    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(body) => format!("{header}\n\n{body}"),
        None => header,
    }
}

/// Upper-case the first character only, so acronyms stay intact.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
