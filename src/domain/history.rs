// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One committed message, as written to the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub repo_path: PathBuf,
    pub emoji_code: String,
    #[serde(default)]
    pub scope: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: BTreeSet<String>,
}

impl HistoryRecord {
    /// Structural checks beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), String> {
        if self.emoji_code.trim().is_empty() {
            return Err("empty emoji_code".into());
        }
        if self.title.trim().is_empty() {
            return Err("empty title".into());
        }
        Ok(())
    }

    pub fn field(&self, field: HistoryField) -> Option<&str> {
        let value = match field {
            HistoryField::Scope => self.scope.as_deref(),
            HistoryField::Title => Some(self.title.as_str()),
            HistoryField::Description => self.description.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Free-text fields that get autocomplete suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryField {
    Scope,
    Title,
    Description,
}
