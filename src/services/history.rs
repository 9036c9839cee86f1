// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::write_atomic;
use crate::domain::{EmojiEntry, HistoryField, HistoryRecord};
use crate::error::{Error, Result};

/// Records read from a history log.
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub records: Vec<HistoryRecord>,
    /// The last line was unreadable and has been dropped
    pub dropped_tail: bool,
}

/// Where the log stands relative to what is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogState {
    Clean,
    /// Valid records followed by a truncated line; rewritten on next append
    TruncatedTail,
    /// Unusable log; nothing is written to it this session
    Corrupt,
}

/// Append-only commit history used for ranking and autocomplete.
#[derive(Debug)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    enabled: bool,
    records: Vec<HistoryRecord>,
    state: LogState,
}

impl HistoryStore {
    /// Open the log at `path`. Corruption degrades to an empty history with a warning.
    pub fn open(path: impl Into<PathBuf>, enabled: bool) -> Self {
        let path = path.into();
        if !enabled {
            debug!("history disabled");
            return Self::disabled();
        }

        let (records, state) = match Self::read_file(&path) {
            Ok(parsed) if parsed.dropped_tail => {
                warn!(
                    path = %path.display(),
                    kept = parsed.records.len(),
                    "history log ends with a truncated record; dropping it"
                );
                (parsed.records, LogState::TruncatedTail)
            }
            Ok(parsed) => (parsed.records, LogState::Clean),
            Err(e) => {
                warn!(error = %e, "history unavailable for this session");
                (Vec::new(), LogState::Corrupt)
            }
        };
        debug!(path = %path.display(), count = records.len(), "history loaded");

        Self {
            path: Some(path),
            enabled: true,
            records,
            state,
        }
    }

    /// History switched off: appends are dropped, queries return nothing.
    pub fn disabled() -> Self {
        Self {
            path: None,
            enabled: false,
            records: Vec::new(),
            state: LogState::Clean,
        }
    }

    /// Enabled history that never touches the disk.
    pub fn in_memory(records: Vec<HistoryRecord>) -> Self {
        Self {
            path: None,
            enabled: true,
            records,
            state: LogState::Clean,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    fn read_file(path: &Path) -> Result<ParsedLog> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ParsedLog::default()),
            Err(e) => {
                return Err(Error::HistoryCorruption {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };
        Self::parse_log(&text).map_err(|(line, reason)| Error::HistoryCorruption {
            path: path.to_path_buf(),
            reason: format!("line {line}: {reason}"),
        })
    }

    /// Parse JSON Lines. Only the final non-blank line may be invalid; it is dropped.
    /// Anything invalid before it is reported as `(line number, reason)`.
    pub fn parse_log(text: &str) -> std::result::Result<ParsedLog, (usize, String)> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .collect();

        let mut parsed = ParsedLog::default();
        for (pos, (idx, line)) in lines.iter().enumerate() {
            let record = serde_json::from_str::<HistoryRecord>(line)
                .map_err(|e| e.to_string())
                .and_then(|r| r.validate().map(|()| r));

            match record {
                Ok(record) => parsed.records.push(record),
                Err(_) if pos + 1 == lines.len() => parsed.dropped_tail = true,
                Err(reason) => return Err((idx + 1, reason)),
            }
        }
        Ok(parsed)
    }

    /// Add a record. Earlier records are never touched.
    pub fn append(&mut self, record: HistoryRecord) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Some(path) = self.path.clone() {
            match self.state {
                LogState::Corrupt => {
                    debug!("history log corrupt; keeping record in memory only");
                }
                LogState::TruncatedTail => {
                    self.rewrite(&path)?;
                    self.state = LogState::Clean;
                    Self::write_line(&path, &record)?;
                }
                LogState::Clean => Self::write_line(&path, &record)?,
            }
        }

        self.records.push(record);
        Ok(())
    }

    fn rewrite(&self, path: &Path) -> Result<()> {
        let mut content = String::new();
        for record in &self.records {
            content.push_str(&Self::encode(record)?);
            content.push('\n');
        }
        let dir = path.parent().unwrap_or(Path::new("."));
        write_atomic(dir, path, content.as_bytes())
    }

    fn write_line(path: &Path, record: &HistoryRecord) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        // A last record written without its newline must stay on its own line.
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }
        writeln!(file, "{}", Self::encode(record)?)?;
        Ok(())
    }

    fn encode(record: &HistoryRecord) -> Result<String> {
        serde_json::to_string(record).map_err(|e| Error::Io(e.into()))
    }

    /// Records of `repo` if it has any, otherwise all of them, oldest first.
    fn scoped(&self, repo: Option<&Path>) -> Vec<&HistoryRecord> {
        if let Some(repo) = repo {
            let local: Vec<&HistoryRecord> =
                self.records.iter().filter(|r| r.repo_path == repo).collect();
            if !local.is_empty() {
                return local;
            }
        }
        self.records.iter().collect()
    }

    /// Catalog reordered by usage: most used first, ties to the most recent,
    /// never-used entries after in catalog order.
    pub fn ranked_emojis(&self, catalog: &[EmojiEntry], repo: Option<&Path>) -> Vec<EmojiEntry> {
        if !self.enabled {
            return catalog.to_vec();
        }

        // code -> (count, position of last use)
        let mut usage: HashMap<&str, (usize, usize)> = HashMap::new();
        for (pos, record) in self.scoped(repo).into_iter().enumerate() {
            let entry = usage.entry(record.emoji_code.as_str()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 = pos;
        }

        let mut ranked: Vec<(usize, &EmojiEntry)> = catalog
            .iter()
            .enumerate()
            .collect();
        ranked.sort_by(|(ia, a), (ib, b)| {
            let ua = usage.get(a.code.as_str());
            let ub = usage.get(b.code.as_str());
            match (ua, ub) {
                (Some(&(ca, la)), Some(&(cb, lb))) => cb.cmp(&ca).then(lb.cmp(&la)),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => ia.cmp(ib),
            }
        });
        ranked.into_iter().map(|(_, e)| e.clone()).collect()
    }

    /// Distinct past values of `field`, most recent first.
    pub fn suggestions(&self, field: HistoryField, repo: Option<&Path>) -> Vec<String> {
        if !self.enabled {
            return Vec::new();
        }
        let mut seen: Vec<String> = Vec::new();
        for record in self.scoped(repo).into_iter().rev() {
            if let Some(value) = record.field(field) {
                if !seen.iter().any(|s| s == value) {
                    seen.push(value.to_string());
                }
            }
        }
        seen
    }
}
