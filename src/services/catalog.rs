// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{EmojiEntry, EmojiSet, conventional_entries};
use crate::error::{Error, Result};

const CUSTOM_TEMPLATE: &str = r#"# Custom emojis for commoji.
#
# Entries are merged after the built-in set: an entry whose `code` already
# exists replaces it in place, new codes are appended.
#
# [[emoji]]
# code = "experiment"
# glyph = "🧫"
# description = "Experimental code"
#
# [[emoji]]
# code = "utils"
# glyph = "💪"
# description = "Add utility functions"
"#;

#[derive(Debug, Deserialize)]
struct CustomFile {
    #[serde(default)]
    emoji: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    code: Option<String>,
    glyph: Option<String>,
    description: Option<String>,
}

/// The active, merged emoji set.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    entries: Vec<EmojiEntry>,
}

impl EmojiCatalog {
    /// Built-in `set`, then the custom source at `custom` if it exists.
    ///
    /// A broken custom source is logged and ignored; the base set still loads.
    pub fn resolve(set: EmojiSet, custom: Option<&Path>) -> Self {
        let overrides = match custom {
            Some(path) => Self::load_custom(path).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring custom emojis");
                Vec::new()
            }),
            None => Vec::new(),
        };
        let catalog = Self::from_parts(set.entries(), overrides);
        debug!(set = %set, count = catalog.len(), "emoji catalog resolved");
        catalog
    }

    /// Conventional types used by simple commits.
    pub fn conventional() -> Self {
        Self {
            entries: conventional_entries(),
        }
    }

    pub fn from_parts(base: Vec<EmojiEntry>, overrides: Vec<EmojiEntry>) -> Self {
        Self {
            entries: merge(base, overrides),
        }
    }

    /// Read a custom source. A missing file is an empty source.
    pub fn load_custom(path: &Path) -> Result<Vec<EmojiEntry>> {
        let origin = path.display().to_string();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::CatalogLoad {
                    origin,
                    reason: e.to_string(),
                });
            }
        };
        parse_custom(&origin, &text)
    }

    /// Write the commented template unless the file exists. Returns whether it wrote.
    pub fn write_template(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, CUSTOM_TEMPLATE)?;
        Ok(true)
    }

    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    pub fn get(&self, code: &str) -> Option<&EmojiEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Later-wins merge by code. Overridden entries keep their original position.
pub fn merge(base: Vec<EmojiEntry>, overrides: Vec<EmojiEntry>) -> Vec<EmojiEntry> {
    let mut merged: Vec<EmojiEntry> = Vec::with_capacity(base.len() + overrides.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in base.into_iter().chain(overrides) {
        match index.get(&entry.code) {
            Some(&pos) => merged[pos] = entry,
            None => {
                index.insert(entry.code.clone(), merged.len());
                merged.push(entry);
            }
        }
    }
    merged
}

/// Parse a `[[emoji]]` TOML document. Any malformed entry rejects the whole source.
pub fn parse_custom(origin: &str, text: &str) -> Result<Vec<EmojiEntry>> {
    let load_error = |reason: String| Error::CatalogLoad {
        origin: origin.to_string(),
        reason,
    };

    let file: CustomFile = toml::from_str(text).map_err(|e| load_error(e.to_string()))?;

    file.emoji
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let code = raw
                .code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .ok_or_else(|| load_error(format!("entry {} has no `code`", i + 1)))?;
            let glyph = raw
                .glyph
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .ok_or_else(|| load_error(format!("entry {} ({code}) has no `glyph`", i + 1)))?;
            Ok(EmojiEntry {
                code,
                glyph,
                description: raw.description.unwrap_or_default().trim().to_string(),
            })
        })
        .collect()
}
