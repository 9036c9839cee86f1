// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Docs,
    Test,
    Chore,
    Style,
    Perf,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    pub const ALL: &'static [&'static str] = &[
        "feat", "fix", "refactor", "docs", "test", "chore", "style", "perf", "build", "ci",
        "revert",
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "feat" => Some(Self::Feat),
            "fix" => Some(Self::Fix),
            "refactor" => Some(Self::Refactor),
            "docs" => Some(Self::Docs),
            "test" => Some(Self::Test),
            "chore" => Some(Self::Chore),
            "style" => Some(Self::Style),
            "perf" => Some(Self::Perf),
            "build" => Some(Self::Build),
            "ci" => Some(Self::Ci),
            "revert" => Some(Self::Revert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Style => "style",
            Self::Perf => "perf",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Revert => "revert",
        }
    }

    /// Glyph used in front of simple commits.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Feat => "✨",
            Self::Fix => "🐛",
            Self::Refactor => "♻️",
            Self::Docs => "📝",
            Self::Test => "✅",
            Self::Chore => "🔧",
            Self::Style => "🎨",
            Self::Perf => "⚡️",
            Self::Build => "📦️",
            Self::Ci => "👷",
            Self::Revert => "⏪️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Feat => "A new feature",
            Self::Fix => "A bug fix",
            Self::Refactor => "A code change that neither fixes a bug nor adds a feature",
            Self::Docs => "Documentation only changes",
            Self::Test => "Adding missing tests or correcting existing tests",
            Self::Chore => "Other changes that don't modify src or test files",
            Self::Style => "Changes that do not affect the meaning of the code",
            Self::Perf => "A code change that improves performance",
            Self::Build => "Changes that affect the build system or external dependencies",
            Self::Ci => "Changes to CI configuration files and scripts",
            Self::Revert => "Reverts a previous commit",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
