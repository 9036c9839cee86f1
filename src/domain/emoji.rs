// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use super::CommitType;

/// A change-type marker. Identity is `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub code: String,
    pub glyph: String,
    #[serde(default)]
    pub description: String,
}

impl EmojiEntry {
    pub fn new(code: &str, glyph: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            glyph: glyph.to_string(),
            description: description.to_string(),
        }
    }

    /// Label shown in the picker: glyph, code and description.
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            format!("{} {}", self.glyph, self.code)
        } else {
            format!("{} {:<28} {}", self.glyph, self.code, self.description)
        }
    }
}

/// Built-in emoji sets selectable from the config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmojiSet {
    #[default]
    #[serde(rename = "gitmoji")]
    Gitmoji,
    #[serde(rename = "ai-devmojis")]
    AiDevmojis,
}

impl EmojiSet {
    pub const ALL: &'static [EmojiSet] = &[EmojiSet::Gitmoji, EmojiSet::AiDevmojis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gitmoji => "gitmoji",
            Self::AiDevmojis => "ai-devmojis",
        }
    }

    pub fn entries(&self) -> Vec<EmojiEntry> {
        let table = match self {
            Self::Gitmoji => GITMOJIS,
            Self::AiDevmojis => AI_DEVMOJIS,
        };
        table
            .iter()
            .map(|(code, glyph, description)| EmojiEntry::new(code, glyph, description))
            .collect()
    }
}

impl std::fmt::Display for EmojiSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entries backing simple commits: one per conventional type, code = type name.
pub fn conventional_entries() -> Vec<EmojiEntry> {
    CommitType::ALL
        .iter()
        .filter_map(|s| CommitType::parse(s))
        .map(|t| EmojiEntry::new(t.as_str(), t.glyph(), t.description()))
        .collect()
}

// https://gitmoji.dev
const GITMOJIS: &[(&str, &str, &str)] = &[
    ("art", "🎨", "Improve structure / format of the code"),
    ("zap", "⚡️", "Improve performance"),
    ("fire", "🔥", "Remove code or files"),
    ("bug", "🐛", "Fix a bug"),
    ("ambulance", "🚑️", "Critical hotfix"),
    ("sparkles", "✨", "Introduce new features"),
    ("memo", "📝", "Add or update documentation"),
    ("rocket", "🚀", "Deploy stuff"),
    ("lipstick", "💄", "Add or update the UI and style files"),
    ("tada", "🎉", "Begin a project"),
    ("white-check-mark", "✅", "Add, update, or pass tests"),
    ("lock", "🔒️", "Fix security or privacy issues"),
    ("closed-lock-with-key", "🔐", "Add or update secrets"),
    ("bookmark", "🔖", "Release / Version tags"),
    ("rotating-light", "🚨", "Fix compiler / linter warnings"),
    ("construction", "🚧", "Work in progress"),
    ("green-heart", "💚", "Fix CI Build"),
    ("arrow-down", "⬇️", "Downgrade dependencies"),
    ("arrow-up", "⬆️", "Upgrade dependencies"),
    ("pushpin", "📌", "Pin dependencies to specific versions"),
    ("construction-worker", "👷", "Add or update CI build system"),
    ("chart-with-upwards-trend", "📈", "Add or update analytics or track code"),
    ("recycle", "♻️", "Refactor code"),
    ("heavy-plus-sign", "➕", "Add a dependency"),
    ("heavy-minus-sign", "➖", "Remove a dependency"),
    ("wrench", "🔧", "Add or update configuration files"),
    ("hammer", "🔨", "Add or update development scripts"),
    ("globe-with-meridians", "🌐", "Internationalization and localization"),
    ("pencil2", "✏️", "Fix typos"),
    ("poop", "💩", "Write bad code that needs to be improved"),
    ("rewind", "⏪️", "Revert changes"),
    ("twisted-rightwards-arrows", "🔀", "Merge branches"),
    ("package", "📦️", "Add or update compiled files or packages"),
    ("alien", "👽️", "Update code due to external API changes"),
    ("truck", "🚚", "Move or rename resources (e.g.: files, paths, routes)"),
    ("page-facing-up", "📄", "Add or update license"),
    ("boom", "💥", "Introduce breaking changes"),
    ("bento", "🍱", "Add or update assets"),
    ("wheelchair", "♿️", "Improve accessibility"),
    ("bulb", "💡", "Add or update comments in source code"),
    ("beers", "🍻", "Write code drunkenly"),
    ("speech-balloon", "💬", "Add or update text and literals"),
    ("card-file-box", "🗃️", "Perform database related changes"),
    ("loud-sound", "🔊", "Add or update logs"),
    ("mute", "🔇", "Remove logs"),
    ("busts-in-silhouette", "👥", "Add or update contributor(s)"),
    ("children-crossing", "🚸", "Improve user experience / usability"),
    ("building-construction", "🏗️", "Make architectural changes"),
    ("iphone", "📱", "Work on responsive design"),
    ("clown-face", "🤡", "Mock things"),
    ("egg", "🥚", "Add or update an easter egg"),
    ("see-no-evil", "🙈", "Add or update a .gitignore file"),
    ("camera-flash", "📸", "Add or update snapshots"),
    ("alembic", "⚗️", "Perform experiments"),
    ("mag", "🔍️", "Improve SEO"),
    ("label", "🏷️", "Add or update types"),
    ("seedling", "🌱", "Add or update seed files"),
    ("triangular-flag-on-post", "🚩", "Add, update, or remove feature flags"),
    ("goal-net", "🥅", "Catch errors"),
    ("dizzy", "💫", "Add or update animations and transitions"),
    ("wastebasket", "🗑️", "Deprecate code that needs to be cleaned up"),
    ("passport-control", "🛂", "Work on code related to authorization, roles and permissions"),
    ("adhesive-bandage", "🩹", "Simple fix for a non-critical issue"),
    ("monocle-face", "🧐", "Data exploration/inspection"),
    ("coffin", "⚰️", "Remove dead code"),
    ("test-tube", "🧪", "Add a failing test"),
    ("necktie", "👔", "Add or update business logic"),
    ("stethoscope", "🩺", "Add or update healthcheck"),
    ("bricks", "🧱", "Infrastructure related changes"),
    ("technologist", "🧑‍💻", "Improve developer experience"),
    ("money-with-wings", "💸", "Add sponsorships or money related infrastructure"),
    ("thread", "🧵", "Add or update code related to multithreading or concurrency"),
    ("safety-vest", "🦺", "Add or update code related to validation"),
    ("airplane", "✈️", "Improve offline support"),
];

// Tuned for machine-learning and AI projects.
const AI_DEVMOJIS: &[(&str, &str, &str)] = &[
    ("new-feature", "✨", "Introduce a new feature or capability"),
    ("bug", "🐛", "Fix a bug"),
    ("model", "🧠", "Add or update a model architecture"),
    ("training", "🏋️", "Change training loops, schedules or optimizers"),
    ("data", "🗂️", "Add or update datasets, loaders or preprocessing"),
    ("augment", "🎲", "Add or update data augmentation"),
    ("experiment", "🧪", "Run or record an experiment"),
    ("metrics", "📊", "Add or update evaluation metrics"),
    ("benchmark", "🎯", "Add or update benchmarks and evaluation runs"),
    ("hyperparams", "🎛️", "Tune hyperparameters or experiment configs"),
    ("checkpoint", "💾", "Save, load or migrate checkpoints"),
    ("inference", "🔮", "Add or update inference and serving code"),
    ("prompt", "💬", "Add or update prompts and templates"),
    ("agent", "🤖", "Add or update agents and tool use"),
    ("visualize", "📈", "Add or update plots and visualizations"),
    ("gpu", "⚡️", "Improve performance or hardware utilization"),
    ("distributed", "🕸️", "Change distributed or multi-device code"),
    ("notebook", "📓", "Add or update notebooks"),
    ("refactor", "♻️", "Refactor code"),
    ("docs", "📝", "Add or update documentation"),
    ("tests", "✅", "Add, update, or pass tests"),
    ("deps", "📦️", "Add, remove or update dependencies"),
    ("config", "🔧", "Add or update configuration files"),
    ("cleanup", "🔥", "Remove code, files or stale experiments"),
    ("wip", "🚧", "Work in progress"),
    ("release", "🔖", "Release / Version tags"),
];
