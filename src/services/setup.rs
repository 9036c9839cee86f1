// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;

use crate::config::{COMMIT_ARG_KEYS, CommitFlag, Config};
use crate::domain::EmojiSet;
use crate::error::{Error, Result};
use crate::services::prompt::{Answer, Prompter, TextRequest};

const TOGGLES: &[(&str, &str)] = &[
    ("skip_scope", "Skip commit scope"),
    ("skip_message", "Skip commit message"),
    ("capitalize_title", "Capitalize commit title"),
    (
        "enable_history",
        "Remember commit history for auto-complete and emoji sorting",
    ),
];

fn value<T>(answer: Answer<T>) -> Result<T> {
    match answer {
        Answer::Value(v) => Ok(v),
        Answer::Interrupted => Err(Error::UserAbort),
    }
}

/// Interactive edit of every config key, starting from `current`.
///
/// Booleans are toggled together, the emoji set is a single choice,
/// default flags a multi-select, and each default argument a text field
/// where blank means "ask when needed".
pub fn edit_config(prompter: &mut dyn Prompter, current: &Config) -> Result<Config> {
    let mut config = current.clone();

    let labels: Vec<String> = TOGGLES.iter().map(|(_, l)| l.to_string()).collect();
    let defaults = [
        config.skip_scope,
        config.skip_message,
        config.capitalize_title,
        config.enable_history,
    ];
    let picked = value(prompter.multi_select("Configure commoji", &labels, &defaults)?)?;
    let on = |key: &str| {
        TOGGLES
            .iter()
            .position(|(k, _)| *k == key)
            .is_some_and(|i| picked.contains(&i))
    };
    config.skip_scope = on("skip_scope");
    config.skip_message = on("skip_message");
    config.capitalize_title = on("capitalize_title");
    config.enable_history = on("enable_history");

    let sets: Vec<String> = EmojiSet::ALL.iter().map(ToString::to_string).collect();
    let current_set = EmojiSet::ALL
        .iter()
        .position(|s| *s == config.emoji_set)
        .unwrap_or(0);
    let set = value(prompter.select("Emoji set to use for commits", &sets, current_set)?)?;
    config.emoji_set = EmojiSet::ALL[set];

    let flags: Vec<String> = CommitFlag::ALL.iter().map(ToString::to_string).collect();
    let flag_defaults: Vec<bool> = CommitFlag::ALL
        .iter()
        .map(|f| config.default_commit_flags.contains(f))
        .collect();
    let picked = value(prompter.multi_select(
        "Default commit flags used in `commoji start`",
        &flags,
        &flag_defaults,
    )?)?;
    config.default_commit_flags = picked.into_iter().map(|i| CommitFlag::ALL[i]).collect();

    let mut args = BTreeMap::new();
    for (key, help) in COMMIT_ARG_KEYS {
        let prompt = format!("{key} ({help})");
        let initial = config.default_commit_args.get(*key).map(String::as_str);
        let answer = value(prompter.text(TextRequest {
            prompt: &prompt,
            mandatory: false,
            suggestions: &[],
            initial,
        })?)?;
        args.insert(key.to_string(), answer.trim().to_string());
    }
    config.default_commit_args = args;

    Ok(config)
}
