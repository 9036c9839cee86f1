// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::ErrorKind;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Confirm, FuzzySelect, History, Input, MultiSelect, Select};

use crate::error::{Error, Result};

/// Completions offered for one text prompt.
const MAX_SUGGESTIONS: usize = 10;

/// A prompt either yields a value or is interrupted (Ctrl+C / Esc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Interrupted,
}

#[derive(Debug, Clone, Default)]
pub struct TextRequest<'a> {
    pub prompt: &'a str,
    /// Refuse empty input at the widget level
    pub mandatory: bool,
    /// Past values, most recent first
    pub suggestions: &'a [String],
    pub initial: Option<&'a str>,
}

/// Terminal interaction layer.
pub trait Prompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Answer<usize>>;

    /// Type-to-filter single select for long lists.
    fn fuzzy_select(&mut self, prompt: &str, items: &[String]) -> Result<Answer<usize>>;

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Answer<Vec<usize>>>;

    fn text(&mut self, request: TextRequest<'_>) -> Result<Answer<String>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Answer<bool>>;
}

/// `dialoguer` widgets on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

/// Ctrl+C inside a widget surfaces as an interrupted read.
fn interrupted<T>(result: std::result::Result<Option<T>, dialoguer::Error>) -> Result<Answer<T>> {
    match result {
        Ok(Some(value)) => Ok(Answer::Value(value)),
        Ok(None) => Ok(Answer::Interrupted),
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
            Ok(Answer::Interrupted)
        }
        Err(e) => Err(Error::from(e)),
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Answer<usize>> {
        interrupted(
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact_opt(),
        )
    }

    fn fuzzy_select(&mut self, prompt: &str, items: &[String]) -> Result<Answer<usize>> {
        interrupted(
            FuzzySelect::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .max_length(15)
                .interact_opt(),
        )
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Answer<Vec<usize>>> {
        interrupted(
            MultiSelect::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .defaults(defaults)
                .interact_opt(),
        )
    }

    fn text(&mut self, request: TextRequest<'_>) -> Result<Answer<String>> {
        let completer = Suggestions::new(request.suggestions);
        let mut history = Suggestions::new(request.suggestions);

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(request.prompt)
            .allow_empty(!request.mandatory)
            .completion_with(&completer)
            .history_with(&mut history);
        if let Some(initial) = request.initial {
            input = input.with_initial_text(initial);
        }

        interrupted(input.interact_text().map(Some)).map(|answer| match answer {
            Answer::Value(s) => Answer::Value(s.trim().to_string()),
            Answer::Interrupted => Answer::Interrupted,
        })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Answer<bool>> {
        interrupted(
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact_opt(),
        )
    }
}

/// Past values fed to a text prompt as tab-completion and up/down history.
pub struct Suggestions {
    values: Vec<String>,
}

impl Suggestions {
    pub fn new(values: &[String]) -> Self {
        Self {
            values: values.iter().take(MAX_SUGGESTIONS).cloned().collect(),
        }
    }

    /// Most recent value starting with `input`, ignoring case.
    pub fn complete(&self, input: &str) -> Option<String> {
        let needle = input.to_lowercase();
        self.values
            .iter()
            .find(|v| v.to_lowercase().starts_with(&needle) && v.as_str() != input)
            .cloned()
    }
}

impl Completion for Suggestions {
    fn get(&self, input: &str) -> Option<String> {
        self.complete(input)
    }
}

impl History<String> for Suggestions {
    fn read(&self, pos: usize) -> Option<String> {
        self.values.get(pos).cloned()
    }

    fn write(&mut self, _val: &String) {}
}
