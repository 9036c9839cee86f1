// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Step-by-step collection of a commit message.
//!
//! The wizard is a linear pipeline with a single cursor. Completing a step
//! moves forward; an interrupt moves back to the previous step and clears
//! its value. A second interrupt in a row, or one on the first step, aborts.

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::domain::{CommitDraft, EmojiEntry, HistoryField};
use crate::error::{Error, Result};
use crate::services::history::HistoryStore;
use crate::services::prompt::{Answer, Prompter, TextRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FileSelection,
    EmojiSelection,
    ScopeEntry,
    TitleEntry,
    DescriptionEntry,
}

impl Step {
    pub const PIPELINE: [Step; 5] = [
        Step::FileSelection,
        Step::EmojiSelection,
        Step::ScopeEntry,
        Step::TitleEntry,
        Step::DescriptionEntry,
    ];

    fn applies(&self, config: &Config, input: &WizardInput<'_>) -> bool {
        match self {
            Self::FileSelection => !input.files.is_empty(),
            Self::EmojiSelection | Self::TitleEntry => true,
            Self::ScopeEntry => !config.skip_scope,
            Self::DescriptionEntry => !config.skip_message,
        }
    }

    /// Ask for this step's value once.
    pub fn run(
        &self,
        ctx: &StepContext<'_>,
        prompter: &mut dyn Prompter,
    ) -> Result<Answer<StepValue>> {
        match self {
            Self::FileSelection => {
                let defaults = vec![true; ctx.input.files.len()];
                let answer = prompter.multi_select(
                    "Select files to add for the commit",
                    &ctx.input.files,
                    &defaults,
                )?;
                if let Answer::Value(picked) = &answer {
                    if picked.is_empty() && !ctx.input.staged {
                        return Err(Error::NoFilesSelected);
                    }
                }
                Ok(map_answer(answer, |picked| {
                    StepValue::Files(
                        picked
                            .into_iter()
                            .map(|i| ctx.input.files[i].clone())
                            .collect(),
                    )
                }))
            }
            Self::EmojiSelection => {
                if ctx.input.emojis.is_empty() {
                    return Err(Error::Config("No emojis available to choose from".into()));
                }
                let labels: Vec<String> =
                    ctx.input.emojis.iter().map(EmojiEntry::label).collect();
                let prompt = if ctx.input.simple {
                    "Select conventional type"
                } else {
                    "Select gitmoji"
                };
                let answer = prompter.fuzzy_select(prompt, &labels)?;
                Ok(map_answer(answer, |i| StepValue::Emoji(ctx.input.emojis[i].clone())))
            }
            Self::ScopeEntry => {
                ctx.ask_text(prompter, "Scope (optional)", HistoryField::Scope, false)
            }
            Self::TitleEntry => loop {
                match ctx.ask_text(prompter, "Commit title", HistoryField::Title, true)? {
                    Answer::Value(StepValue::Text(t)) if t.is_empty() => {
                        debug!("empty title, asking again");
                    }
                    other => break Ok(other),
                }
            },
            Self::DescriptionEntry => {
                ctx.ask_text(
                    prompter,
                    "Commit details (optional)",
                    HistoryField::Description,
                    false,
                )
            }
        }
    }
}

fn map_answer<T, U>(answer: Answer<T>, f: impl FnOnce(T) -> U) -> Answer<U> {
    match answer {
        Answer::Value(v) => Answer::Value(f(v)),
        Answer::Interrupted => Answer::Interrupted,
    }
}

/// Value captured by a completed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue {
    Files(Vec<String>),
    Emoji(EmojiEntry),
    Text(String),
}

/// What an interrupt did to the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    SteppedBack(Step),
    Abort,
}

/// One commit attempt: applicable steps, captured values, and the cursor.
#[derive(Debug, Clone)]
pub struct WizardState {
    steps: Vec<Step>,
    completed: Vec<(Step, StepValue)>,
    awaiting_second_interrupt: bool,
}

impl WizardState {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            completed: Vec::new(),
            awaiting_second_interrupt: false,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step under the cursor, `None` once every step is done.
    pub fn current(&self) -> Option<Step> {
        self.steps.get(self.completed.len()).copied()
    }

    pub fn awaiting_second_interrupt(&self) -> bool {
        self.awaiting_second_interrupt
    }

    pub fn value(&self, step: Step) -> Option<&StepValue> {
        self.completed
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, v)| v)
    }

    pub fn complete(&mut self, value: StepValue) {
        if let Some(step) = self.current() {
            self.completed.push((step, value));
            self.awaiting_second_interrupt = false;
        }
    }

    /// Go back one step, discarding its value, or abort.
    pub fn interrupt(&mut self) -> Transition {
        if self.awaiting_second_interrupt {
            return Transition::Abort;
        }
        match self.completed.pop() {
            Some((step, _)) => {
                self.awaiting_second_interrupt = true;
                Transition::SteppedBack(step)
            }
            None => Transition::Abort,
        }
    }

    fn text(&self, step: Step) -> Option<String> {
        match self.value(step) {
            Some(StepValue::Text(t)) if !t.is_empty() => Some(t.clone()),
            _ => None,
        }
    }

    /// Assemble the draft once every step is done.
    pub fn into_draft(self, simple: bool) -> Result<CommitDraft> {
        let emoji = match self.value(Step::EmojiSelection) {
            Some(StepValue::Emoji(e)) => e.clone(),
            _ => return Err(Error::Config("Wizard finished without an emoji".into())),
        };
        let title = self
            .text(Step::TitleEntry)
            .ok_or_else(|| Error::Config("Wizard finished without a title".into()))?;
        let files = match self.value(Step::FileSelection) {
            Some(StepValue::Files(f)) => f.clone(),
            _ => Vec::new(),
        };

        Ok(CommitDraft {
            files,
            kind: simple.then(|| emoji.code.clone()),
            emoji,
            scope: self.text(Step::ScopeEntry),
            title,
            description: self.text(Step::DescriptionEntry),
        })
    }
}

/// Inputs for one run of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct WizardInput<'a> {
    /// Candidates for file selection; the step is skipped when empty
    pub files: Vec<String>,
    /// Emoji choices, already in presentation order
    pub emojis: Vec<EmojiEntry>,
    /// Conventional type instead of gitmoji
    pub simple: bool,
    /// Files are already staged, so selecting none is allowed
    pub staged: bool,
    pub repo: Option<&'a Path>,
}

/// Everything a step may read while it runs.
pub struct StepContext<'a> {
    pub history: &'a HistoryStore,
    pub input: &'a WizardInput<'a>,
}

impl StepContext<'_> {
    fn ask_text(
        &self,
        prompter: &mut dyn Prompter,
        prompt: &str,
        field: HistoryField,
        mandatory: bool,
    ) -> Result<Answer<StepValue>> {
        let suggestions = self.history.suggestions(field, self.input.repo);
        let answer = prompter.text(TextRequest {
            prompt,
            mandatory,
            suggestions: &suggestions,
            initial: None,
        })?;
        Ok(map_answer(answer, |t| StepValue::Text(t.trim().to_string())))
    }
}

/// Drives a [`WizardState`] through the configured steps.
pub struct WizardEngine<'a> {
    config: &'a Config,
    history: &'a HistoryStore,
}

impl<'a> WizardEngine<'a> {
    pub fn new(config: &'a Config, history: &'a HistoryStore) -> Self {
        Self { config, history }
    }

    /// The fixed pipeline filtered by config and input.
    pub fn plan(&self, input: &WizardInput<'_>) -> Vec<Step> {
        Step::PIPELINE
            .into_iter()
            .filter(|step| step.applies(self.config, input))
            .collect()
    }

    /// Run every step until done. Aborting yields [`Error::UserAbort`].
    pub fn run(&self, prompter: &mut dyn Prompter, input: &WizardInput<'_>) -> Result<CommitDraft> {
        let mut state = WizardState::new(self.plan(input));
        let ctx = StepContext {
            history: self.history,
            input,
        };

        while let Some(step) = state.current() {
            match step.run(&ctx, prompter)? {
                Answer::Value(value) => {
                    debug!(?step, "step completed");
                    state.complete(value);
                }
                Answer::Interrupted => match state.interrupt() {
                    Transition::SteppedBack(previous) => {
                        debug!(from = ?step, to = ?previous, "stepping back");
                    }
                    Transition::Abort => {
                        debug!(?step, "wizard aborted");
                        return Err(Error::UserAbort);
                    }
                },
            }
        }

        state.into_draft(input.simple)
    }
}
