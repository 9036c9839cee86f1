// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod catalog;
pub mod git;
pub mod history;
pub mod orchestrator;
pub mod prompt;
pub mod setup;
pub mod wizard;
