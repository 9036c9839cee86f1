// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod commit;
mod emoji;
mod history;
mod message;
mod status;

pub use commit::*;
pub use emoji::*;
pub use history::*;
pub use message::*;
pub use status::*;
