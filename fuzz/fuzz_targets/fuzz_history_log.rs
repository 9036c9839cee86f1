// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;

use commoji::services::history::HistoryStore;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(parsed) = HistoryStore::parse_log(text) {
            for record in &parsed.records {
                assert!(record.validate().is_ok());
            }
        }
    }
});
