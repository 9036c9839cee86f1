// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;

use commoji::services::catalog::parse_custom;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(entries) = parse_custom("fuzz", text) {
            for entry in &entries {
                assert!(!entry.code.is_empty() && !entry.glyph.is_empty());
            }
        }
    }
});
