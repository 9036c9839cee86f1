// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commoji::domain::{CommitType, conventional_entries};

#[test]
fn all_matches_enum_variants() {
    assert_eq!(CommitType::ALL.len(), 11);
    for s in CommitType::ALL {
        assert!(
            CommitType::parse(s).is_some(),
            "ALL entry {:?} has no matching parse result",
            s
        );
    }
}

#[test]
fn parse_roundtrips() {
    for s in CommitType::ALL {
        let ct = CommitType::parse(s).unwrap();
        assert_eq!(ct.as_str(), *s, "roundtrip failed for {:?}", s);
    }
}

#[test]
fn parse_rejects_invalid() {
    for invalid in &["yolo", "", "FEAT"] {
        assert!(
            CommitType::parse(invalid).is_none(),
            "expected None for {:?}, but got Some",
            invalid
        );
    }
}

#[test]
fn display_matches_as_str() {
    assert_eq!(format!("{}", CommitType::Feat), "feat");
    for s in CommitType::ALL {
        let ct = CommitType::parse(s).unwrap();
        assert_eq!(ct.to_string(), ct.as_str());
    }
}

#[test]
fn every_type_has_glyph_and_description() {
    for s in CommitType::ALL {
        let ct = CommitType::parse(s).unwrap();
        assert!(!ct.glyph().is_empty(), "{s} has no glyph");
        assert!(!ct.description().is_empty(), "{s} has no description");
    }
    assert_eq!(CommitType::Feat.glyph(), "✨");
    assert_eq!(CommitType::Fix.glyph(), "🐛");
}

#[test]
fn conventional_entries_use_type_names_as_codes() {
    let entries = conventional_entries();
    assert_eq!(entries.len(), CommitType::ALL.len());
    for (entry, name) in entries.iter().zip(CommitType::ALL) {
        assert_eq!(entry.code, *name);
    }
}
