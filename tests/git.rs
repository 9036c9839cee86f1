// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::PathBuf;

use commoji::services::git::repo_relative;

fn work_tree() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("f.txt"), "x").unwrap();
    fs::write(root.join("top.txt"), "x").unwrap();
    (dir, root)
}

// ─── Path resolution ─────────────────────────────────────────────────────────

#[test]
fn file_in_subdirectory_is_made_repo_relative() {
    let (_dir, root) = work_tree();
    assert_eq!(repo_relative(&root, &root.join("sub"), "f.txt"), "sub/f.txt");
}

#[test]
fn parent_references_are_resolved() {
    let (_dir, root) = work_tree();
    assert_eq!(repo_relative(&root, &root.join("sub"), "../top.txt"), "top.txt");
}

#[test]
fn deleted_file_resolves_through_its_directory() {
    let (_dir, root) = work_tree();
    assert_eq!(
        repo_relative(&root, &root.join("sub"), "gone.txt"),
        "sub/gone.txt"
    );
}

#[test]
fn paths_from_the_root_are_unchanged() {
    let (_dir, root) = work_tree();
    assert_eq!(repo_relative(&root, &root, "top.txt"), "top.txt");
    assert_eq!(repo_relative(&root, &root, "."), ".");
}

#[test]
fn path_outside_the_work_tree_is_left_for_git() {
    let (_dir, root) = work_tree();
    let other = tempfile::tempdir().unwrap();
    fs::write(other.path().join("o.txt"), "x").unwrap();
    let outside = other.path().join("o.txt").to_string_lossy().into_owned();
    assert_eq!(repo_relative(&root, &root, &outside), outside);
}
