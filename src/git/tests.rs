// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GitError, PrepError};
use crate::git::query::ensure_checkout;
use crate::git::remote::parse_remote_names;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_parse_remote_names() {
    let listing = "origin\tgit@github.com:me/musl.git (fetch)\n\
                   origin\tgit@github.com:me/musl.git (push)\n\
                   upstream\thttps://github.com/bminor/musl (fetch)\n\
                   upstream\thttps://github.com/bminor/musl (push)\n";
    let names: Vec<_> = parse_remote_names(listing).into_iter().collect();
    assert_eq!(names, vec!["origin", "upstream"]);
}

#[test]
fn test_parse_remote_names_empty() {
    assert!(parse_remote_names("").is_empty());
    assert!(parse_remote_names("\n\n").is_empty());
}

#[test]
fn test_checkout_root_is_accepted() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");

    ensure_checkout(temp.path()).unwrap();
}

#[test]
fn test_uninitialized_submodule_dir_is_rejected() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");
    let sub = temp.path().join("musl");
    std::fs::create_dir(&sub).unwrap();

    // Discovery succeeds through the superproject, but not at `sub` itself
    let err = ensure_checkout(&sub).unwrap_err();
    assert!(
        matches!(&err, PrepError::Git(e) if matches!(**e, GitError::NotACheckout { .. })),
        "expected NotACheckout, got: {err}"
    );
}

#[test]
fn test_nested_checkout_is_accepted() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init superproject");
    let sub = temp.path().join("musl");
    std::fs::create_dir(&sub).unwrap();
    gix::init(&sub).expect("failed to init submodule repo");

    ensure_checkout(&sub).unwrap();
}

#[test]
fn test_missing_directory_is_rejected() {
    let temp = temp_dir();
    let err = ensure_checkout(&temp.path().join("absent")).unwrap_err();
    assert!(matches!(&err, PrepError::Git(e) if matches!(**e, GitError::NotACheckout { .. })));
}
