// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Gitmodules;
use crate::error::{GitmodulesError, PrepError};
use std::path::Path;
use tempfile::TempDir;

const MUSL: &str = r#"[submodule "musl"]
    path = musl
    url = https://github.com/bminor/musl
"#;

const THREE_MODULES: &str = r#"[submodule "musl"]
	path = third_party/musl
	url = https://github.com/bminor/musl
[submodule "llvm"]
	path = third_party/llvm-project
	url = https://github.com/llvm/llvm-project
	branch = release/18.x
[submodule "zlib"]
	path = third_party/zlib
	url = https://github.com/madler/zlib
"#;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_parse_minimal_fixture() {
    let modules = Gitmodules::parse(MUSL);
    insta::assert_snapshot!(
        serde_json::to_string(&modules).unwrap(),
        @r#"{"musl":{"path":"musl","url":"https://github.com/bminor/musl"}}"#
    );
}

#[test]
fn test_parse_preserves_order_and_fields() {
    let modules = Gitmodules::parse(THREE_MODULES);
    assert_eq!(modules.len(), 3);

    let summary: Vec<_> = modules
        .iter()
        .map(|e| (e.name(), e.path(), e.url(), e.branch()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                "musl",
                Some("third_party/musl"),
                Some("https://github.com/bminor/musl"),
                None
            ),
            (
                "llvm",
                Some("third_party/llvm-project"),
                Some("https://github.com/llvm/llvm-project"),
                Some("release/18.x")
            ),
            (
                "zlib",
                Some("third_party/zlib"),
                Some("https://github.com/madler/zlib"),
                None
            ),
        ]
    );
}

#[test]
fn test_parse_is_idempotent() {
    assert_eq!(
        Gitmodules::parse(THREE_MODULES),
        Gitmodules::parse(THREE_MODULES)
    );
}

#[test]
fn test_missing_fields_are_absent() {
    let modules = Gitmodules::parse("[submodule \"bare\"]\n    url = git@example.com:bare.git\n");
    let entry = modules.get("bare").unwrap();
    assert_eq!(entry.path(), None);
    assert_eq!(entry.url(), Some("git@example.com:bare.git"));
    assert_eq!(entry.workdir(Path::new("/repo")), None);
}

#[test]
fn test_ignores_unindented_and_orphan_fields() {
    let content = "    path = orphan\n[submodule \"a\"]\npath = not-indented\n    update = none\n    path = a\n";
    let modules = Gitmodules::parse(content);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules.get("a").unwrap().path(), Some("a"));
}

#[test]
fn test_repeated_section_resets_in_place() {
    let content = "[submodule \"a\"]\n  path = a\n  url = old\n[submodule \"b\"]\n  path = b\n[submodule \"a\"]\n  url = new\n";
    let modules = Gitmodules::parse(content);
    let names: Vec<_> = modules.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["a", "b"]);

    let a = modules.get("a").unwrap();
    assert_eq!(a.path(), None);
    assert_eq!(a.url(), Some("new"));
}

#[test]
fn test_crlf_and_trailing_whitespace() {
    let content = "[submodule \"w\"]\r\n\tpath = win \r\n\turl=https://example.com/w.git\r\n";
    let modules = Gitmodules::parse(content);
    let entry = modules.get("w").unwrap();
    assert_eq!(entry.path(), Some("win"));
    assert_eq!(entry.url(), Some("https://example.com/w.git"));
}

#[test]
fn test_find_by_path() {
    let modules = Gitmodules::parse(THREE_MODULES);
    assert_eq!(
        modules.find_by_path("third_party/zlib/").map(|e| e.name()),
        Some("zlib")
    );
    assert!(modules.find_by_path("zlib").is_none());
}

#[test]
fn test_workdir_joins_root() {
    let modules = Gitmodules::parse(MUSL);
    let workdir = modules.get("musl").unwrap().workdir(Path::new("/src/project"));
    assert_eq!(workdir, Some(Path::new("/src/project").join("musl")));
}

#[test]
fn test_from_file_reads_fixture() {
    let temp = temp_dir();
    let file = temp.path().join(".gitmodules");
    std::fs::write(&file, THREE_MODULES).unwrap();

    let modules = Gitmodules::from_file(&file).unwrap();
    assert_eq!(modules, Gitmodules::parse(THREE_MODULES));
}

#[test]
fn test_from_file_missing_is_not_found() {
    let temp = temp_dir();
    let err = Gitmodules::from_file(&temp.path().join(".gitmodules")).unwrap_err();
    assert!(
        matches!(&err, PrepError::Gitmodules(e) if matches!(**e, GitmodulesError::NotFound { .. })),
        "expected NotFound, got: {err}"
    );
}
