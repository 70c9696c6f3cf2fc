// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitCli, ShellBackend};
use crate::error::{GitError, PrepError, ProcessError};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_locate_finds_git() {
    let backend = ShellBackend::locate().expect("git should be in PATH");
    assert!(backend.program().exists());
}

#[test]
fn test_run_uses_explicit_cwd() {
    let temp = temp_dir();
    let backend = ShellBackend::locate().unwrap();
    backend.run(&["init", "--quiet"], temp.path()).unwrap();

    let inside = backend
        .run(&["rev-parse", "--is-inside-work-tree"], temp.path())
        .unwrap();
    assert_eq!(inside, "true");
}

#[test]
fn test_failed_command_reports_exit_code() {
    let temp = temp_dir();
    let backend = ShellBackend::locate().unwrap();
    backend.run(&["init", "--quiet"], temp.path()).unwrap();
    let cwd_before = std::env::current_dir().unwrap();

    let err = backend
        .run(&["rev-parse", "--verify", "refs/heads/missing"], temp.path())
        .unwrap_err();

    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
    match err {
        PrepError::Git(e) => match *e {
            GitError::CommandFailed { command, code, .. } => {
                assert_eq!(command, "git rev-parse --verify refs/heads/missing");
                assert_ne!(code, 0);
            }
            other => panic!("unexpected git error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_program_is_spawn_failure() {
    let temp = temp_dir();
    let backend = ShellBackend::with_program(temp.path().join("no-such-git"));
    let err = backend.run(&["--version"], temp.path()).unwrap_err();
    assert!(
        matches!(&err, PrepError::Process(e) if matches!(**e, ProcessError::SpawnFailed { .. })),
        "expected SpawnFailed, got: {err}"
    );
}
