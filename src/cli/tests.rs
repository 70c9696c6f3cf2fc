// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["prep-git", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["prep-git"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.global.root(), PathBuf::from("."));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "prep-git",
        "-C",
        "/src/project",
        "-l",
        "5",
        "--dry",
        "--gitmodules",
        "alt.gitmodules",
        "show",
    ])
    .unwrap();

    assert_eq!(cli.global.root(), PathBuf::from("/src/project"));
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
    assert!(matches!(cli.command, Some(Command::Show(ref args)) if !args.json));
}

#[test]
fn test_parse_global_option_after_subcommand() {
    let cli = Cli::try_parse_from(["prep-git", "sync", "--dry", "-i", "a.toml", "-i", "b.toml"])
        .unwrap();
    assert!(cli.global.dry);
    assert_eq!(
        cli.global.inis,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}

#[test]
fn test_parse_sync_patterns() {
    let cli =
        Cli::try_parse_from(["prep-git", "sync", "musl", "third_party/*", "--require-all"]).unwrap();
    let Some(Command::Sync(args)) = cli.command else {
        panic!("expected sync command");
    };
    assert_eq!(args.patterns, vec!["musl", "third_party/*"]);
    assert!(args.require_all);
}

#[test]
fn test_parse_show_json() {
    let cli = Cli::try_parse_from(["prep-git", "show", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Show(ref args)) if args.json));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["prep-git", "-l", "7", "show"]).is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "prep-git",
        "-l",
        "4",
        "--dry",
        "--gitmodules",
        "alt.gitmodules",
        "sync",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.output_log_level",
            "4",
        ),
        (
            "global.file_log_level",
            "4",
        ),
        (
            "global.gitmodules",
            "alt.gitmodules",
        ),
        (
            "global.dry",
            "true",
        ),
    ]
    "#);
}

#[test]
fn test_config_overrides_empty_by_default() {
    let cli = Cli::try_parse_from(["prep-git", "options"]).unwrap();
    assert!(cli.global.to_config_overrides().is_empty());
}
