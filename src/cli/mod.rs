// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for prep-git using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! prep-git [global options] <command>
//! version
//! show [--json]
//! sync [PATTERN...] [--require-all]
//! options
//! inis
//! ```

pub mod global;
pub mod submodule;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::submodule::{ShowArgs, SyncArgs};
use clap::{Parser, Subcommand};

/// Submodule Upstream Preparation
///
/// Adds canonical `upstream` remotes to the submodules of a superproject.
#[derive(Debug, Parser)]
#[command(
    name = "prep-git",
    author,
    version,
    about = "Submodule Upstream Preparation",
    long_about = "prep-git Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads .gitmodules and adds an `upstream` remote to every\n\
                  submodule listed in the upstream registry, then fetches all\n\
                  remotes. Submodules that already have `upstream` are left alone.",
    after_help = "CONFIG FILES:\n\n\
                  By default, prep-git loads `prep-git.toml` from the root\n\
                  directory if it exists. Additional files can be given with\n\
                  --ini and are loaded after it. Use --no-default-inis to only\n\
                  use --ini. PREP_GIT_<SECTION>__<KEY> environment variables\n\
                  override the files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Parses .gitmodules and prints the submodules.
    Show(ShowArgs),

    /// Adds the upstream remote to registered submodules.
    Sync(SyncArgs),

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by prep-git.
    Inis,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
