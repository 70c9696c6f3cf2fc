// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the submodule commands.

use clap::Args;

/// Arguments for the show command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Print the parsed submodules as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the sync command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Glob patterns selecting submodules by name or path (default: all).
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Fails if a submodule matching the patterns has no upstream entry.
    #[arg(long = "require-all")]
    pub require_all: bool,
}
