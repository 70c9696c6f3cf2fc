// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote operations built on [`GitCli`].
//!
//! ```text
//! git remote -v            --> remote_names()
//! git remote add NAME URL  --> add_remote()
//! git fetch --all          --> fetch_all()
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use super::backend::GitCli;
use crate::error::PrepResult;

/// Name of the remote that points at the canonical repository.
pub const UPSTREAM: &str = "upstream";

/// Extract remote names from `git remote -v` output.
///
/// Each line reads `<name>\t<url> (fetch|push)`; only the name is kept.
#[must_use]
pub fn parse_remote_names(listing: &str) -> BTreeSet<&str> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect()
}

/// List configured remotes of the repository at `repo_path`.
///
/// # Errors
///
/// Returns an error if `git remote -v` fails.
pub fn remote_names<G: GitCli>(git: &G, repo_path: &Path) -> PrepResult<BTreeSet<String>> {
    let listing = git.run(&["remote", "-v"], repo_path)?;
    Ok(parse_remote_names(&listing)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Add a remote.
///
/// # Errors
///
/// Returns an error if `git remote add` fails.
pub fn add_remote<G: GitCli>(git: &G, repo_path: &Path, name: &str, url: &str) -> PrepResult<()> {
    git.run(&["remote", "add", name, url], repo_path)?;
    Ok(())
}

/// Fetch every configured remote.
///
/// # Errors
///
/// Returns an error if `git fetch --all` fails.
pub fn fetch_all<G: GitCli>(git: &G, repo_path: &Path) -> PrepResult<()> {
    git.run(&["fetch", "--all"], repo_path)?;
    Ok(())
}
