// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Adds the `upstream` remote to a single repository.
//!
//! ```text
//! git remote -v
//!   upstream listed?  yes --> AlreadyConfigured (no mutation)
//!                     no  --> git remote add upstream URL
//!                             git fetch --all           --> Added
//!                     dry --> WouldAdd
//! ```

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::error::PrepResult;
use crate::git::backend::GitCli;
use crate::git::remote::{UPSTREAM, add_remote, fetch_all, remote_names};

/// What happened to a repository's `upstream` remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamStatus {
    /// An `upstream` remote already existed; nothing was changed.
    AlreadyConfigured,
    /// `upstream` was added and all remotes fetched.
    Added,
    /// Dry run: `upstream` is missing and would have been added.
    WouldAdd,
}

impl UpstreamStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyConfigured => "already configured",
            Self::Added => "added",
            Self::WouldAdd => "would add",
        }
    }
}

impl fmt::Display for UpstreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ensures an `upstream` remote exists in a repository.
#[derive(Debug, Clone)]
pub struct RemoteConfigurator<G> {
    git: G,
    dry_run: bool,
}

impl<G: GitCli> RemoteConfigurator<G> {
    pub const fn new(git: G) -> Self {
        Self {
            git,
            dry_run: false,
        }
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Add `upstream` pointing at `url` unless the repository already has one.
    ///
    /// Every git call runs with `workdir` as its working directory.
    ///
    /// # Errors
    ///
    /// Returns the first failing git invocation's error.
    pub fn ensure_upstream(&self, workdir: &Path, url: &str) -> PrepResult<UpstreamStatus> {
        let remotes = remote_names(&self.git, workdir)?;
        if remotes.contains(UPSTREAM) {
            debug!(path = %workdir.display(), "upstream remote already present");
            return Ok(UpstreamStatus::AlreadyConfigured);
        }

        if self.dry_run {
            info!(path = %workdir.display(), url, "would add upstream remote and fetch");
            return Ok(UpstreamStatus::WouldAdd);
        }

        add_remote(&self.git, workdir, UPSTREAM, url)?;
        fetch_all(&self.git, workdir)?;
        info!(path = %workdir.display(), url, "upstream remote added");
        Ok(UpstreamStatus::Added)
    }
}
