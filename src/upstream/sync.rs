// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry-driven upstream configuration across submodules.
//!
//! ```text
//! every selected .gitmodules path registered? (fatal with require_all)
//! for remote in registry (by path):
//!     .gitmodules lookup      (UnknownSubmodule if absent)
//!     pattern filter          (name or path)
//!     ensure_checkout(root/path)
//!     ensure_upstream(root/path, url)
//! --> SyncReport
//! ```
//!
//! Sequential; the first failure aborts the run.

use std::path::Path;

use anyhow::Context;
use bon::Builder;
use tracing::{debug, info, warn};
use wax::Program as _;

use super::configurator::{RemoteConfigurator, UpstreamStatus};
use super::registry::UpstreamRegistry;
use crate::error::{PrepError, Result, UpstreamError};
use crate::git::backend::GitCli;
use crate::git::query::ensure_checkout;
use crate::gitmodules::Gitmodules;

/// Options for [`sync_upstreams`].
#[derive(Debug, Clone, Default, Builder)]
pub struct SyncOptions {
    /// Log mutations instead of running them.
    #[builder(default)]
    pub dry_run: bool,
    /// Fail if a selected submodule has no registry entry.
    #[builder(default)]
    pub require_all: bool,
    /// Glob patterns selecting submodules by name or path (empty = all).
    #[builder(default)]
    pub patterns: Vec<String>,
}

/// Outcome for one submodule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SyncRecord {
    pub name: String,
    pub path: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub status: UpstreamStatus,
}

/// Outcomes of a sync run, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SyncReport {
    records: Vec<SyncRecord>,
}

impl SyncReport {
    pub fn push(&mut self, record: SyncRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[SyncRecord] {
        &self.records
    }

    /// Number of records with the given status.
    #[must_use]
    pub fn count(&self, status: UpstreamStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Configure `upstream` for every registered submodule below `root`.
///
/// # Errors
///
/// Returns an error if:
/// - a glob pattern is invalid
/// - `require_all` is set and a submodule has no registry entry
/// - a registered path is missing from `.gitmodules`
/// - a submodule directory is not its own checkout
/// - any git invocation fails
pub fn sync_upstreams<G: GitCli>(
    root: &Path,
    modules: &Gitmodules,
    registry: &UpstreamRegistry,
    git: G,
    options: &SyncOptions,
) -> Result<SyncReport> {
    let globs = options
        .patterns
        .iter()
        .map(|pattern| {
            wax::Glob::new(pattern).with_context(|| format!("invalid pattern '{pattern}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    let selected = |name: &str, path: &str| {
        globs.is_empty() || globs.iter().any(|g| g.is_match(name) || g.is_match(path))
    };

    check_registered(modules, registry, options.require_all, &selected)?;

    if registry.is_empty() {
        warn!("no upstream remotes registered, nothing to do");
        return Ok(SyncReport::default());
    }

    let configurator = RemoteConfigurator::new(git).dry_run(options.dry_run);
    let mut report = SyncReport::default();

    for remote in registry.iter() {
        let entry = modules
            .find_by_path(remote.path())
            .ok_or_else(|| {
                PrepError::from(UpstreamError::UnknownSubmodule {
                    path: remote.path().to_string(),
                })
            })?;

        if !selected(entry.name(), remote.path()) {
            debug!(submodule = entry.name(), "skipped by pattern");
            continue;
        }

        let workdir = entry
            .workdir(root)
            .unwrap_or_else(|| root.join(remote.path()));
        ensure_checkout(&workdir)
            .with_context(|| format!("submodule '{}' is not checked out", entry.name()))?;

        info!(
            submodule = entry.name(),
            path = remote.path(),
            branch = ?remote.branch(),
            "configuring upstream"
        );
        let status = configurator
            .ensure_upstream(&workdir, remote.url())
            .with_context(|| format!("failed to configure upstream for {}", entry.name()))?;

        report.push(SyncRecord {
            name: entry.name().to_string(),
            path: remote.path().to_string(),
            url: remote.url().to_string(),
            branch: remote.branch().map(str::to_string),
            status,
        });
    }

    Ok(report)
}

/// Unregistered submodules are skipped unless `require_all` makes them fatal.
/// Submodules excluded by the patterns are not checked.
fn check_registered(
    modules: &Gitmodules,
    registry: &UpstreamRegistry,
    require_all: bool,
    selected: impl Fn(&str, &str) -> bool,
) -> Result<()> {
    for entry in modules {
        let Some(path) = entry.path() else {
            debug!(submodule = entry.name(), "no path declared");
            continue;
        };
        if registry.get(path).is_some() || !selected(entry.name(), path) {
            continue;
        }
        if require_all {
            return Err(PrepError::from(UpstreamError::Unregistered {
                name: entry.name().to_string(),
                path: path.to_string(),
            })
            .into());
        }
        debug!(submodule = entry.name(), path, "no upstream registered, skipping");
    }
    Ok(())
}
