// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show` and `sync` command implementations.
//!
//! Results go to stdout; logs go to stderr.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::submodule::{ShowArgs, SyncArgs};
use crate::config::Config;
use crate::error::{PrepError, Result};
use crate::git::backend::ShellBackend;
use crate::gitmodules::Gitmodules;
use crate::upstream::{SyncOptions, SyncReport, UpstreamStatus, sync_upstreams};

/// Parse `.gitmodules` and print its submodules.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable.
pub fn run_show_command(args: &ShowArgs, root: &Path, config: &Config) -> Result<()> {
    let modules = load_gitmodules(root, config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&modules)?);
    } else {
        print!("{}", format_submodules(&modules));
    }
    Ok(())
}

/// Configure `upstream` for every registered submodule.
///
/// # Errors
///
/// Returns an error if `git` is not installed, the registry or `.gitmodules`
/// is invalid, or any git invocation fails.
pub fn run_sync_command(args: &SyncArgs, root: &Path, config: &Config) -> Result<()> {
    let registry = config.registry()?;
    let git = ShellBackend::locate().map_err(PrepError::from)?;
    debug!(git = %git.program().display(), "using git");
    let modules = load_gitmodules(root, config)?;

    let options = SyncOptions::builder()
        .dry_run(config.global.dry)
        .require_all(args.require_all || config.global.require_all)
        .patterns(args.patterns.clone())
        .build();

    info!(
        root = %root.display(),
        submodules = modules.len(),
        registered = registry.len(),
        "syncing upstream remotes"
    );
    let report = sync_upstreams(root, &modules, &registry, &git, &options)?;
    print!("{}", format_report(&report));
    Ok(())
}

fn load_gitmodules(root: &Path, config: &Config) -> Result<Gitmodules> {
    let path = root.join(&config.global.gitmodules);
    Gitmodules::from_file(&path).with_context(|| format!("failed to load {}", path.display()))
}

/// Human-readable listing of parsed submodules.
#[must_use]
pub fn format_submodules(modules: &Gitmodules) -> String {
    let mut out = String::new();
    for entry in modules {
        let _ = writeln!(out, "{}", entry.name());
        for (key, value) in [
            ("path", entry.path()),
            ("url", entry.url()),
            ("branch", entry.branch()),
        ] {
            if let Some(value) = value {
                let _ = writeln!(out, "  {key:<6} = {value}");
            }
        }
    }
    out
}

/// One line per submodule followed by a summary line.
#[must_use]
pub fn format_report(report: &SyncReport) -> String {
    let records = report.records();
    let name_width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let status_width = records
        .iter()
        .map(|r| r.status.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<status_width$}  {}",
            record.name,
            record.status.as_str(),
            record.url
        );
    }
    let _ = writeln!(
        out,
        "{} added, {} already configured, {} would add",
        report.count(UpstreamStatus::Added),
        report.count(UpstreamStatus::AlreadyConfigured),
        report.count(UpstreamStatus::WouldAdd),
    );
    out
}
