// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! GlobalConfig   [global]     dry, gitmodules, require_all, log levels
//! UpstreamEntry  [[upstream]] path, url, branch
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options (`[global]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log mutations instead of running them.
    pub dry: bool,
    /// Location of the `.gitmodules` file, relative to the root.
    pub gitmodules: PathBuf,
    /// Fail when a submodule has no `[[upstream]]` entry.
    pub require_all: bool,
    /// Console log level (0-6).
    pub output_log_level: LogLevel,
    /// File log level (0-6).
    pub file_log_level: LogLevel,
    /// Optional log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            gitmodules: PathBuf::from(".gitmodules"),
            require_all: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// One `[[upstream]]` entry: the canonical remote for a submodule path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamEntry {
    /// Submodule path as declared in `.gitmodules`.
    pub path: String,
    /// URL of the upstream repository.
    pub url: String,
    /// Upstream branch to follow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}
