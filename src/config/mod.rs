// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for prep-git.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/prep-git.toml (optional)
//! 3. --ini FILE (repeatable)
//! 4. PREP_GIT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PREP_GIT_GLOBAL__DRY=true              → global.dry = true
//! PREP_GIT_GLOBAL__REQUIRE_ALL=true      → global.require_all = true
//! PREP_GIT_GLOBAL__GITMODULES=alt.cfg    → global.gitmodules = "alt.cfg"
//! ```
//!
//! # Upstream Registry
//!
//! ```toml
//! [[upstream]]
//! path = "musl"
//! url = "https://github.com/bminor/musl"
//! branch = "master"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, PrepError, PrepResult, Result};
use crate::upstream::UpstreamRegistry;

use loader::ConfigLoader;
use types::{GlobalConfig, UpstreamEntry};

/// Name of the configuration file looked up in the root directory.
pub const DEFAULT_CONFIG_FILE: &str = "prep-git.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PREP_GIT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Upstream registry entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub upstream: Vec<UpstreamEntry>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use prep_git::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("prep-git.toml")
    ///     .with_env_prefix("PREP_GIT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Self::builder().add_toml_file(path).build().map_err(|e| {
            PrepError::from(ConfigError::ParseError {
                path: path.display().to_string(),
                message: format!("{e:#}"),
            })
            .into()
        })
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Build the upstream registry from the `[[upstream]]` entries.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an entry has an empty path or url, or if two
    /// entries share a path.
    pub fn registry(&self) -> PrepResult<UpstreamRegistry> {
        UpstreamRegistry::from_entries(&self.upstream)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream registry is invalid.
    pub fn validate(&self) -> Result<()> {
        self.registry()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry".to_string(), self.global.dry.to_string());
        options.insert(
            "global.gitmodules".to_string(),
            self.global.gitmodules.display().to_string(),
        );
        options.insert(
            "global.require_all".to_string(),
            self.global.require_all.to_string(),
        );
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".to_string(), log_file.display().to_string());
        }

        for entry in &self.upstream {
            let value = entry.branch.as_ref().map_or_else(
                || entry.url.clone(),
                |branch| format!("{} ({branch})", entry.url),
            );
            options.insert(format!("upstream.{}", entry.path), value);
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
