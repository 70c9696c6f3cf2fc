// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Upstream registry: submodule path -> canonical remote.

use std::collections::BTreeMap;

use crate::config::types::UpstreamEntry;
use crate::error::{ConfigError, PrepResult};

/// The canonical remote registered for one submodule path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRemote {
    path: String,
    url: String,
    branch: Option<String>,
}

impl UpstreamRemote {
    pub fn new(path: impl Into<String>, url: impl Into<String>, branch: Option<String>) -> Self {
        Self {
            path: normalize_path(&path.into()).to_string(),
            url: url.into(),
            branch,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}

/// Registered upstream remotes, ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamRegistry {
    remotes: BTreeMap<String, UpstreamRemote>,
}

impl UpstreamRegistry {
    /// Build the registry from configuration entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty path or url and
    /// `ConfigError::DuplicateUpstream` if two entries share a path.
    pub fn from_entries(entries: &[UpstreamEntry]) -> PrepResult<Self> {
        let mut registry = Self::default();
        for entry in entries {
            if normalize_path(&entry.path).is_empty() {
                return Err(invalid("path", "upstream path must not be empty").into());
            }
            if entry.url.trim().is_empty() {
                return Err(invalid(
                    "url",
                    &format!("upstream url for '{}' must not be empty", entry.path),
                )
                .into());
            }
            registry.insert(UpstreamRemote::new(
                entry.path.as_str(),
                entry.url.trim(),
                entry.branch.clone(),
            ))?;
        }
        Ok(registry)
    }

    /// Register a remote.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateUpstream` if the path is already registered.
    pub fn insert(&mut self, remote: UpstreamRemote) -> PrepResult<()> {
        if self.remotes.contains_key(remote.path()) {
            return Err(ConfigError::DuplicateUpstream {
                path: remote.path().to_string(),
            }
            .into());
        }
        self.remotes.insert(remote.path().to_string(), remote);
        Ok(())
    }

    /// Look up the remote registered for a submodule path (trailing `/` ignored).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&UpstreamRemote> {
        self.remotes.get(normalize_path(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &UpstreamRemote> {
        self.remotes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }
}

fn normalize_path(path: &str) -> &str {
    path.trim().trim_end_matches('/')
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "upstream".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
