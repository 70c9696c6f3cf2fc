// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.gitmodules` parsing.
//!
//! ```text
//! [submodule "musl"]          --> new entry "musl"
//!     path = musl             --> entry.path
//!     url = https://...       --> entry.url
//!     branch = master         --> entry.branch
//! ```
//!
//! Line oriented and lenient: field lines must be indented, unknown keys and
//! fields outside a section are dropped, incomplete entries are kept as-is.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::{GitmodulesError, PrepResult};

static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\[submodule\s+"(.*?)"\]"#).expect("valid section pattern"));

static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(path|url|branch)\s*=\s*(.*?)\s*$").expect("valid field pattern")
});

/// One `[submodule "<name>"]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SubmoduleEntry {
    #[serde(skip)]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
}

impl SubmoduleEntry {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Working directory of the submodule below `root`, if a path was declared.
    #[must_use]
    pub fn workdir(&self, root: &Path) -> Option<PathBuf> {
        self.path.as_deref().map(|p| root.join(p))
    }

    fn clear(&mut self) {
        self.path = None;
        self.url = None;
        self.branch = None;
    }
}

/// Parsed `.gitmodules` content, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gitmodules {
    entries: Vec<SubmoduleEntry>,
}

impl Gitmodules {
    /// Parse `.gitmodules` text.
    ///
    /// A repeated section name resets the earlier entry but keeps its position.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut entries: Vec<SubmoduleEntry> = Vec::new();
        let mut current: Option<usize> = None;

        for (lineno, line) in content.lines().enumerate() {
            if let Some(caps) = SECTION_PATTERN.captures(line) {
                let name = &caps[1];
                let index = match entries.iter().position(|e| e.name == name) {
                    Some(index) => {
                        entries[index].clear();
                        index
                    }
                    None => {
                        entries.push(SubmoduleEntry::new(name));
                        entries.len() - 1
                    }
                };
                current = Some(index);
                continue;
            }

            let Some(caps) = FIELD_PATTERN.captures(line) else {
                continue;
            };

            let Some(index) = current else {
                trace!(line = lineno + 1, "field outside of a submodule section");
                continue;
            };

            let entry = &mut entries[index];
            let value = caps[2].to_string();
            match &caps[1] {
                "path" => entry.path = Some(value),
                "url" => entry.url = Some(value),
                "branch" => entry.branch = Some(value),
                _ => {}
            }
        }

        Self { entries }
    }

    /// Read and parse a `.gitmodules` file.
    ///
    /// # Errors
    ///
    /// Returns `GitmodulesError::NotFound` if the file does not exist and
    /// `GitmodulesError::Read` if it cannot be read.
    pub fn from_file(path: &Path) -> PrepResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                GitmodulesError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                GitmodulesError::Read {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;

        let modules = Self::parse(&content);
        trace!(path = %path.display(), count = modules.len(), "parsed gitmodules");
        Ok(modules)
    }

    /// Look up a submodule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SubmoduleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Look up a submodule by its declared path (trailing `/` ignored).
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&SubmoduleEntry> {
        let wanted = path.trim_end_matches('/');
        self.entries
            .iter()
            .find(|e| e.path().is_some_and(|p| p.trim_end_matches('/') == wanted))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmoduleEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Gitmodules {
    type Item = &'a SubmoduleEntry;
    type IntoIter = std::slice::Iter<'a, SubmoduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes as `{ name: { path, url, branch } }` in file order.
impl Serialize for Gitmodules {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests;
