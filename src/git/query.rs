// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix.
//!
//! ```text
//! query.rs --> gix::discover --> .git/ or gitfile (no subprocess)
//! ```
//!
//! An uninitialized submodule directory is empty, so discovery walks up to the
//! superproject. Requiring the discovered work tree to be the directory itself
//! keeps remote changes from landing in the wrong repository.

use std::path::Path;

use crate::error::{GitError, PrepResult};

/// Check that `path` is the root of its own work tree.
///
/// # Errors
///
/// Returns `GitError::Discover` if no repository contains `path`, and
/// `GitError::NotACheckout` if `path` is missing or belongs to an enclosing
/// repository.
pub fn ensure_checkout(path: &Path) -> PrepResult<()> {
    let not_a_checkout = || GitError::NotACheckout {
        path: path.display().to_string(),
    };

    let wanted = path.canonicalize().map_err(|_| not_a_checkout())?;
    let repo = gix::discover(&wanted).map_err(|e| GitError::Discover {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;

    let workdir = repo.workdir().and_then(|w| w.canonicalize().ok());
    if workdir.as_deref() == Some(wanted.as_path()) {
        Ok(())
    } else {
        Err(not_a_checkout().into())
    }
}
