// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               PrepError (~16 bytes)
//!                      |
//!   +-------+-------+--+-----+--------+-----+
//!   |       |       |        |        |     |
//!   v       v       v        v        v     v
//!  Git   Process  Config  Gitmod  Upstream  Io
//!  Box    Box      Box     Box      Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git        CommandFailed, NotACheckout, Discover
//!   Process    ExecutableNotFound, SpawnFailed
//!   Config     ParseError, InvalidValue, DuplicateUpstream
//!   Gitmodules NotFound, Read
//!   Upstream   UnknownSubmodule, Unregistered
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PrepError`].
pub type PrepResult<T> = std::result::Result<T, PrepError>;

/// Top-level application error type.
///
/// Every variant is a single box, so the enum stays two words wide.
#[derive(Debug, Error)]
pub enum PrepError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// `.gitmodules` could not be loaded.
    #[error("gitmodules error: {0}")]
    Gitmodules(#[from] Box<GitmodulesError>),

    /// Registry lookup failed.
    #[error("upstream error: {0}")]
    Upstream(#[from] Box<UpstreamError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PrepError {
                fn from(err: $error) -> Self {
                    PrepError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    GitmodulesError => Gitmodules,
    UpstreamError => Upstream,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited unsuccessfully.
    #[error("git command failed: {command} (exit code {code}) - {message}")]
    CommandFailed {
        command: String,
        code: i32,
        message: String,
    },

    /// Directory is not the root of its own git checkout.
    #[error("not a git checkout: {path}")]
    NotACheckout { path: String },

    /// Repository discovery through gix failed.
    #[error("failed to discover repository at {path}: {source}")]
    Discover {
        path: String,
        #[source]
        source: Box<gix::discover::Error>,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Two `[[upstream]]` entries share a path.
    #[error("duplicate upstream entry for path '{path}'")]
    DuplicateUpstream { path: String },
}

// --- Gitmodules Errors ---

/// Errors loading a `.gitmodules` file.
#[derive(Debug, Error)]
pub enum GitmodulesError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Upstream Errors ---

/// Lookup failures between the registry and `.gitmodules`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// A registry path has no submodule in `.gitmodules`.
    #[error("no submodule with path '{path}' in .gitmodules")]
    UnknownSubmodule { path: String },

    /// A submodule has no registry entry while all are required.
    #[error("submodule '{name}' at '{path}' has no upstream entry")]
    Unregistered { name: String, path: String },
}
