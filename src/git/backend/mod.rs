// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitCli (trait) --> ShellBackend (git CLI, resolved via PATH)
//!                --> test doubles (record invocations)
//! ```
//!
//! Every invocation receives its working directory explicitly; the process
//! current directory is never changed.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, info};

use crate::error::{GitError, PrepResult, ProcessError};

/// Runs git subcommands.
pub trait GitCli {
    /// Run `git <args>` inside `cwd` and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` if git exits unsuccessfully, or a
    /// `ProcessError` if it cannot be spawned.
    fn run(&self, args: &[&str], cwd: &Path) -> PrepResult<String>;
}

impl<T: GitCli + ?Sized> GitCli for &T {
    fn run(&self, args: &[&str], cwd: &Path) -> PrepResult<String> {
        (**self).run(args, cwd)
    }
}

/// Shell-based git backend using the git CLI.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
}

impl ShellBackend {
    /// Resolve `git` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if git is not installed.
    pub fn locate() -> Result<Self, ProcessError> {
        which::which("git")
            .map(Self::with_program)
            .map_err(|_| ProcessError::ExecutableNotFound {
                name: "git".to_string(),
            })
    }

    /// Use an explicit git executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl GitCli for ShellBackend {
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`. On failure the
    /// captured stdout and stderr are echoed to stderr.
    fn run(&self, args: &[&str], cwd: &Path) -> PrepResult<String> {
        let command = format!("git {}", args.join(" "));
        info!(cwd = %cwd.display(), "+ {command}");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            echo_output(&output);
            let code = output.status.code().unwrap_or(-1);
            debug!(command = %command, code, "git exited unsuccessfully");
            return Err(GitError::CommandFailed {
                command,
                code,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn echo_output(output: &Output) {
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(&output.stdout);
    let _ = stderr.write_all(&output.stderr);
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests;
