// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!      query.rs           remote.rs
//!         |                   |
//!         v                   v
//!   gix (read-only)     GitCli (trait)
//!   .ensure_checkout          |
//!                             v
//!                       ShellBackend
//!                       git remote -v
//!                       git remote add
//!                       git fetch --all
//! ```
//!
//! **gix** answers "is this directory its own checkout" without a subprocess.
//! **`ShellBackend`** runs every command that reads or writes remotes.

pub mod backend;
pub mod query;
pub mod remote;

#[cfg(test)]
mod tests;
