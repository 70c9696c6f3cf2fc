// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Upstream remote configuration.
//!
//! ```text
//! Config [[upstream]] --> UpstreamRegistry (path -> url, branch)
//!                                |
//! .gitmodules --> Gitmodules ----+--> sync_upstreams()
//!                                          |
//!                                          v
//!                              RemoteConfigurator<G: GitCli>
//!                              .ensure_upstream(workdir, url)
//! ```

pub mod configurator;
pub mod registry;
pub mod sync;

pub use configurator::{RemoteConfigurator, UpstreamStatus};
pub use registry::{UpstreamRegistry, UpstreamRemote};
pub use sync::{SyncOptions, SyncRecord, SyncReport, sync_upstreams};
