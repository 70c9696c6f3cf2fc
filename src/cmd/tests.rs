// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::submodule::{format_report, format_submodules};
use crate::gitmodules::Gitmodules;
use crate::upstream::{SyncRecord, SyncReport, UpstreamStatus};

#[test]
fn test_format_submodules() {
    let modules = Gitmodules::parse(
        "[submodule \"musl\"]\n\tpath = musl\n\turl = https://github.com/bminor/musl\n\
         [submodule \"zlib\"]\n\tpath = zlib\n\turl = https://github.com/madler/zlib\n\tbranch = develop\n",
    );

    insta::assert_snapshot!(format_submodules(&modules), @r"
    musl
      path   = musl
      url    = https://github.com/bminor/musl
    zlib
      path   = zlib
      url    = https://github.com/madler/zlib
      branch = develop
    ");
}

#[test]
fn test_format_submodules_empty() {
    assert_eq!(format_submodules(&Gitmodules::parse("")), "");
}

#[test]
fn test_format_report() {
    let mut report = SyncReport::default();
    report.push(SyncRecord {
        name: "musl".to_string(),
        path: "musl".to_string(),
        url: "https://github.com/bminor/musl".to_string(),
        branch: None,
        status: UpstreamStatus::Added,
    });
    report.push(SyncRecord {
        name: "zlib-ng".to_string(),
        path: "third_party/zlib-ng".to_string(),
        url: "https://github.com/zlib-ng/zlib-ng".to_string(),
        branch: Some("develop".to_string()),
        status: UpstreamStatus::AlreadyConfigured,
    });

    insta::assert_snapshot!(format_report(&report), @r"
    musl     added               https://github.com/bminor/musl
    zlib-ng  already configured  https://github.com/zlib-ng/zlib-ng
    1 added, 1 already configured, 0 would add
    ");
}

#[test]
fn test_format_report_empty() {
    assert_eq!(
        format_report(&SyncReport::default()),
        "0 added, 0 already configured, 0 would add\n"
    );
}
