// prep-git: Submodule Upstream Preparation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Show | Sync | Options | Inis
//! ```

use std::process::ExitCode;

use prep_git::cli::global::GlobalOptions;
use prep_git::cli::{self, Command};
use prep_git::cmd::config::{run_inis_command, run_options_command};
use prep_git::cmd::submodule::{run_show_command, run_sync_command};
use prep_git::config::loader::ConfigLoader;
use prep_git::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use prep_git::error::Result;
use prep_git::logging::init_logging;
use prep_git::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, config.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config)
}

/// Logging follows the merged config when it loaded, otherwise the raw flags.
fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let (console_level, file_level, log_file) = match config {
        Some(config) => (
            config.global.output_log_level,
            config.global.file_log_level,
            config.global.log_file.clone(),
        ),
        None => {
            let console_level = global
                .log_level
                .and_then(LogLevel::from_u8)
                .unwrap_or(LogLevel::INFO);
            let file_level = global
                .file_log_level
                .and_then(LogLevel::from_u8)
                .unwrap_or(console_level);
            (console_level, file_level, global.log_file.clone())
        }
    };

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: Result<Config>) -> ExitCode {
    let root = cli.global.root();
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => config.map(|config| run_options_command(&config)),
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        Some(Command::Show(args)) => {
            config.and_then(|config| run_show_command(args, &root, &config))
        }
        Some(Command::Sync(args)) => {
            config.and_then(|config| run_sync_command(args, &root, &config))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(global.root().join(DEFAULT_CONFIG_FILE));
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}
