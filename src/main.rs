// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Run (default) | List | Options | Inis | Version
//! ```

use std::process::ExitCode;

use tracing::error;
use votv_launcher::cli::global::{DEFAULT_OVERLAY, GlobalOptions};
use votv_launcher::cli::{self, Command};
use votv_launcher::cmd::config::{run_inis_command, run_options_command};
use votv_launcher::cmd::list::run_list_command;
use votv_launcher::cmd::run::run_command;
use votv_launcher::config::Config;
use votv_launcher::config::loader::ConfigLoader;
use votv_launcher::logging::init_logging;
use votv_launcher::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Prefix of environment variables overriding configuration keys.
const ENV_PREFIX: &str = "VOTV";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        Some(Command::List) => load_config(&cli.global).map(|config| run_list_command(&config)),
        None | Some(Command::Run) => {
            // Workflow failures are logged; the exit status stays successful.
            if let Err(e) = run(&cli.global).await {
                error!("{e:#}");
            }
            return ExitCode::SUCCESS;
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

async fn run(global: &GlobalOptions) -> votv_launcher::error::Result<()> {
    let config = load_config(global)?;
    run_command(&config).await
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> votv_launcher::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new()
        .add_file(&global.config)
        .add_file(&global.mods);
    if !global.no_default_inis {
        loader = loader.add_file_optional(DEFAULT_OVERLAY);
    }
    for ini_path in &global.inis {
        loader = loader.add_file(ini_path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .set_all(global.to_config_overrides())
}

fn load_config(global: &GlobalOptions) -> votv_launcher::error::Result<Config> {
    build_config_loader(global)?.build()
}
