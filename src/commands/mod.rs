//! Entry handlers for the command line.

pub mod init_config;
pub mod migrate;
pub mod status;

use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::migration::{MigrationError, MigrationResult};
use crate::settings::{MigrationSettings, SettingsManager};
use crate::traits::CommandExecutor;

/// Settings manager for `config` if given, otherwise for the standard location.
pub fn settings_manager(config: Option<&Path>) -> SettingsManager {
    match config {
        Some(path) => SettingsManager::from_file(path),
        None => SettingsManager::default(),
    }
}

/// Load settings from `config` if given, otherwise from the standard location.
///
/// An explicitly named file must exist; the standard file is optional.
pub fn load_settings(config: Option<&Path>) -> MigrationResult<MigrationSettings> {
    if let Some(path) = config {
        if !path.exists() {
            return Err(MigrationError::InvalidSettings {
                reason: format!("settings file not found: {}", path.display()),
            });
        }
    }

    settings_manager(config).load()
}

/// Run the command selected on the command line and return the process exit code.
pub fn run<W: Write>(cli: &Cli, executor: &dyn CommandExecutor, out: &mut W) -> u8 {
    let command = cli.subcommand();
    if command == Command::InitConfig {
        return init_config::init_config(&settings_manager(cli.config.as_deref()), out);
    }

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(code = err.error_code(), "Error loading settings: {}", err);
            return 1;
        }
    };

    match command {
        Command::Status => status::status(executor, settings, out),
        _ => migrate::migrate(executor, settings, out),
    }
}
