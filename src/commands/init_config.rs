use std::io::Write;

use crate::settings::{MigrationSettings, SettingsManager};

/// Write the built-in settings as a template. Never overwrites an existing file.
pub fn init_config<W: Write>(manager: &SettingsManager, out: &mut W) -> u8 {
    let path = manager.settings_path();

    if path.exists() {
        tracing::error!(path = %path.display(), "settings file already exists");
        return 1;
    }

    match manager.save(&MigrationSettings::default()) {
        Ok(()) => {
            let _ = writeln!(out, "Wrote default settings to {}", path.display());
            0
        }
        Err(err) => {
            tracing::error!(code = err.error_code(), "Error writing settings: {}", err);
            1
        }
    }
}
