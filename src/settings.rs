//! Migration settings with JSON persistence.
//!
//! This module provides:
//! - `MigrationSettings`, every value the migration steps depend on
//! - `DialogSpec`, `ToolPaths` and `RemovalPolicy` sub-records
//! - Loading from a JSON file, falling back to the built-in values
//!
//! Every field carries `#[serde(default)]`, so a settings file only needs to
//! name the values it changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::migration::config::{
    self, DIALOG_PATH, ENROLLMENT_URL, ID_PATH, LOGO_PATH, MAX_REMOVAL_ATTEMPTS, OPEN_PATH,
    PROFILES_PATH, PROFILE_IDENTIFIER, REMOVAL_ATTEMPTS, REMOVAL_BACKOFF_FACTOR, REMOVAL_INITIAL_DELAY_MS,
    REMOVAL_MAX_DELAY_MS, SOURCE_NAME, SOURCE_SHORT_NAME, TARGET_NAME, TARGET_SHORT_NAME,
};
use crate::migration::{MigrationError, MigrationResult};

/// Contents of the confirmation dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogSpec {
    pub title: String,
    pub message: String,
    pub button_text: String,
    /// Not checked for existence; the dialog falls back to its own icon.
    pub icon_path: String,
}

impl DialogSpec {
    /// Command line for the dialog executable, in flag/value pairs.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--title".to_string(),
            self.title.clone(),
            "--message".to_string(),
            self.message.clone(),
            "--icon".to_string(),
            self.icon_path.clone(),
            "--button1text".to_string(),
            self.button_text.clone(),
        ]
    }
}

impl Default for DialogSpec {
    fn default() -> Self {
        Self {
            title: format!("Migrating to {}", TARGET_NAME),
            message: format!(
                "Your Mac needs to be migrated to {}. Please press Continue when ready.",
                TARGET_NAME
            ),
            button_text: "Continue".to_string(),
            icon_path: LOGO_PATH.to_string(),
        }
    }
}

/// Locations of the external programs the migration runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolPaths {
    pub id: String,
    pub profiles: String,
    pub open: String,
    pub dialog: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            id: ID_PATH.to_string(),
            profiles: PROFILES_PATH.to_string(),
            open: OPEN_PATH.to_string(),
            dialog: DIALOG_PATH.to_string(),
        }
    }
}

/// How long to keep re-checking for the profile after asking for its removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RemovalPolicy {
    pub attempts: u32,
    pub initial_delay_ms: u64,
    pub backoff_factor: u32,
    pub max_delay_ms: u64,
}

impl RemovalPolicy {
    /// A policy that checks `attempts` times without sleeping.
    #[cfg(test)]
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts,
            initial_delay_ms: 0,
            backoff_factor: 1,
            max_delay_ms: 0,
        }
    }

    /// Number of inspections actually performed.
    pub fn inspections(&self) -> u32 {
        self.attempts.max(1)
    }

    /// Wait before each inspection, in order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        config::removal_delays(
            self.attempts,
            self.initial_delay_ms,
            self.backoff_factor,
            self.max_delay_ms,
        )
    }
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        Self {
            attempts: REMOVAL_ATTEMPTS,
            initial_delay_ms: REMOVAL_INITIAL_DELAY_MS,
            backoff_factor: REMOVAL_BACKOFF_FACTOR,
            max_delay_ms: REMOVAL_MAX_DELAY_MS,
        }
    }
}

/// Everything a migration run needs. Immutable once handed to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MigrationSettings {
    /// Matched as a plain substring of the `profiles list` output.
    pub profile_identifier: String,
    pub source_name: String,
    pub source_short_name: String,
    pub target_name: String,
    pub target_short_name: String,
    pub enrollment_url: String,
    pub dialog: DialogSpec,
    pub tools: ToolPaths,
    pub removal: RemovalPolicy,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            profile_identifier: PROFILE_IDENTIFIER.to_string(),
            source_name: SOURCE_NAME.to_string(),
            source_short_name: SOURCE_SHORT_NAME.to_string(),
            target_name: TARGET_NAME.to_string(),
            target_short_name: TARGET_SHORT_NAME.to_string(),
            enrollment_url: ENROLLMENT_URL.to_string(),
            dialog: DialogSpec::default(),
            tools: ToolPaths::default(),
            removal: RemovalPolicy::default(),
        }
    }
}

impl MigrationSettings {
    /// Reject values that would make the run meaningless.
    ///
    /// An empty identifier is a substring of any listing, so the profile
    /// could never be reported as removed.
    pub fn validate(&self) -> MigrationResult<()> {
        if self.profile_identifier.trim().is_empty() {
            return Err(MigrationError::InvalidSettings {
                reason: "profileIdentifier must not be empty".to_string(),
            });
        }

        if !(self.enrollment_url.starts_with("https://")
            || self.enrollment_url.starts_with("http://"))
        {
            return Err(MigrationError::InvalidSettings {
                reason: format!("enrollmentUrl is not an http(s) URL: {}", self.enrollment_url),
            });
        }

        let tools = [
            ("tools.id", &self.tools.id),
            ("tools.profiles", &self.tools.profiles),
            ("tools.open", &self.tools.open),
            ("tools.dialog", &self.tools.dialog),
        ];
        for (name, path) in tools {
            if path.trim().is_empty() {
                return Err(MigrationError::InvalidSettings {
                    reason: format!("{} must not be empty", name),
                });
            }
        }

        if self.removal.attempts > MAX_REMOVAL_ATTEMPTS {
            return Err(MigrationError::InvalidSettings {
                reason: format!(
                    "removal.attempts must be at most {}, got {}",
                    MAX_REMOVAL_ATTEMPTS, self.removal.attempts
                ),
            });
        }

        Ok(())
    }

    /// Check if these settings differ from the built-in values.
    pub fn has_non_default_settings(&self) -> bool {
        *self != Self::default()
    }
}

/// Settings file name stored in the settings directory.
const SETTINGS_FILENAME: &str = "mdm_migration.json";

/// Loads migration settings from a JSON file.
pub struct SettingsManager {
    settings_file_path: PathBuf,
}

impl SettingsManager {
    /// Create a settings manager for the standard file in `settings_dir`.
    pub fn new(settings_dir: &Path) -> Self {
        let settings_file_path = settings_dir.join(SETTINGS_FILENAME);
        Self { settings_file_path }
    }

    /// Create a settings manager for an explicit file.
    pub fn from_file(path: &Path) -> Self {
        Self {
            settings_file_path: path.to_path_buf(),
        }
    }

    /// Load and validate settings, returning defaults if the file doesn't exist.
    pub fn load(&self) -> MigrationResult<MigrationSettings> {
        if !self.settings_file_path.exists() {
            tracing::debug!(path = %self.settings_path().display(), "no settings file, using defaults");
            return Ok(MigrationSettings::default());
        }

        let contents = fs::read_to_string(&self.settings_file_path)?;

        // Handle empty file gracefully
        if contents.trim().is_empty() {
            return Ok(MigrationSettings::default());
        }

        let settings: MigrationSettings = serde_json::from_str(&contents)?;
        settings.validate()?;

        if settings.has_non_default_settings() {
            tracing::info!(path = %self.settings_file_path.display(), "loaded non-default settings");
        }

        Ok(settings)
    }

    /// Save settings to disk.
    pub fn save(&self, settings: &MigrationSettings) -> MigrationResult<()> {
        if let Some(parent) = self.settings_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(settings)?;
        fs::write(&self.settings_file_path, contents)?;

        Ok(())
    }

    /// Get the path where settings are stored.
    pub fn settings_path(&self) -> &Path {
        &self.settings_file_path
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new(Path::new(config::SETTINGS_DIR))
    }
}
