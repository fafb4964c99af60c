//! Sequences the migration steps:
//! 1. Privilege check - abort with exit code 1 unless root
//! 2. Profile removal - remove the old MDM profile and confirm it is gone
//! 3. Confirmation dialog - ask the user to continue
//! 4. Enrollment - open the new provider's enrollment URL
//!
//! Each step only runs if the previous one succeeded. Nothing is retried
//! apart from the post-removal inspection.

use super::dialog::show_dialog;
use super::enrollment::launch_enrollment;
use super::privilege::is_privileged;
use super::profiles::{profile_exists, remove_profile};
use crate::settings::MigrationSettings;
use crate::traits::CommandExecutor;

/// Progress reported while migrating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationStage {
    /// Migration started.
    Starting { source: String, target: String },
    /// Process is not running as root.
    NotPrivileged,
    /// Old profile confirmed removed.
    ProfileRemoved { source: String },
    /// Old profile still installed after removal was requested.
    ProfileRemovalFailed { source: String },
    /// Confirmation accepted, opening the enrollment URL.
    LaunchingEnrollment { target: String },
    /// Dialog missing, failed, or dismissed without pressing the button.
    DialogNotAccepted { target: String },
}

impl MigrationStage {
    /// Get the operator-facing line for this stage.
    pub fn message(&self) -> String {
        match self {
            MigrationStage::Starting { source, target } => {
                format!("Starting migration from {} to {}...", source, target)
            }
            MigrationStage::NotPrivileged => {
                "Error: This tool must be run with administrator privileges".into()
            }
            MigrationStage::ProfileRemoved { source } => {
                format!("{} profile successfully removed.", source)
            }
            MigrationStage::ProfileRemovalFailed { source } => {
                format!("{} profile could not be removed directly.", source)
            }
            MigrationStage::LaunchingEnrollment { target } => {
                format!("Starting {} enrollment...", target)
            }
            MigrationStage::DialogNotAccepted { target } => {
                format!("Failed to show dialog. Please enroll in {} manually.", target)
            }
        }
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    PrivilegeDenied,
    RemovalFailed,
    DialogNotAccepted,
    EnrollmentLaunched,
}

impl MigrationOutcome {
    /// Process exit code. Only the privilege failure is non-zero.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrationOutcome::PrivilegeDenied => 1,
            _ => 0,
        }
    }
}

/// Read-only snapshot for the `status` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub privileged: bool,
    pub profile_identifier: String,
    pub profile_installed: bool,
}

/// Runs the migration against an injected command executor.
pub struct Orchestrator<'a> {
    executor: &'a dyn CommandExecutor,
    settings: MigrationSettings,
}

impl<'a> Orchestrator<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, settings: MigrationSettings) -> Self {
        Self { executor, settings }
    }

    pub fn settings(&self) -> &MigrationSettings {
        &self.settings
    }

    /// Run every step in order, reporting progress through `on_stage`.
    pub fn run<F>(&self, mut on_stage: F) -> MigrationOutcome
    where
        F: FnMut(MigrationStage),
    {
        let settings = &self.settings;

        on_stage(MigrationStage::Starting {
            source: settings.source_name.clone(),
            target: settings.target_name.clone(),
        });

        if !is_privileged(self.executor, &settings.tools.id) {
            on_stage(MigrationStage::NotPrivileged);
            return MigrationOutcome::PrivilegeDenied;
        }

        tracing::info!(identifier = %settings.profile_identifier, "removing profile");
        let removed = remove_profile(
            self.executor,
            &settings.tools.profiles,
            &settings.profile_identifier,
            &settings.removal,
        );

        if !removed {
            on_stage(MigrationStage::ProfileRemovalFailed {
                source: settings.source_short_name.clone(),
            });
            return MigrationOutcome::RemovalFailed;
        }

        on_stage(MigrationStage::ProfileRemoved {
            source: settings.source_short_name.clone(),
        });

        if !show_dialog(self.executor, &settings.tools.dialog, &settings.dialog) {
            on_stage(MigrationStage::DialogNotAccepted {
                target: settings.target_name.clone(),
            });
            return MigrationOutcome::DialogNotAccepted;
        }

        on_stage(MigrationStage::LaunchingEnrollment {
            target: settings.target_short_name.clone(),
        });
        launch_enrollment(self.executor, &settings.tools.open, &settings.enrollment_url);

        MigrationOutcome::EnrollmentLaunched
    }

    /// Privilege and profile checks only; never modifies the system.
    pub fn status(&self) -> MigrationStatus {
        let settings = &self.settings;
        MigrationStatus {
            privileged: is_privileged(self.executor, &settings.tools.id),
            profile_identifier: settings.profile_identifier.clone(),
            profile_installed: profile_exists(
                self.executor,
                &settings.tools.profiles,
                &settings.profile_identifier,
            ),
        }
    }
}
