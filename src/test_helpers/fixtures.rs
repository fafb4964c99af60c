use crate::migration::MigrationError;
use crate::settings::{MigrationSettings, RemovalPolicy};
use crate::traits::CommandOutput;

/// `profiles list` output with the ABE enrollment profile installed.
pub const PROFILES_LIST_WITH_MDM: &str = "\
_computerlevel[1] attribute: profileIdentifier: com.apple.profile.mdm
_computerlevel[2] attribute: profileIdentifier: com.funcfi.wifi.corporate
There are 2 configuration profiles installed
";

/// `profiles list` output after the enrollment profile is gone.
pub const PROFILES_LIST_WITHOUT_MDM: &str = "\
_computerlevel[1] attribute: profileIdentifier: com.funcfi.wifi.corporate
There are 1 configuration profiles installed
";

/// Successful command output with the given stdout.
pub fn stdout(text: &str) -> CommandOutput {
    exited(0, text)
}

/// Command output with an explicit exit code.
pub fn exited(code: i32, text: &str) -> CommandOutput {
    CommandOutput {
        code: Some(code),
        stdout: text.to_string(),
        stderr: String::new(),
    }
}

/// Error returned when `program` cannot be started.
pub fn launch_error(program: &str) -> MigrationError {
    MigrationError::Launch {
        program: program.to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }
}

/// Builder for creating test MigrationSettings instances.
///
/// Starts from the built-in values but never sleeps between removal checks.
pub struct SettingsBuilder {
    settings: MigrationSettings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: MigrationSettings {
                removal: RemovalPolicy::immediate(1),
                ..MigrationSettings::default()
            },
        }
    }

    pub fn profile_identifier(mut self, identifier: &str) -> Self {
        self.settings.profile_identifier = identifier.to_string();
        self
    }

    pub fn enrollment_url(mut self, url: &str) -> Self {
        self.settings.enrollment_url = url.to_string();
        self
    }

    pub fn dialog_path(mut self, path: &str) -> Self {
        self.settings.tools.dialog = path.to_string();
        self
    }

    pub fn removal(mut self, policy: RemovalPolicy) -> Self {
        self.settings.removal = policy;
        self
    }

    pub fn build(self) -> MigrationSettings {
        self.settings
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
