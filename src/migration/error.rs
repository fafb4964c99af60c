//! Error types for the migration steps.

use thiserror::Error;

/// Result type alias for migration operations.
pub type MigrationResult<T> = Result<T, MigrationError>;

/// Errors that can occur while migrating an enrollment.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// An external program could not be started or its output could not be read.
    #[error("Failed to execute {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error for the settings file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The identity utility printed something that is not a user id.
    #[error("Unexpected user id output: {output:?}")]
    InvalidUserId { output: String },

    /// The identity utility exited with a failure status.
    #[error("{program} exited with status {code:?}")]
    ExitStatus { program: String, code: Option<i32> },

    /// The dialog executable is not installed.
    #[error("SwiftDialog not found at {path}")]
    DialogMissing { path: String },

    /// Settings file contents are unusable.
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },

    /// Process is not running as the superuser.
    #[error("This tool must be run with administrator privileges")]
    NotPrivileged,
}

impl MigrationError {
    /// Whether this error means the run must stop with exit code 1.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MigrationError::NotPrivileged)
    }

    /// Get a stable error code for support purposes.
    pub fn error_code(&self) -> &'static str {
        match self {
            MigrationError::Launch { .. } => "MIG-001",
            MigrationError::Io(_) => "MIG-002",
            MigrationError::Json(_) => "MIG-003",
            MigrationError::InvalidUserId { .. } => "MIG-010",
            MigrationError::ExitStatus { .. } => "MIG-011",
            MigrationError::DialogMissing { .. } => "MIG-020",
            MigrationError::InvalidSettings { .. } => "MIG-030",
            MigrationError::NotPrivileged => "MIG-099",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MigrationError::DialogMissing {
                path: "/usr/local/bin/dialog".into()
            }
            .to_string(),
            "SwiftDialog not found at /usr/local/bin/dialog"
        );
        assert_eq!(
            MigrationError::NotPrivileged.to_string(),
            "This tool must be run with administrator privileges"
        );
    }

    #[test]
    fn test_only_privilege_error_is_fatal() {
        assert!(MigrationError::NotPrivileged.is_fatal());
        assert!(!MigrationError::InvalidUserId {
            output: "root".into()
        }
        .is_fatal());
        assert!(!MigrationError::DialogMissing {
            path: "/usr/local/bin/dialog".into()
        }
        .is_fatal());
        assert!(!MigrationError::Launch {
            program: "/usr/bin/id".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .is_fatal());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MigrationError::NotPrivileged.error_code(), "MIG-099");
        let launch = MigrationError::Launch {
            program: "/usr/bin/profiles".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(launch.error_code(), "MIG-001");
    }

    #[test]
    fn test_launch_error_names_program() {
        let launch = MigrationError::Launch {
            program: "/usr/bin/open".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(launch.to_string().starts_with("Failed to execute /usr/bin/open"));
    }
}
