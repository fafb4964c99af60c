//! Superuser detection through the `id` utility.

use super::config::ROOT_UID;
use super::error::{MigrationError, MigrationResult};
use crate::traits::CommandExecutor;

/// Read the effective user id by running `<id_path> -u`.
pub fn effective_uid(executor: &dyn CommandExecutor, id_path: &str) -> MigrationResult<u32> {
    let output = executor.execute(id_path, vec!["-u".to_string()])?;

    if !output.success() {
        return Err(MigrationError::ExitStatus {
            program: id_path.to_string(),
            code: output.code,
        });
    }

    let trimmed = output.stdout.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| MigrationError::InvalidUserId {
            output: trimmed.to_string(),
        })
}

/// Fail with `NotPrivileged` unless the effective user id is root.
pub fn require_privileged(executor: &dyn CommandExecutor, id_path: &str) -> MigrationResult<()> {
    let uid = effective_uid(executor, id_path)?;
    tracing::debug!(uid, "effective user id");

    if uid != ROOT_UID {
        return Err(MigrationError::NotPrivileged);
    }
    Ok(())
}

/// Whether the process runs as root. Any failure counts as unprivileged.
pub fn is_privileged(executor: &dyn CommandExecutor, id_path: &str) -> bool {
    match require_privileged(executor, id_path) {
        Ok(()) => true,
        Err(e) if e.is_fatal() => {
            tracing::debug!(code = e.error_code(), "{}", e);
            false
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Error checking privileges: {}", e);
            false
        }
    }
}
