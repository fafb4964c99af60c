//! Blocking confirmation dialog through SwiftDialog.

use std::path::Path;

use super::error::{MigrationError, MigrationResult};
use crate::settings::DialogSpec;
use crate::traits::CommandExecutor;

/// Run the dialog and return its exit code. Blocks until the user dismisses it.
pub fn run_dialog(
    executor: &dyn CommandExecutor,
    dialog_path: &str,
    spec: &DialogSpec,
) -> MigrationResult<Option<i32>> {
    if !Path::new(dialog_path).exists() {
        return Err(MigrationError::DialogMissing {
            path: dialog_path.to_string(),
        });
    }

    let output = executor.execute(dialog_path, spec.to_args())?;
    Ok(output.code)
}

/// Show the dialog; `true` only if the single button was pressed (exit status 0).
pub fn show_dialog(executor: &dyn CommandExecutor, dialog_path: &str, spec: &DialogSpec) -> bool {
    match run_dialog(executor, dialog_path, spec) {
        Ok(code) => {
            tracing::debug!(?code, "dialog dismissed");
            code == Some(0)
        }
        Err(e @ MigrationError::DialogMissing { .. }) => {
            tracing::error!(code = e.error_code(), "{}", e);
            false
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Error showing dialog: {}", e);
            false
        }
    }
}
