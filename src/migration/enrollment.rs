//! Hand the enrollment URL to the default URL handler.

use crate::traits::CommandExecutor;

/// Open `url` with `open_path` and wait for the opener to exit.
///
/// Enrollment completion is not verified; failures are only logged.
pub fn launch_enrollment(executor: &dyn CommandExecutor, open_path: &str, url: &str) {
    match executor.execute(open_path, vec![url.to_string()]) {
        Ok(output) if output.success() => {
            tracing::info!("enrollment page opened");
        }
        Ok(output) => {
            tracing::warn!(
                status = ?output.code,
                stderr = output.stderr.trim(),
                "URL opener exited with failure"
            );
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Error starting enrollment: {}", e);
        }
    }
}
