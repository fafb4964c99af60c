//! Built-in values for the ABE to Jamf Pro migration.

use std::time::Duration;

// ============================================================================
// Enrollment
// ============================================================================

/// Identifier of the MDM enrollment profile installed by Apple Business Essentials.
pub const PROFILE_IDENTIFIER: &str = "com.apple.profile.mdm";

/// Jamf Pro user-initiated enrollment URL, including the invitation token.
pub const ENROLLMENT_URL: &str =
    "https://funcfi.jamfcloud.com/enroll/?invitation=34575975136649195478078314224683433652";

pub const SOURCE_NAME: &str = "Apple Business Essentials";
pub const SOURCE_SHORT_NAME: &str = "ABE";
pub const TARGET_NAME: &str = "Jamf Pro";
pub const TARGET_SHORT_NAME: &str = "Jamf";

// ============================================================================
// Tool Paths
// ============================================================================

pub const ID_PATH: &str = "/usr/bin/id";
pub const PROFILES_PATH: &str = "/usr/bin/profiles";
pub const OPEN_PATH: &str = "/usr/bin/open";

/// SwiftDialog binary. Only this path is checked for existence before use.
pub const DIALOG_PATH: &str = "/usr/local/bin/dialog";

/// Logo shown in the confirmation dialog.
pub const LOGO_PATH: &str = "/Library/Application Support/Rocketman/funcfi-logo-small.png";

/// Directory holding the optional settings file.
pub const SETTINGS_DIR: &str = "/Library/Application Support/Rocketman";

/// Superuser id.
pub const ROOT_UID: u32 = 0;

// ============================================================================
// Removal Polling
// ============================================================================

/// Number of post-removal inspections.
pub const REMOVAL_ATTEMPTS: u32 = 3;

/// Wait before the first inspection, giving the profile daemon time to converge.
pub const REMOVAL_INITIAL_DELAY_MS: u64 = 2000;

/// Multiplier applied to the wait after each inspection that still finds the profile.
pub const REMOVAL_BACKOFF_FACTOR: u32 = 2;

/// Upper bound for a single wait.
pub const REMOVAL_MAX_DELAY_MS: u64 = 8000;

/// Largest accepted number of post-removal inspections.
pub const MAX_REMOVAL_ATTEMPTS: u32 = 10;

/// Calculate the wait before each post-removal inspection.
///
/// Yields one entry per attempt (at least one), starting at `initial_ms` and
/// multiplied by `factor` each time, capped at `max_ms`.
pub fn removal_delays(
    attempts: u32,
    initial_ms: u64,
    factor: u32,
    max_ms: u64,
) -> impl Iterator<Item = Duration> {
    let factor = u64::from(factor.max(1));

    std::iter::successors(Some(initial_ms.min(max_ms)), move |current| {
        Some(current.saturating_mul(factor).min(max_ms))
    })
    .take(attempts.max(1) as usize)
    .map(Duration::from_millis)
}
