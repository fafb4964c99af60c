//! Configuration profile inspection and removal through the `profiles` utility.

use std::thread;

use super::error::MigrationResult;
use crate::settings::RemovalPolicy;
use crate::traits::CommandExecutor;

/// Return the full, unfiltered `profiles list` output.
pub fn list_profiles(
    executor: &dyn CommandExecutor,
    profiles_path: &str,
) -> MigrationResult<String> {
    let output = executor.execute(profiles_path, vec!["list".to_string()])?;
    Ok(output.stdout)
}

/// Whether `identifier` appears anywhere in `listing`.
///
/// Plain substring match: an identifier embedded in a longer token still counts.
pub fn listing_contains(listing: &str, identifier: &str) -> bool {
    listing.contains(identifier)
}

/// Whether a profile with `identifier` is installed. Failure to list counts as absent.
pub fn profile_exists(
    executor: &dyn CommandExecutor,
    profiles_path: &str,
    identifier: &str,
) -> bool {
    match list_profiles(executor, profiles_path) {
        Ok(listing) => listing_contains(&listing, identifier),
        Err(e) => {
            tracing::error!(code = e.error_code(), "Error checking profiles: {}", e);
            false
        }
    }
}

/// Ask for removal of `identifier`, then poll until it is gone.
///
/// The removal command's exit status is only logged; the listing decides.
/// Returns `false` if the profile is still listed after every inspection
/// in `policy`, or if the removal command could not be started.
pub fn remove_profile(
    executor: &dyn CommandExecutor,
    profiles_path: &str,
    identifier: &str,
    policy: &RemovalPolicy,
) -> bool {
    let args = vec![
        "remove".to_string(),
        "-identifier".to_string(),
        identifier.to_string(),
    ];

    match executor.execute(profiles_path, args) {
        Ok(output) if !output.success() => {
            tracing::warn!(
                status = ?output.code,
                stderr = output.stderr.trim(),
                "profile removal command reported failure, checking listing anyway"
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(code = e.error_code(), "Error removing profile: {}", e);
            return false;
        }
    }

    let attempts = policy.inspections();
    for (attempt, delay) in policy.delays().enumerate() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        if !profile_exists(executor, profiles_path, identifier) {
            tracing::info!(identifier, attempt = attempt + 1, "profile no longer listed");
            return true;
        }

        tracing::debug!(identifier, attempt = attempt + 1, attempts, "profile still listed");
    }

    tracing::warn!(identifier, attempts, "profile still listed after removal");
    false
}
