use std::io::Write;

use crate::migration::Orchestrator;
use crate::settings::MigrationSettings;
use crate::traits::CommandExecutor;

/// Print whether the process is privileged and whether the profile is installed.
pub fn status<W: Write>(
    executor: &dyn CommandExecutor,
    settings: MigrationSettings,
    out: &mut W,
) -> u8 {
    let orchestrator = Orchestrator::new(executor, settings);
    let status = orchestrator.status();
    let source = &orchestrator.settings().source_short_name;

    let _ = writeln!(
        out,
        "Running as root: {}",
        if status.privileged { "yes" } else { "no" }
    );
    let _ = writeln!(
        out,
        "{} profile ({}) installed: {}",
        source,
        status.profile_identifier,
        if status.profile_installed { "yes" } else { "no" }
    );

    0
}
