use std::io::Write;

use crate::migration::Orchestrator;
use crate::settings::MigrationSettings;
use crate::traits::CommandExecutor;

/// Run the full migration, writing each stage line to `out`.
pub fn migrate<W: Write>(
    executor: &dyn CommandExecutor,
    settings: MigrationSettings,
    out: &mut W,
) -> u8 {
    let orchestrator = Orchestrator::new(executor, settings);

    let outcome = orchestrator.run(|stage| {
        let _ = writeln!(out, "{}", stage.message());
    });

    tracing::info!(?outcome, "migration finished");
    outcome.exit_code()
}
