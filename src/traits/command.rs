use std::process::Output;

#[cfg(test)]
use mockall::automock;

use crate::migration::{MigrationError, MigrationResult};

/// Exit status and captured text of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Abstraction over external command execution (id, profiles, open, dialog).
/// This allows mocking OS-level commands in tests.
#[cfg_attr(test, automock)]
pub trait CommandExecutor: Send + Sync {
    /// Execute an external command and block until it exits.
    fn execute(&self, program: &str, args: Vec<String>) -> MigrationResult<CommandOutput>;
}

/// Real implementation that delegates to std::process::Command
#[derive(Default)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, program: &str, args: Vec<String>) -> MigrationResult<CommandOutput> {
        tracing::debug!(program, ?args, "executing");
        std::process::Command::new(program)
            .args(&args)
            .output()
            .map(CommandOutput::from)
            .map_err(|source| MigrationError::Launch {
                program: program.to_string(),
                source,
            })
    }
}
