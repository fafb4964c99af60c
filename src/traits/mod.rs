pub mod command;

pub use command::{CommandExecutor, CommandOutput, RealCommandExecutor};

#[cfg(test)]
pub use command::MockCommandExecutor;
