use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "mdm-migrate",
    version,
    about = "Remove the current MDM enrollment profile and start enrollment with a new provider"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Settings file (JSON) overriding the built-in values")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Remove the profile, confirm with the user and open the enrollment URL (default)
    Migrate,
    /// Report privilege and profile state without changing anything
    Status,
    /// Write the built-in settings to the settings file as a template
    InitConfig,
}

impl Cli {
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or(Command::Migrate)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
