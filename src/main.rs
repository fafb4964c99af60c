mod cli;
mod commands;
mod migration;
mod settings;
mod traits;

#[cfg(test)]
mod test_helpers;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use traits::RealCommandExecutor;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let executor = RealCommandExecutor;
    let code = commands::run(&cli, &executor, &mut std::io::stdout());

    ExitCode::from(code)
}
