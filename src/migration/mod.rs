//! Migration of a Mac from one MDM provider to another.
//!
//! The run consists of:
//! 1. **Privilege Check** - `id -u` must report root
//! 2. **Profile Removal** - `profiles remove -identifier <id>`, then poll
//!    `profiles list` until the identifier is gone
//! 3. **Confirmation** - SwiftDialog with a single Continue button
//! 4. **Enrollment** - `open <enrollment url>`
//!
//! Every external program is reached through [`CommandExecutor`](crate::traits::CommandExecutor),
//! so each step can be driven by a mock in tests.
//!
//! # Example
//!
//! ```ignore
//! use migration::Orchestrator;
//!
//! let executor = RealCommandExecutor;
//! let orchestrator = Orchestrator::new(&executor, MigrationSettings::default());
//! let outcome = orchestrator.run(|stage| println!("{}", stage.message()));
//! std::process::exit(outcome.exit_code().into());
//! ```

pub mod config;
mod dialog;
mod enrollment;
mod error;
mod orchestrator;
mod privilege;
mod profiles;

pub use error::{MigrationError, MigrationResult};
pub use orchestrator::{MigrationOutcome, MigrationStage, MigrationStatus, Orchestrator};
