//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use anyhow::Context;
use scoreai_config::Config;
use std::path::Path;

mod info;
mod init;
mod run;
mod version;

pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use run::{RunInput, RunStrategy};
pub use version::VersionStrategy;

/// Load the config from an explicit path, or from the default location.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load().context("Failed to load default config"),
    }
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
