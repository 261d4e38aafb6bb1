//! Command trait for the savehooks CLI

use crate::common::RuntimeContext;
use anyhow::Result;

/// A subcommand that runs against a loaded configuration
///
/// # Example
///
/// ```rust,ignore
/// use clap::Args;
///
/// #[derive(Debug, Args)]
/// pub struct MyCommand {
///     pub path: PathBuf,
/// }
///
/// impl Command for MyCommand {
///     type Output = ();
///
///     fn execute(&self, context: &RuntimeContext) -> Result<()> {
///         let commands = context.resolver().list_hooks(&self.path);
///         Ok(())
///     }
/// }
/// ```
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
