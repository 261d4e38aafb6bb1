//! Run command implementation

use anyhow::{Result, bail};
use clap::Args;
use owo_colors::OwoColorize;
use savehooks_core::HookName;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::RuntimeContext;

/// Run the commands configured for a path, as if it had just been saved
#[derive(Debug, Args)]
pub struct RunCommand {
    /// File the hook runs for
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Hook to run (onSave, manual)
    #[arg(long, default_value_t = HookName::OnSave)]
    pub hook: HookName,
}

impl Command for RunCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let path = context.resolve_path(&self.path)?;
        let commands = context.resolver().get_commands(&path, self.hook);

        if commands.is_empty() {
            println!(
                "{}",
                format!("No {} hooks for {}", self.hook, path.display()).yellow()
            );
            return Ok(());
        }

        println!(
            "{} {} command(s) for {}",
            "Running".bold(),
            commands.len(),
            path.display().cyan()
        );

        if let Err(e) = context.runner().run(&path, self.hook) {
            super::print_failure(&e);
            bail!("{} hook failed for {}", self.hook, path.display());
        }

        println!("{} {} hooks completed", "✓".green(), self.hook);
        Ok(())
    }
}
