//! List command implementation
//!
//! Show every command configured for a path, grouped by hook.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::{OutputFormat, RuntimeContext};

/// List the commands that apply to a path
#[derive(Debug, Args)]
pub struct ListCommand {
    /// File to look up
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Simple)]
    pub format: OutputFormat,
}

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let path = context.resolve_path(&self.path)?;
        let commands = context.resolver().list_hooks(&path);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&commands)?);
            }
            OutputFormat::Simple => {
                if commands.is_empty() {
                    println!("{}", format!("No hooks apply to {}", path.display()).yellow());
                    return Ok(());
                }

                println!("{} {}", "Hooks for".bold(), path.display().cyan());
                for command in &commands {
                    println!("  • {:<8} {}", command.hook.green(), command.command);
                }
            }
        }

        Ok(())
    }
}
