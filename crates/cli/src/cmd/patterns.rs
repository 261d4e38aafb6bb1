//! Patterns command implementation
//!
//! Print the normalized hook table: aliases resolved, nesting flattened and
//! the `files` section merged into the hooks.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::{OutputFormat, RuntimeContext};

/// Show the normalized pattern table
#[derive(Debug, Args)]
pub struct PatternsCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Simple)]
    pub format: OutputFormat,
}

impl Command for PatternsCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let table = context.resolver().snapshot();

        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&*table)?);
            return Ok(());
        }

        match context.config_file() {
            Some(file) => println!("Configuration: {}", file.display().cyan()),
            None => println!("Configuration: {}", "none".dimmed()),
        }
        println!("Project: {}", context.project().display().cyan());

        if table.is_empty() {
            println!("\n{}", "No hooks configured.".yellow());
            return Ok(());
        }

        for hook in table.hooks() {
            let rules = table.rules(hook);
            println!("\n{} ({} patterns)", hook.bold(), rules.len());
            for rule in rules {
                println!("  {}", rule.pattern().green());
                for command in rule.commands() {
                    println!("    → {command}");
                }
            }
        }

        Ok(())
    }
}
