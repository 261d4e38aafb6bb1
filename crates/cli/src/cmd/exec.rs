//! Exec command implementation

use anyhow::{Result, bail};
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::RuntimeContext;

/// Run an ad-hoc command template for a path
///
/// The template may use `${project}`, `${path}`, `${relative}`, `${root}`,
/// `${dir}`, `${base}`, `${name}` and `${ext}`.
#[derive(Debug, Args)]
pub struct ExecCommand {
    /// File whose variables are interpolated
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Command template, e.g. "rustfmt ${path}"
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Only print the interpolated command
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Command for ExecCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let path = context.resolve_path(&self.path)?;

        if self.dry_run {
            let vars = context.runner().derive_vars(&path);
            println!("{}", vars.interpolate(&self.command));
            println!("{} {}", "cwd:".dimmed(), vars.project);
            return Ok(());
        }

        if let Err(e) = context.runner().run_command(&path, &self.command) {
            super::print_failure(&e);
            bail!("Command failed for {}", path.display());
        }

        Ok(())
    }
}
