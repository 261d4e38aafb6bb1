//! Savehooks CLI library
//!
//! This library contains all the CLI logic for savehooks, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use command::Command;
use common::RuntimeContext;

/// Savehooks - run shell commands when files are saved
#[derive(Debug, Parser)]
#[command(name = "savehooks")]
#[command(about = "Run shell commands for files matching glob patterns")]
#[command(version)]
#[command(long_about = "Run shell commands for files matching glob patterns

Commands are configured per hook (onSave, manual) and glob pattern, and may
reference the saved file through ${path}, ${relative}, ${dir}, ${base},
${name}, ${ext}, ${root} and ${project}.

Example configuration (~/.config/savehooks/config.toml):

  [scripts]
  fmt = \"rustfmt ${path}\"

  [hooks.onSave]
  \"**/*.rs\" = \"fmt\"
  \"web/**/*.{js,jsx}\" = [\"eslint --fix ${relative}\"]")]
pub struct Cli {
    /// Path to the config file (.toml or .json)
    #[arg(long, env = "SAVEHOOKS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root commands run in (defaults to the current directory)
    #[arg(long, env = "SAVEHOOKS_PROJECT", value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Seconds a single command may run before it is killed
    #[arg(long, env = "SAVEHOOKS_TIMEOUT", value_name = "SECONDS", default_value_t = 10)]
    pub timeout: u64,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "SAVEHOOKS_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the savehooks CLI
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the hook commands that apply to a file
    List(cmd::list::ListCommand),

    /// Run a file's hook commands as if it had just been saved
    Run(cmd::run::RunCommand),

    /// Run an ad-hoc command template for a file
    Exec(cmd::exec::ExecCommand),

    /// Show the normalized pattern table
    Patterns(cmd::patterns::PatternsCommand),
}

/// Main entry point for the CLI logic
pub fn run(cli: Cli) -> Result<()> {
    savehooks_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let (config, config_file) = common::load_config(cli.config.as_deref())?;

    let project = match cli.project {
        Some(project) => project,
        None => std::env::current_dir()?,
    };

    let context = RuntimeContext::new(
        &config,
        config_file,
        &project,
        Duration::from_secs(cli.timeout),
    )?;

    match cli.command {
        Commands::List(list_cmd) => list_cmd.execute(&context),
        Commands::Run(run_cmd) => run_cmd.execute(&context),
        Commands::Exec(exec_cmd) => exec_cmd.execute(&context),
        Commands::Patterns(patterns_cmd) => patterns_cmd.execute(&context),
    }
}
