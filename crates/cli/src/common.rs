//! Common utilities and types shared across CLI commands

use anyhow::{Context, Result};
use clap::ValueEnum;
use savehooks_config::{PatternResolver, RawConfig};
use savehooks_engine::{CommandRunner, ProjectRoots};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, colored output
    #[default]
    Simple,
    /// Pretty printed JSON
    Json,
}

/// Load the hook configuration
///
/// An explicitly given file must exist. Without one, the default location is
/// tried and a missing file yields an empty configuration.
///
/// Returns the configuration together with the file it was read from.
pub fn load_config(explicit: Option<&Path>) -> Result<(RawConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match savehooks_config::default_config_file() {
            Some(path) if path.exists() => path,
            other => {
                tracing::debug!(
                    "No configuration file found{}",
                    other
                        .map(|p| format!(" at {}", p.display()))
                        .unwrap_or_default()
                );
                return Ok((RawConfig::default(), None));
            }
        },
    };

    let config = RawConfig::load(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::debug!("Loaded configuration from {}", path.display());

    Ok((config, Some(path)))
}

/// Shared state for every subcommand
#[derive(Debug)]
pub struct RuntimeContext {
    config_file: Option<PathBuf>,
    project: PathBuf,
    resolver: Arc<PatternResolver>,
    runner: CommandRunner,
}

impl RuntimeContext {
    /// Normalize `config` and build a runner rooted at `project`
    pub fn new(
        config: &RawConfig,
        config_file: Option<PathBuf>,
        project: &Path,
        timeout: Duration,
    ) -> Result<Self> {
        let project = std::path::absolute(project)
            .with_context(|| format!("Invalid project directory: {}", project.display()))?;

        let resolver = Arc::new(PatternResolver::from_config(config).with_context(|| {
            match &config_file {
                Some(path) => format!("Invalid configuration in {}", path.display()),
                None => "Invalid configuration".to_string(),
            }
        })?);

        let runner = CommandRunner::builder(Arc::clone(&resolver))
            .project_locator(ProjectRoots::new([project.clone()]))
            .timeout(timeout)
            .build();

        Ok(Self {
            config_file,
            project,
            resolver,
            runner,
        })
    }

    /// File the configuration was loaded from, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Absolute project directory
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Pattern resolver over the loaded configuration
    pub fn resolver(&self) -> &PatternResolver {
        &self.resolver
    }

    /// Command runner
    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// Turn a path given on the command line into the absolute path an
    /// editor would report
    pub fn resolve_path(&self, path: &Path) -> Result<PathBuf> {
        std::path::absolute(path).with_context(|| format!("Invalid path: {}", path.display()))
    }
}
