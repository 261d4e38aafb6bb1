//! Hook command runner
//!
//! Resolves the commands configured for a saved path, interpolates path
//! variables into them and executes the resulting command lines one after
//! another. The first failure stops the chain.

use crate::executor::ShellCommandExecutor;
use crate::system::{ProjectRoots, RealFileSystem};
use crate::vars::PathVars;
use savehooks_config::PatternResolver;
use savehooks_core::{ExecOptions, ExecutionError, FileSystem, HookName, ProjectLocator, ShellExecutor};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Time a single command may run before it is killed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs hook commands for saved paths
///
/// The runner is `Send + Sync`; independent runs may happen concurrently and
/// only share the resolver's current table.
///
/// # Examples
///
/// ```
/// use savehooks_config::PatternResolver;
/// use savehooks_core::HookName;
/// use savehooks_engine::CommandRunner;
/// use std::path::Path;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let runner = CommandRunner::builder(Arc::new(PatternResolver::new()))
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// // Nothing configured, nothing to run
/// runner.run(Path::new("src/main.rs"), HookName::OnSave).unwrap();
/// ```
pub struct CommandRunner {
    resolver: Arc<PatternResolver>,
    locator: Box<dyn ProjectLocator>,
    fs: Box<dyn FileSystem>,
    executor: Box<dyn ShellExecutor>,
    timeout: Duration,
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("resolver", &self.resolver)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CommandRunner {
    /// Runner with the default collaborators
    ///
    /// For custom configuration, use [`CommandRunner::builder`].
    pub fn new(resolver: Arc<PatternResolver>) -> Self {
        Self::builder(resolver).build()
    }

    /// Create a builder for customizing the runner
    pub fn builder(resolver: Arc<PatternResolver>) -> CommandRunnerBuilder {
        CommandRunnerBuilder::new(resolver)
    }

    /// Resolver the commands come from
    pub fn resolver(&self) -> &Arc<PatternResolver> {
        &self.resolver
    }

    /// Timeout applied to each command
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Derive path variables for `path`
    pub fn derive_vars(&self, path: &Path) -> PathVars {
        PathVars::derive(path, self.locator.as_ref(), self.fs.as_ref())
    }

    /// Run every command configured for `path` under `hook`
    ///
    /// Commands run in configuration order; the first failing command is
    /// returned and the rest are skipped. No matching command is a success.
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn run(&self, path: &Path, hook: HookName) -> Result<(), ExecutionError> {
        let commands = self.resolver.get_commands(path, hook);
        if commands.is_empty() {
            tracing::debug!("No {} commands for path", hook);
            return Ok(());
        }

        let vars = self.derive_vars(path);
        tracing::info!("Running {} {} command(s)", commands.len(), hook);

        for template in &commands {
            self.execute(template, &vars)?;
        }

        Ok(())
    }

    /// Run a single caller-supplied command template for `path`
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn run_command(&self, path: &Path, template: &str) -> Result<(), ExecutionError> {
        let vars = self.derive_vars(path);
        self.execute(template, &vars)
    }

    fn execute(&self, template: &str, vars: &PathVars) -> Result<(), ExecutionError> {
        let command = vars.interpolate(template);
        let options = ExecOptions {
            cwd: PathBuf::from(&vars.project),
            timeout: self.timeout,
        };

        tracing::info!("Executing: {}", command);
        tracing::debug!("Working directory: {}", options.cwd.display());

        match self.executor.execute(&command, &options) {
            Ok(()) => {
                tracing::debug!("Command completed successfully");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    stdout = %e.stdout,
                    stderr = %e.stderr,
                    "Command '{}' failed: {}",
                    command,
                    e
                );
                Err(e)
            }
        }
    }
}

/// Builder for [`CommandRunner`]
pub struct CommandRunnerBuilder {
    resolver: Arc<PatternResolver>,
    locator: Box<dyn ProjectLocator>,
    fs: Box<dyn FileSystem>,
    executor: Box<dyn ShellExecutor>,
    timeout: Duration,
}

impl CommandRunnerBuilder {
    /// Start from the defaults: no project roots, the real filesystem, the
    /// platform shell and [`DEFAULT_TIMEOUT`]
    pub fn new(resolver: Arc<PatternResolver>) -> Self {
        Self {
            resolver,
            locator: Box::new(ProjectRoots::default()),
            fs: Box::new(RealFileSystem),
            executor: Box::new(ShellCommandExecutor::default()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set how paths are mapped to projects
    #[must_use]
    pub fn project_locator(mut self, locator: impl ProjectLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Set the filesystem used for directory checks
    #[must_use]
    pub fn file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Set the executor that runs command lines
    #[must_use]
    pub fn executor(mut self, executor: impl ShellExecutor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    /// Set the per-command timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the runner
    pub fn build(self) -> CommandRunner {
        CommandRunner {
            resolver: self.resolver,
            locator: self.locator,
            fs: self.fs,
            executor: self.executor,
            timeout: self.timeout,
        }
    }
}
