// Launch Service
// discover runtime -> build environment -> spawn child -> wait -> exit status

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::config::LaunchConfig;
use super::locator::RuntimeLocator;
use crate::domain::environment::{DATABASE_URL_VAR, NODE_ENV_VAR};
use crate::domain::{ChildEnvironment, CommandSpec, LaunchOutcome, RunOutcome};
use crate::error::{AppError, Result};
use crate::port::{InterruptSignal, ProcessRunner, RuntimeProbe};

pub struct LaunchService {
    locator: RuntimeLocator,
    runner: Arc<dyn ProcessRunner>,
    config: LaunchConfig,
}

impl LaunchService {
    pub fn new(
        probe: Arc<dyn RuntimeProbe>,
        runner: Arc<dyn ProcessRunner>,
        config: LaunchConfig,
    ) -> Self {
        Self {
            locator: RuntimeLocator::new(probe, &config),
            runner,
            config,
        }
    }

    /// Locate the runtime and build the child invocation without spawning it
    ///
    /// # Errors
    /// - AppError::RuntimeNotFound if no runtime answers the version check
    /// - AppError::Domain if the runtime directory cannot go on PATH
    pub async fn prepare<I, K, V>(&self, inherited: I, working_dir: PathBuf) -> Result<CommandSpec>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let location = self.locator.locate().await.ok_or(AppError::RuntimeNotFound)?;

        let env =
            ChildEnvironment::assemble(inherited, &location.bin_dir, &self.config.env_defaults)?;

        if env.database_url_defaulted() {
            warn!("⚠️ DATABASE_URL not set, using default");
        }
        info!(
            database = %env.get_lossy(DATABASE_URL_VAR).unwrap_or_default(),
            node_env = %env.get_lossy(NODE_ENV_VAR).unwrap_or_default(),
            bin_dir = %location.bin_dir.display(),
            "Environment assembled"
        );

        Ok(CommandSpec {
            program: self.config.program.clone(),
            args: self.config.launch_args(),
            env,
            working_dir,
        })
    }

    /// Run a prepared command and map the result to an outcome
    pub async fn execute(&self, spec: &CommandSpec, interrupt: &dyn InterruptSignal) -> LaunchOutcome {
        match self.run_child(spec, interrupt).await {
            Ok(RunOutcome::Interrupted) => {
                info!("🛑 Server stopped by user");
                LaunchOutcome::Interrupted
            }
            Ok(outcome) => outcome.into(),
            Err(e) => {
                error!(error = %e, "❌ Error starting server");
                LaunchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Full launch: prepare, then execute
    ///
    /// Never spawns anything when the runtime cannot be found.
    pub async fn launch<I, K, V>(
        &self,
        inherited: I,
        working_dir: PathBuf,
        interrupt: &dyn InterruptSignal,
    ) -> LaunchOutcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        match self.prepare(inherited, working_dir).await {
            Ok(spec) => self.execute(&spec, interrupt).await,
            Err(AppError::RuntimeNotFound) => {
                error!("❌ Node.js not found in system");
                AppError::RuntimeNotFound.into()
            }
            Err(e) => {
                error!(error = %e, "❌ Could not prepare launch");
                e.into()
            }
        }
    }

    async fn run_child(
        &self,
        spec: &CommandSpec,
        interrupt: &dyn InterruptSignal,
    ) -> Result<RunOutcome> {
        info!(command = %spec.display_line(), "🔄 Starting development server...");

        let outcome = self.runner.run(spec, interrupt).await?;

        if let RunOutcome::Exited(code) = outcome {
            info!(exit_code = code, "Development server exited");
        }
        Ok(outcome)
    }
}
