// Subprocess runner implementation
// reason: tokio::process for an awaitable child raced against the interrupt
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use circles_launcher_core::application::constants::{
    INTERRUPT_GRACE_PERIOD, INTERRUPT_SETTLE_WINDOW,
};
use circles_launcher_core::domain::launch::EXIT_CODE_FAILURE;
use circles_launcher_core::domain::{CommandSpec, RunOutcome};
use circles_launcher_core::port::{InterruptSignal, LaunchError, ProcessRunner};

/// Subprocess runner
///
/// Spawns the child with exactly the assembled environment (the inherited
/// one is cleared first), inherited stdio and the given working directory.
pub struct SubprocessRunner {
    grace_period: Duration,
    settle_window: Duration,
}

impl SubprocessRunner {
    /// Create a runner
    ///
    /// # Arguments
    /// * `grace_period` - How long the child gets after SIGTERM before SIGKILL
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessRunner::new(Duration::from_secs(5));
    /// ```
    pub fn new(grace_period: Duration) -> Self {
        Self {
            grace_period,
            settle_window: INTERRUPT_SETTLE_WINDOW,
        }
    }

    fn spawn(&self, spec: &CommandSpec) -> Result<Child, LaunchError> {
        Command::new(&spec.program)
            .args(&spec.args)
            .env_clear()
            .envs(spec.env.iter())
            .current_dir(&spec.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| LaunchError::SpawnFailed {
                program: spec.program.clone(),
                message: e.to_string(),
            })
    }

    /// Ask the child to stop with SIGTERM, then SIGKILL after the grace period
    async fn stop_child(&self, child: &mut Child) -> Result<(), LaunchError> {
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            if let Some(pid) = child.id() {
                // The terminal usually delivered SIGINT to the whole group already
                info!(pid = pid, "Sending SIGTERM for graceful shutdown");
                if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                    debug!(pid = pid, error = %e, "SIGTERM not delivered");
                }

                match timeout(self.grace_period, child.wait()).await {
                    Ok(Ok(status)) => {
                        info!(pid = pid, exit_code = ?status.code(), "Child exited after interrupt");
                        return Ok(());
                    }
                    Ok(Err(e)) => return Err(LaunchError::WaitFailed(e.to_string())),
                    Err(_) => {
                        warn!(pid = pid, "Child did not exit after SIGTERM, sending SIGKILL");
                    }
                }
            }
        }

        child
            .kill()
            .await
            .map_err(|e| LaunchError::StopFailed(e.to_string()))
    }
}

impl Default for SubprocessRunner {
    fn default() -> Self {
        Self::new(INTERRUPT_GRACE_PERIOD)
    }
}

#[async_trait]
impl ProcessRunner for SubprocessRunner {
    async fn run(
        &self,
        spec: &CommandSpec,
        interrupt: &dyn InterruptSignal,
    ) -> Result<RunOutcome, LaunchError> {
        info!(
            program = %spec.program,
            args = ?spec.args,
            working_dir = %spec.working_dir.display(),
            "Spawning child process"
        );

        let mut child = self.spawn(spec)?;

        // One listener for the whole run: a fresh one would miss a Ctrl+C
        // that was already delivered
        let mut interrupted = interrupt.wait();

        // Terminal Ctrl+C hits the child and the launcher together; the
        // interrupt must win when both are ready
        tokio::select! {
            biased;

            _ = &mut interrupted => {
                if let Err(e) = self.stop_child(&mut child).await {
                    warn!(error = %e, "Failed to stop child after interrupt");
                }
                Ok(RunOutcome::Interrupted)
            }
            status = child.wait() => {
                let status = status.map_err(|e| LaunchError::WaitFailed(e.to_string()))?;

                // The child can be reaped before the signal driver reports SIGINT
                if timeout(self.settle_window, &mut interrupted).await.is_ok() {
                    debug!(exit_code = ?status.code(), "Child exited on interrupt");
                    return Ok(RunOutcome::Interrupted);
                }
                Ok(RunOutcome::Exited(exit_code(status)))
            }
        }
    }
}

/// Exit code of the child; a signal death maps to 128 + signal on Unix
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_CODE_FAILURE
}
