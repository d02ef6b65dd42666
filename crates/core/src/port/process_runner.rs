// Process Runner Port
// Abstraction for spawning the target application and waiting on it

use super::interrupt::InterruptSignal;
use crate::domain::{CommandSpec, RunOutcome};
use async_trait::async_trait;
use thiserror::Error;

/// Launch errors
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Spawn failed for '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("Wait failed: {0}")]
    WaitFailed(String),

    #[error("Failed to stop child process: {0}")]
    StopFailed(String),
}

/// Process Runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns a real child with inherited stdio
/// - MockProcessRunner: scripted outcomes for tests
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Spawn `spec` and block until it exits or `interrupt` fires
    ///
    /// # Errors
    /// - LaunchError::SpawnFailed if the process cannot be started
    /// - LaunchError::WaitFailed if waiting on the child fails
    async fn run(
        &self,
        spec: &CommandSpec,
        interrupt: &dyn InterruptSignal,
    ) -> Result<RunOutcome, LaunchError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Child exits with this status
        Exit(i32),
        /// Child runs until the interrupt fires
        RunUntilInterrupted,
        /// Spawn fails with message
        SpawnFail(String),
    }

    /// Mock Process Runner for testing
    pub struct MockProcessRunner {
        behavior: MockBehavior,
        call_count: Arc<Mutex<usize>>,
        last_spec: Arc<Mutex<Option<CommandSpec>>>,
    }

    impl MockProcessRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                call_count: Arc::new(Mutex::new(0)),
                last_spec: Arc::new(Mutex::new(None)),
            }
        }

        pub fn new_exit(code: i32) -> Self {
            Self::new(MockBehavior::Exit(code))
        }

        pub fn new_spawn_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFail(message.into()))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }

        pub fn last_spec(&self) -> Option<CommandSpec> {
            self.last_spec.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for MockProcessRunner {
        async fn run(
            &self,
            spec: &CommandSpec,
            interrupt: &dyn InterruptSignal,
        ) -> Result<RunOutcome, LaunchError> {
            *self.call_count.lock().unwrap() += 1;
            *self.last_spec.lock().unwrap() = Some(spec.clone());

            match &self.behavior {
                MockBehavior::Exit(code) => Ok(RunOutcome::Exited(*code)),
                MockBehavior::RunUntilInterrupted => {
                    interrupt.wait().await;
                    Ok(RunOutcome::Interrupted)
                }
                MockBehavior::SpawnFail(message) => Err(LaunchError::SpawnFailed {
                    program: spec.program.clone(),
                    message: message.clone(),
                }),
            }
        }
    }
}
