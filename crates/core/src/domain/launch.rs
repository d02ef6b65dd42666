// Launch Entities

use super::environment::ChildEnvironment;
use std::fmt;
use std::path::PathBuf;

/// Exit status reported when the launcher itself fails
pub const EXIT_CODE_FAILURE: i32 = 1;

/// Exit status reported when the user interrupts the child
pub const EXIT_CODE_INTERRUPTED: i32 = 0;

/// Fully resolved child invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: ChildEnvironment,
    pub working_dir: PathBuf,
}

impl CommandSpec {
    /// Human-readable command line, e.g. `npm run dev`
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a spawned child finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Child exited on its own with this status
    Exited(i32),
    /// Launcher received an interrupt while waiting
    Interrupted,
}

/// Result of a complete launch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// No runtime answered the version check; nothing was spawned
    RuntimeNotFound,
    /// Child exited with this status
    Exited(i32),
    /// Interrupted by the user (clean stop)
    Interrupted,
    /// Environment assembly, spawn or wait failed
    Failed(String),
}

impl LaunchOutcome {
    /// Process exit status the launcher should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RuntimeNotFound | Self::Failed(_) => EXIT_CODE_FAILURE,
            Self::Exited(code) => *code,
            Self::Interrupted => EXIT_CODE_INTERRUPTED,
        }
    }
}

impl From<RunOutcome> for LaunchOutcome {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Exited(code) => Self::Exited(code),
            RunOutcome::Interrupted => Self::Interrupted,
        }
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuntimeNotFound => write!(f, "runtime not found"),
            Self::Exited(code) => write!(f, "exited with status {}", code),
            Self::Interrupted => write!(f, "stopped by user"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
