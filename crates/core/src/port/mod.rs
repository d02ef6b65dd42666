// Port Layer - Interfaces for host interaction

pub mod interrupt;
pub mod process_runner;
pub mod runtime_probe;

// Re-exports
pub use interrupt::InterruptSignal;
pub use process_runner::{LaunchError, ProcessRunner};
pub use runtime_probe::{ProbeError, RuntimeProbe};
