// Circles Launcher Infrastructure - System Adapters
// Implements: RuntimeProbe, ProcessRunner, InterruptSignal

pub mod interrupt;
pub mod runtime_probe_impl;
pub mod subprocess_runner;

pub use interrupt::CtrlCSignal;
pub use runtime_probe_impl::CommandRuntimeProbe;
pub use subprocess_runner::SubprocessRunner;
