// Ctrl+C interrupt source
// reason: tokio::signal installs the handler lazily, on first poll
use async_trait::async_trait;
use tracing::warn;

use circles_launcher_core::port::InterruptSignal;

/// OS interrupt (SIGINT / Ctrl+C) as an InterruptSignal
///
/// Once awaited, Ctrl+C no longer terminates the launcher itself; the
/// launcher decides how to stop the child instead.
pub struct CtrlCSignal;

#[async_trait]
impl InterruptSignal for CtrlCSignal {
    async fn wait(&self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C, interrupts will not be handled");
            std::future::pending::<()>().await
        }
    }
}
