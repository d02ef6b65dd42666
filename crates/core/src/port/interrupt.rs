// Interrupt Port
// Source of the user's "stop" request while the child is running

use async_trait::async_trait;

/// Resolves once the user asks the launcher to stop (Ctrl+C)
///
/// Implementations:
/// - CtrlCSignal (infra-system): OS interrupt delivery
/// - mocks: never / immediate / delayed, for tests
#[async_trait]
pub trait InterruptSignal: Send + Sync {
    /// Wait until an interrupt arrives. May never resolve.
    async fn wait(&self);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::time::Duration;

    /// Never fires
    pub struct NeverInterrupt;

    #[async_trait]
    impl InterruptSignal for NeverInterrupt {
        async fn wait(&self) {
            std::future::pending::<()>().await
        }
    }

    /// Fires as soon as it is awaited
    pub struct ImmediateInterrupt;

    #[async_trait]
    impl InterruptSignal for ImmediateInterrupt {
        async fn wait(&self) {}
    }

    /// Fires after a fixed delay, to land in the middle of a child's run
    pub struct DelayedInterrupt(pub Duration);

    #[async_trait]
    impl InterruptSignal for DelayedInterrupt {
        async fn wait(&self) {
            tokio::time::sleep(self.0).await
        }
    }
}
