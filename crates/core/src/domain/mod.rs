// Domain Layer - Pure launcher logic and entities

pub mod environment;
pub mod error;
pub mod launch;
pub mod runtime;

// Re-exports
pub use environment::{ChildEnvironment, EnvironmentDefaults, PATH_SEPARATOR};
pub use error::DomainError;
pub use launch::{CommandSpec, LaunchOutcome, RunOutcome};
pub use runtime::{DiscoverySource, RuntimeLocation};
