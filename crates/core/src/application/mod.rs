// Application Layer - Use Cases

pub mod config;
pub mod constants;
pub mod launcher;
pub mod locator;

// Re-exports
pub use config::LaunchConfig;
pub use launcher::LaunchService;
pub use locator::RuntimeLocator;
