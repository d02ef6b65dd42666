// Central Error Type for the Launcher

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Node.js runtime not found: no candidate or store entry answered the version check")]
    RuntimeNotFound,

    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Launch error: {0}")]
    Launch(#[from] crate::port::LaunchError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<AppError> for crate::domain::LaunchOutcome {
    fn from(err: AppError) -> Self {
        match err {
            AppError::RuntimeNotFound => Self::RuntimeNotFound,
            other => Self::Failed(other.to_string()),
        }
    }
}
