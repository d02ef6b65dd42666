// Domain Error Types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Path entry {} contains the path separator '{separator}'", .entry.display())]
    InvalidPathEntry { entry: PathBuf, separator: char },

    // Unreachable from the locator, which resolves bare names before building a location
    #[error("Runtime binary has no parent directory: {}", .0.display())]
    MissingBinDir(PathBuf),
}

pub type Result<T> = std::result::Result<T, DomainError>;
