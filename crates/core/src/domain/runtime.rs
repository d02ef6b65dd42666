// Runtime Location Entity

use super::error::{DomainError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a runtime binary was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    /// One of the ordered candidate paths
    Candidate,
    /// The store directory scan (last resort)
    Store,
}

impl fmt::Display for DiscoverySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candidate => write!(f, "candidate"),
            Self::Store => write!(f, "store"),
        }
    }
}

/// A runtime binary that answered the version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeLocation {
    pub binary: PathBuf,
    pub bin_dir: PathBuf,
    pub version: String,
    pub source: DiscoverySource,
}

impl RuntimeLocation {
    /// Build a location from a verified binary path.
    ///
    /// The containing directory is what gets prepended to the child's PATH,
    /// so a binary without one is rejected.
    pub fn new(
        binary: impl Into<PathBuf>,
        version: impl Into<String>,
        source: DiscoverySource,
    ) -> Result<Self> {
        let binary = binary.into();
        let bin_dir = binary
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| DomainError::MissingBinDir(binary.clone()))?;

        Ok(Self {
            binary,
            bin_dir,
            version: version.into().trim().to_string(),
            source,
        })
    }
}
